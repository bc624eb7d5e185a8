//! Criterion benchmarks for the drake-core hot paths.
//!
//! Measures key-name resolution, line assembly, and full interpretation of
//! event-emitting lines. Delay-performing directives are deliberately
//! excluded: a benchmark that sleeps measures the sleep.
//!
//! Run with:
//! ```bash
//! cargo bench --package drake-core --bench script_bench
//! ```

use std::collections::VecDeque;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use drake_core::{FeedOutcome, Interpreter, LineAssembler, RecordingKeyboard};

/// Key names spanning the fast and slow ends of the resolver table,
/// plus a miss.
const BENCH_KEY_NAMES: &[&str] = &[
    "POWER",
    "ENTER",
    "LEFTARROW",
    "LEFT",
    "ESC",
    "CAPS_LOCK",
    "MEDIA_PLAY_PAUSE",
    "a",
    "Z",
    "0",
    "9",
    "F1",
    "F9",
    "NOT_A_KEY",
];

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("keymap_names");

    group.bench_function("resolve_single", |b| {
        b.iter(|| drake_core::keymap::names::resolve(black_box("ENTER")))
    });

    group.bench_function("resolve_batch_14", |b| {
        b.iter(|| {
            BENCH_KEY_NAMES
                .iter()
                .map(|name| drake_core::keymap::names::resolve(black_box(name)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

fn bench_line_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_assembler");

    // A 40-line script of short commands, newline terminated.
    let script: Vec<u8> = (0..40)
        .flat_map(|i| format!("STRING line number {i}\n").into_bytes())
        .collect();

    group.bench_function("assemble_40_lines", |b| {
        b.iter(|| {
            let mut source: VecDeque<u8> = script.iter().copied().collect();
            let mut assembler = LineAssembler::new();
            let mut lines = 0usize;
            while let Ok(FeedOutcome::LineReady) = assembler.feed(&mut [&mut source]) {
                lines += 1;
                assembler.reset();
            }
            black_box(lines)
        })
    });

    group.finish();
}

fn bench_interpret(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpreter");

    group.bench_function("string_32_chars", |b| {
        let mut interpreter = Interpreter::new();
        let mut keyboard = RecordingKeyboard::new();
        b.iter(|| {
            keyboard.clear();
            interpreter.interpret(black_box("STRING The quick brown fox jumps!"), &mut keyboard)
        })
    });

    group.bench_function("chord_ctrl_alt_del", |b| {
        let mut interpreter = Interpreter::new();
        let mut keyboard = RecordingKeyboard::new();
        b.iter(|| {
            keyboard.clear();
            interpreter.interpret(black_box("CTRL-ALT DEL"), &mut keyboard)
        })
    });

    group.bench_function("reject_unknown", |b| {
        let mut interpreter = Interpreter::new();
        let mut keyboard = RecordingKeyboard::new();
        b.iter(|| interpreter.interpret(black_box("NOT_A_DIRECTIVE"), &mut keyboard))
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_line_assembly, bench_interpret);
criterion_main!(benches);
