//! Drake device entry point.
//!
//! Wires together the configured byte sources, the keyboard transport, and
//! the script session, then runs the poll loop.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ AppConfig::load()        -- TOML config, defaults on first boot
//!  └─ keyboard transport       -- HID gadget device, or --dry-run tracer
//!  └─ mode:
//!       ├─ --script FILE       -> play the file through the session, exit
//!       └─ live                -> poll TCP link + stdin forever
//! ```
//!
//! The live loop is deliberately simple: one poll reads at most one
//! complete line and executes it to completion (delays included) before
//! anything else happens. When no line is available the loop sleeps
//! briefly instead of spinning.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use drake_core::{ByteSource, Dispatch, Interpreter, KeyboardEmitter};
use drake_device::application::session::{ScriptSession, SessionStep};
use drake_device::infrastructure::keyboard::{HidGadgetKeyboard, TraceKeyboard};
use drake_device::infrastructure::line_source::{StdinSource, TcpSource};
use drake_device::infrastructure::storage::AppConfig;

/// How long the live loop sleeps when no input is pending.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Parser)]
#[command(author, version, about = "USB keystroke-injection device core")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "drake.toml")]
    config: PathBuf,

    /// Play a script file through the interpreter and exit
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Log key events instead of writing to the HID gadget
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;

    // Structured logging; RUST_LOG overrides the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.device.log_level.clone())),
        )
        .init();

    info!("Drake device starting");

    let mut keyboard: Box<dyn KeyboardEmitter> = if cli.dry_run {
        info!("dry run: key events will be logged, not emitted");
        Box::new(TraceKeyboard)
    } else {
        let gadget = HidGadgetKeyboard::open(&config.device.gadget_path).with_context(|| {
            format!(
                "opening HID gadget {}",
                config.device.gadget_path.display()
            )
        })?;
        Box::new(gadget)
    };

    let interpreter = Interpreter::with_default_delay(config.interpreter.default_delay_ms);
    let mut session = ScriptSession::new(interpreter);

    if let Some(path) = cli.script {
        return play_script(&path, &mut session, keyboard.as_mut());
    }

    // ── Live sources, polled in priority order: control link, then stdin ──────
    let mut tcp = match &config.input.listen_addr {
        Some(addr) => Some(TcpSource::bind(addr).context("starting control link")?),
        None => None,
    };
    let mut stdin = if config.input.stdin {
        Some(StdinSource::spawn().context("starting stdin source")?)
    } else {
        None
    };
    anyhow::ensure!(
        tcp.is_some() || stdin.is_some(),
        "no input sources configured; enable stdin or set input.listen_addr"
    );

    info!("Drake device ready");
    loop {
        let mut sources: Vec<&mut dyn ByteSource> = Vec::with_capacity(2);
        if let Some(tcp) = tcp.as_mut() {
            sources.push(tcp);
        }
        if let Some(stdin) = stdin.as_mut() {
            sources.push(stdin);
        }

        if session.poll(&mut sources, keyboard.as_mut()) == SessionStep::Idle {
            thread::sleep(IDLE_POLL_INTERVAL);
        }
    }
}

/// Plays a script file through the session and reports a summary.
fn play_script(
    path: &Path,
    session: &mut ScriptSession,
    keyboard: &mut dyn KeyboardEmitter,
) -> anyhow::Result<()> {
    let mut bytes =
        fs::read(path).with_context(|| format!("reading script {}", path.display()))?;
    // The assembler only completes terminated lines; close the final one.
    if bytes.last() != Some(&b'\n') {
        bytes.push(b'\n');
    }

    let mut source: VecDeque<u8> = bytes.into();
    let outcomes = session.run_until_idle(&mut [&mut source], keyboard);

    let rejected = outcomes
        .iter()
        .filter(|o| matches!(o, Dispatch::Bad | Dispatch::InvalidInput))
        .count();
    info!(lines = outcomes.len(), rejected, "script finished");
    Ok(())
}
