//! The script engine: line assembly, directive parsing, and interpretation.
//!
//! Control flow through this module:
//!
//! ```text
//! ByteSource(s) ──> LineAssembler ──(complete line)──> Interpreter
//!                                                        │
//!                                        key events ─────┴──── delays
//!                                            │
//!                                            v
//!                                     KeyboardEmitter
//! ```
//!
//! One line is read and executed to completion before the next is assembled;
//! there is no pipelining and no concurrency in this path.

pub mod directive;
pub mod emitter;
pub mod interpreter;
pub mod line;
pub mod numeric;
pub mod words;
