//! # ghx CLI Library
//!
//! Command definitions, one-shot command handlers and the interactive
//! terminal shell of the ghx command-line tool.

pub mod cli;
pub mod completion;
pub mod tui;
