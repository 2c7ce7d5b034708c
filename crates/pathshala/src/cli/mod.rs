//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the pathshala binary.

mod commands;
mod generate;
mod library;
mod render;

pub use commands::{Cli, Commands};
pub use generate::{handle_adapt, handle_lesson, handle_question_paper, handle_slides};
pub use library::handle_library_command;
