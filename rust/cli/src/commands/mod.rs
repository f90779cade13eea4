//! Command handler modules for the Four-in-a-Row CLI.
//!
//! Each subcommand lives in its own module and exposes one public
//! `handle_COMMAND_command` function. Output streams (`&mut dyn Write`) and
//! the input stream (`&mut dyn BufRead`) are passed in, and errors are
//! propagated as [`crate::CliError`].

mod cfg;
mod play;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
