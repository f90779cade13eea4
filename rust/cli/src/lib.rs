//! # Four-in-a-Row CLI Library
//!
//! Console front end for the `fourinarow_engine` crate: two players share
//! the keyboard and take turns dropping markers into a 7x6 board.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments, loads configuration, executes the
//! subcommand and returns the process exit code. [`run_with_input`] does the
//! same with an injected input stream.
//!
//! ## Example Usage
//!
//! ```
//! use std::io::Cursor;
//! let mut input = Cursor::new("1\n7\n1\n7\n1\n7\n1\n");
//! let (mut out, mut err) = (Vec::new(), Vec::new());
//! let code = fourinarow_cli::run_with_input(["fourinarow"], &mut input, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Player X wins!"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play` (default): play one game
//! - `cfg`: display the resolved configuration

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod input;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod render;
pub mod ui;

use cli::{Commands, FourInARowCli};
use commands::{handle_cfg_command, handle_play_command};

pub use error::CliError;

/// Main entry point for the CLI application, reading moves from stdin.
///
/// # Returns
///
/// Exit code: `0` whenever a game ends (win, draw, quit, closed input) or
/// `cfg` succeeds; `2` for usage, configuration and console I/O errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], reading moves from `stdin`.
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FourInARowCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: fourinarow [play|cfg]");
                    exit_code::ERROR
                }
            };
        }
    };

    let resolved = match config::load_with_sources() {
        Ok(resolved) => resolved,
        Err(e) => {
            write_or_exit!(err, "Error: {}", CliError::Config(e.to_string()));
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd.unwrap_or(Commands::Play) {
        Commands::Play => {
            handle_play_command(resolved.config.board_config(), stdin, out, err).map(|outcome| {
                tracing::debug!(?outcome, "play command finished");
            })
        }
        Commands::Cfg => handle_cfg_command(&resolved, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
