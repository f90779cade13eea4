//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "fourinarow",
    version,
    about = "Four-in-a-Row: a two-player Connect Four clone for the console"
)]
pub struct FourInARowCli {
    /// Defaults to `play` when omitted.
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Play one game on a 7x6 board, two players taking turns at the keyboard
    Play,
    /// Show the resolved configuration and where each value came from
    Cfg,
}
