//! Configuration command handler.
//!
//! Prints the resolved board configuration, symbols included, plus the layer
//! each symbol came from.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "board": {
//!     "width": 7,
//!     "height": 6,
//!     "connect": 4,
//!     "symbols": {
//!       "player_x": "X",
//!       "player_o": "O",
//!       "empty": "."
//!     }
//!   },
//!   "sources": {
//!     "player_x": "default",
//!     "player_o": "env",
//!     "empty": "file"
//!   }
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let display = serde_json::json!({
        "board": resolved.config.board_config(),
        "sources": resolved.sources,
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
