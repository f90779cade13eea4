//! Exit code constants for the CLI application.
//!
//! Every way a game can end (win, draw, quit, closed input) is a graceful
//! termination and exits with [`SUCCESS`].

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Usage, configuration, or console I/O failure.
pub const ERROR: i32 = 2;
