//! Exit code conventions
//!
//! - Every game ending (win, draw, quit, closed stdin) returns 0
//! - Usage errors return 2 and write to stderr only
//! - `--help` and `--version` return 0 and write to stdout

use fourinarow_cli::exit_code::{ERROR, SUCCESS};
use fourinarow_cli::run_with_input;
use std::io::Cursor;

fn run(args: &[&str], input: &str) -> (i32, String, String) {
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run_with_input(args.iter().copied(), &mut stdin, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn win_returns_zero() {
    let (code, _, _) = run(&["fourinarow"], "2\n3\n2\n3\n2\n3\n2\n");
    assert_eq!(code, SUCCESS);
}

#[test]
fn quit_returns_zero() {
    let (code, _, err) = run(&["fourinarow", "play"], "quit\n");
    assert_eq!(code, SUCCESS);
    assert!(err.is_empty());
}

#[test]
fn eof_returns_zero() {
    let (code, _, _) = run(&["fourinarow", "play"], "");
    assert_eq!(code, SUCCESS);
}

#[test]
fn unknown_flag_returns_two() {
    let (code, out, err) = run(&["fourinarow", "--board-size", "9"], "");
    assert_eq!(code, ERROR);
    assert!(out.is_empty(), "errors must not go to stdout");
    assert!(!err.is_empty());
}

#[test]
fn version_returns_zero() {
    let (code, out, _) = run(&["fourinarow", "--version"], "");
    assert_eq!(code, SUCCESS);
    assert!(out.contains("fourinarow"));
}

#[test]
fn cfg_returns_zero_with_json() {
    let (code, out, _) = run(&["fourinarow", "cfg"], "");
    assert_eq!(code, SUCCESS);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["board"]["width"], 7);
    assert_eq!(json["board"]["symbols"]["empty"], ".");
    assert_eq!(json["sources"]["player_x"], "default");
}
