// e2e/cli_parity.rs — terminating-path parity tests.
//
// Runs the `fyes` binary as a black box and pins the byte-exact stdout,
// stderr, and exit code of every path that terminates on its own:
// --help, --version, and the two diagnostic shapes. The expected bytes come
// from the library's captured text module, so a drift between binary and
// blobs fails here.

use std::path::PathBuf;
use std::process::Command;

use fyes::cli::text;

/// Locate the `fyes` binary produced by Cargo.
fn fyes_bin() -> PathBuf {
    // CARGO_BIN_EXE_fyes is set by Cargo when running integration tests.
    // Fall back to walking up from the test binary location.
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_fyes") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("fyes");
    p
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(fyes_bin())
        .args(args)
        .output()
        .expect("failed to run fyes")
}

// ── 1. --help ─────────────────────────────────────────────────────────────────

#[test]
fn help_prints_captured_text_and_exits_zero() {
    let out = run(&["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, text::HELP_TEXT.as_bytes());
    assert!(out.stderr.is_empty(), "help must not touch stderr");
}

#[test]
fn help_wins_regardless_of_position() {
    for args in [&["--help", "extra"][..], &["extra", "--help"], &["a", "b", "--help", "c"]] {
        let out = run(args);
        assert_eq!(out.status.code(), Some(0), "args: {args:?}");
        assert_eq!(out.stdout, text::HELP_TEXT.as_bytes(), "args: {args:?}");
    }
}

// ── 2. --version ──────────────────────────────────────────────────────────────

#[test]
fn version_prints_captured_text_and_exits_zero() {
    let out = run(&["--version"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, text::VERSION_TEXT.as_bytes());
    assert!(out.stderr.is_empty());
}

#[test]
fn first_recognized_option_decides() {
    let out = run(&["--version", "--help"]);
    assert_eq!(out.stdout, text::VERSION_TEXT.as_bytes());
    let out = run(&["--help", "--version"]);
    assert_eq!(out.stdout, text::HELP_TEXT.as_bytes());
}

// ── 3. Invalid short options ──────────────────────────────────────────────────

#[test]
fn unknown_short_flag_diagnostic_is_exact() {
    let out = run(&["-z"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty(), "diagnostics must not touch stdout");
    assert_eq!(
        out.stderr,
        b"yes: invalid option -- 'z'\nTry 'yes --help' for more information.\n"
    );
}

#[test]
fn aggregated_short_flags_report_the_first_byte() {
    let out = run(&["-abc"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(out.stderr, text::invalid_option(b'a'));
}

#[test]
fn question_mark_flag_is_reported_verbatim() {
    let out = run(&["-?"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(out.stderr, text::invalid_option(b'?'));
}

#[test]
fn bad_option_beats_later_help() {
    // argv order decides, matching a single getopt_long scan.
    let out = run(&["-z", "--help"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert_eq!(out.stderr, text::invalid_option(b'z'));
}

// ── 4. Unrecognized long options ──────────────────────────────────────────────

#[test]
fn unknown_long_option_diagnostic_is_exact() {
    let out = run(&["--bogus"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert_eq!(
        out.stderr,
        b"yes: unrecognized option '--bogus'\nTry 'yes --help' for more information.\n"
    );
}

#[test]
fn near_miss_long_options_are_rejected_whole() {
    for tok in ["--helpx", "--versions", "--help=x"] {
        let out = run(&[tok]);
        assert_eq!(out.status.code(), Some(1), "token: {tok}");
        assert_eq!(
            out.stderr,
            text::unrecognized_option(tok.as_bytes()),
            "token: {tok}"
        );
    }
}
