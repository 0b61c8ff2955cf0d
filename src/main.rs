//! Binary entry point for the `fyes` command-line tool.
//!
//! Mirrors the control flow of GNU coreutils `yes`: scan argv once for the
//! two standard options or a rejected one, short-circuit to the captured
//! help/version/diagnostic bytes, otherwise assemble the output line, tile
//! it, and enter the write loop, which only ever reaches the OS again
//! through `exit`.
//!
//! # Control flow
//!
//! 1. [`collect_argv`] captures argv[1..] as raw byte strings.
//! 2. [`scan`] classifies the sequence without output or side effects.
//! 3. Terminating results write their fixed text and exit (0 for
//!    help/version, 1 for bad options).
//! 4. `Proceed` builds the line, blocks SIGPIPE, tiles, and streams.

use fyes::cli::scan::{scan, Scan};
use fyes::cli::text;
use fyes::emit;
use fyes::line::build_line;
use fyes::platform::{self, STDERR_FD, STDOUT_FD};
use fyes::tile;

/// argv[1..] as raw byte strings. GNU yes must survive non-UTF-8 arguments,
/// so on Unix the OsString bytes are taken unmodified.
#[cfg(unix)]
fn collect_argv() -> Vec<Vec<u8>> {
    use std::os::unix::ffi::OsStringExt;
    std::env::args_os().skip(1).map(|a| a.into_vec()).collect()
}

#[cfg(not(unix))]
fn collect_argv() -> Vec<Vec<u8>> {
    std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned().into_bytes())
        .collect()
}

fn main() {
    let argv = collect_argv();

    match scan(&argv) {
        Scan::Help => {
            emit::write_all(STDOUT_FD, text::HELP_TEXT.as_bytes());
            platform::exit(0);
        }
        Scan::Version => {
            emit::write_all(STDOUT_FD, text::VERSION_TEXT.as_bytes());
            platform::exit(0);
        }
        Scan::InvalidShort(flag) => {
            emit::write_all(STDERR_FD, &text::invalid_option(flag));
            platform::exit(1);
        }
        Scan::InvalidLong(token) => {
            emit::write_all(STDERR_FD, &text::unrecognized_option(token));
            platform::exit(1);
        }
        Scan::Proceed { terminator } => {
            let line = build_line(&argv, terminator);

            // From here the only way out is a write-side condition; make
            // broken pipe arrive through write's return value, not as an
            // asynchronous signal.
            platform::block_broken_pipe();

            let tiled = tile::fill(&line);
            let payload: &[u8] = tiled.as_deref().unwrap_or(&line);
            emit::run(payload)
        }
    }
}
