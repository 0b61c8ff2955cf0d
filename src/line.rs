//! Output-line assembly.
//!
//! Joins the operands into the single line the write loop repeats. Runs
//! once per process; the result is read-only afterwards.

use crate::config::LINE_BUF_CAPACITY;

/// The line streamed when no operands remain: GNU yes's default answer.
pub const DEFAULT_LINE: &[u8] = b"y\n";

/// Join the operands of `argv` into the line to repeat.
///
/// `terminator` is the index of the first `--` reported by the scan; that
/// token alone is dropped. Every other argument is included (later `--`
/// tokens, dash-leading tokens, empty strings), joined with single spaces
/// and closed with exactly one `\n`.
///
/// Argument and separator bytes saturate at `LINE_BUF_CAPACITY - 1`:
/// appending stops silently at the bound, but the newline is always written,
/// so the line is well-formed even when truncated. Zero included operands
/// yield [`DEFAULT_LINE`].
pub fn build_line(argv: &[Vec<u8>], terminator: Option<usize>) -> Vec<u8> {
    let joined: usize = argv.iter().map(|a| a.len() + 1).sum();
    let mut line: Vec<u8> = Vec::with_capacity(joined.max(2).min(LINE_BUF_CAPACITY));

    let mut any_included = false;
    for (i, arg) in argv.iter().enumerate() {
        if terminator == Some(i) {
            continue;
        }
        if any_included {
            push_saturating(&mut line, b" ");
        }
        push_saturating(&mut line, arg);
        any_included = true;
    }

    if !any_included {
        return DEFAULT_LINE.to_vec();
    }
    line.push(b'\n');
    line
}

/// Append as much of `bytes` as still fits under `LINE_BUF_CAPACITY - 1`.
fn push_saturating(line: &mut Vec<u8>, bytes: &[u8]) {
    let room = (LINE_BUF_CAPACITY - 1).saturating_sub(line.len());
    let take = bytes.len().min(room);
    line.extend_from_slice(&bytes[..take]);
}
