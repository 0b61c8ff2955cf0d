//! Write-buffer tiling.
//!
//! Replicates the output line into a fixed-capacity buffer so each write
//! syscall carries many lines. Runs exactly once, before the write loop;
//! the loop never re-enters it.

use crate::config::WRITE_BUF_CAPACITY;

/// Fill a write buffer with as many whole copies of `line` as fit.
///
/// Returns `None` when the line exceeds [`WRITE_BUF_CAPACITY`]; the caller
/// then cycles over the line itself (long-line fallback), each pass covering
/// the full line. When `Some`, the buffer length is exactly
/// `floor(WRITE_BUF_CAPACITY / line.len()) * line.len()`, a whole multiple
/// of the line length, so every refill boundary lands on a line boundary.
pub fn fill(line: &[u8]) -> Option<Vec<u8>> {
    debug_assert!(!line.is_empty());
    if line.len() > WRITE_BUF_CAPACITY {
        return None;
    }
    let copies = WRITE_BUF_CAPACITY / line.len();
    let mut buf = Vec::with_capacity(copies * line.len());
    for _ in 0..copies {
        buf.extend_from_slice(line);
    }
    Some(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_line_fills_the_buffer_exactly() {
        // 2 divides 16384, so "y\n" tiles with no slack.
        let buf = fill(b"y\n").expect("short line must tile");
        assert_eq!(buf.len(), WRITE_BUF_CAPACITY);
        assert!(buf.chunks(2).all(|c| c == b"y\n"));
    }

    #[test]
    fn used_length_is_a_whole_multiple_of_the_line() {
        let line = b"ab\n";
        let buf = fill(line).unwrap();
        assert_eq!(buf.len() % line.len(), 0);
        assert_eq!(buf.len(), (WRITE_BUF_CAPACITY / line.len()) * line.len());
        assert!(buf.chunks(line.len()).all(|c| c == line));
    }

    #[test]
    fn line_at_exact_capacity_tiles_once() {
        let line = vec![b'x'; WRITE_BUF_CAPACITY];
        let buf = fill(&line).unwrap();
        assert_eq!(buf, line);
    }

    #[test]
    fn oversized_line_falls_back() {
        let line = vec![b'x'; WRITE_BUF_CAPACITY + 1];
        assert_eq!(fill(&line), None);
    }

    #[test]
    fn no_partial_copy_at_the_tail() {
        // 16384 / 5000 = 3 copies; the 1384-byte remainder stays unused.
        let line = vec![b'q'; 5000];
        let buf = fill(&line).unwrap();
        assert_eq!(buf.len(), 15_000);
    }
}
