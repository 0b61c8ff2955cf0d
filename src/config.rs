// config.rs — Compile-time configuration constants.
//
// Both buffers are sized once here and never grow at runtime, so resource
// usage stays bounded for arbitrarily long runs. GNU yes likewise fixes its
// working-buffer size at build time (BUFSIZ-derived); the capacities here are
// generous enough that truncation is unobservable for any realistic argv.

/// Capacity of the output-line working buffer, in bytes.
///
/// The joined arguments plus the terminating newline must fit here; argument
/// bytes saturate at `LINE_BUF_CAPACITY - 1` so the newline always has room.
/// Linux caps a single execve argument at 128 KiB, so this bound is a safety
/// limit rather than something users encounter.
pub const LINE_BUF_CAPACITY: usize = 2 * 1024 * 1024;

/// Capacity of the steady-state write buffer, in bytes.
///
/// Filled with whole copies of the output line to amortize write-syscall
/// overhead; a line longer than this is streamed directly instead.
pub const WRITE_BUF_CAPACITY: usize = 16 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_buffer_dominates_write_buffer() {
        // The long-line fallback only exists because a line can outgrow the
        // write buffer while still fitting the line buffer.
        assert!(LINE_BUF_CAPACITY > WRITE_BUF_CAPACITY);
    }

    #[test]
    fn write_buffer_holds_the_default_line() {
        // "y\n" must tile, never fall back.
        assert!(WRITE_BUF_CAPACITY >= 2);
        assert_eq!(WRITE_BUF_CAPACITY % 2, 0);
    }
}
