//! Per-target syscall layer.
//!
//! Everything the rest of the crate needs from the operating system goes
//! through three functions ([`write`], [`block_broken_pipe`], [`exit`]),
//! with one implementation per target family selected at compile time.
//! Callers never touch errno, signal sets, or `std::io` error types
//! directly; failures arrive pre-classified as a [`WriteError`].

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::{block_broken_pipe, exit, write};

#[cfg(not(unix))]
mod portable;
#[cfg(not(unix))]
pub use portable::{block_broken_pipe, exit, write};

/// File descriptor of standard output.
pub const STDOUT_FD: i32 = 1;

/// File descriptor of standard error.
pub const STDERR_FD: i32 = 2;

/// Why a [`write`] call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteError {
    /// A signal arrived before any byte was transferred (EINTR). Always
    /// retried by callers; never surfaced.
    Interrupted,
    /// The read end of the destination is gone (EPIPE). The expected way a
    /// downstream consumer stops this program.
    BrokenPipe,
    /// Any other OS error, carrying the raw errno value.
    Other(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fd_constants() {
        assert_eq!(STDOUT_FD, 1);
        assert_eq!(STDERR_FD, 2);
    }

    #[cfg(unix)]
    #[test]
    fn write_to_bad_fd_is_classified_other() {
        // -1 is never a valid descriptor; the error must come back as a
        // classified value, not a panic or a bogus byte count.
        match write(-1, b"x") {
            Err(WriteError::Other(errno)) => assert!(errno > 0),
            other => panic!("expected Other(errno), got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn block_broken_pipe_is_idempotent() {
        // Masking an already-masked signal must stay a no-op.
        block_broken_pipe();
        block_broken_pipe();
    }
}
