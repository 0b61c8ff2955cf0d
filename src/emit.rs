//! The steady-state write loop and the full-write helper for terminating
//! paths.
//!
//! Once [`run`] is entered there is no language-level error path left: every
//! syscall outcome maps to "advance", "retry", or "exit 0". Backpressure is
//! the kernel's; a full pipe simply blocks the write.

use crate::platform::{self, WriteError, STDOUT_FD};

/// Stream `payload` to stdout forever.
///
/// A two-field state machine, offset and (implied) remaining: a short write
/// advances the offset; reaching the end resets it to zero, which is the
/// infinite steady state. EINTR retries at the same offset with no data
/// loss. Every other failure (EPIPE from a departed consumer foremost) and
/// a zero byte count are clean stops with status 0. There is no success
/// exit.
pub fn run(payload: &[u8]) -> ! {
    let mut offset = 0usize;
    loop {
        match platform::write(STDOUT_FD, &payload[offset..]) {
            Ok(0) => platform::exit(0),
            Ok(n) => {
                offset += n;
                if offset == payload.len() {
                    offset = 0;
                }
            }
            Err(WriteError::Interrupted) => {}
            Err(_) => platform::exit(0),
        }
    }
}

/// Write all of `bytes` to `fd`, retrying EINTR.
///
/// Any other failure abandons the remainder: the callers are the
/// help/version/diagnostic paths, which exit immediately afterwards with
/// their fixed status either way.
pub fn write_all(fd: i32, bytes: &[u8]) {
    let mut offset = 0usize;
    while offset < bytes.len() {
        match platform::write(fd, &bytes[offset..]) {
            Ok(0) => return,
            Ok(n) => offset += n,
            Err(WriteError::Interrupted) => {}
            Err(_) => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // `run` never returns, so its loop arithmetic is covered end-to-end by
    // the e2e stream suite; `write_all` is exercised here through a pipe.

    #[cfg(unix)]
    fn pipe_fds() -> (i32, i32) {
        let mut fds = [0i32; 2];
        let rc = unsafe { libc::pipe(fds.as_mut_ptr()) };
        assert_eq!(rc, 0, "pipe(2) failed");
        (fds[0], fds[1])
    }

    #[cfg(unix)]
    #[test]
    fn write_all_delivers_every_byte() {
        let (rd, wr) = pipe_fds();
        let msg = b"yes: unrecognized option '--probe'\n";
        write_all(wr, msg);

        let mut got = vec![0u8; msg.len()];
        let mut off = 0;
        while off < got.len() {
            let n = unsafe {
                libc::read(rd, got[off..].as_mut_ptr().cast(), got.len() - off)
            };
            assert!(n > 0, "read(2) failed");
            off += n as usize;
        }
        assert_eq!(&got, msg);

        unsafe {
            libc::close(rd);
            libc::close(wr);
        }
    }

    #[cfg(unix)]
    #[test]
    fn write_all_gives_up_on_a_dead_fd() {
        // Closed-stderr scenario: the helper must return, not loop or panic.
        let (rd, wr) = pipe_fds();
        unsafe {
            libc::close(rd);
            libc::close(wr);
        }
        write_all(wr, b"nobody listening\n");
    }
}
