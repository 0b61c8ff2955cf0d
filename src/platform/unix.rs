// platform/unix.rs — libc-backed instance (Linux, macOS, the BSDs).

use nix::errno::Errno;
use nix::sys::signal::{sigprocmask, SigSet, SigmaskHow, Signal};

use super::WriteError;

/// Issue one `write(2)` on `fd`.
///
/// A short count is not an error; the caller advances and calls again.
pub fn write(fd: i32, buf: &[u8]) -> Result<usize, WriteError> {
    let n = unsafe { libc::write(fd, buf.as_ptr().cast(), buf.len()) };
    if n >= 0 {
        return Ok(n as usize);
    }
    Err(match Errno::last() {
        Errno::EINTR => WriteError::Interrupted,
        Errno::EPIPE => WriteError::BrokenPipe,
        e => WriteError::Other(e as i32),
    })
}

/// Block SIGPIPE delivery so a departed consumer surfaces as `EPIPE` from
/// `write` instead of terminating the process asynchronously mid-buffer.
pub fn block_broken_pipe() {
    let mut mask = SigSet::empty();
    mask.add(Signal::SIGPIPE);
    let _ = sigprocmask(SigmaskHow::SIG_BLOCK, Some(&mask), None);
}

/// Terminate the process with `code`.
pub fn exit(code: i32) -> ! {
    std::process::exit(code)
}
