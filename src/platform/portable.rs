// platform/portable.rs — std-backed instance for targets without POSIX
// write(2). Only the process-standard streams are addressable.

use std::io::{self, Write};

use super::{WriteError, STDOUT_FD};

pub fn write(fd: i32, buf: &[u8]) -> Result<usize, WriteError> {
    let written = if fd == STDOUT_FD {
        io::stdout().lock().write(buf)
    } else {
        io::stderr().lock().write(buf)
    };
    written.map_err(|e| match e.kind() {
        io::ErrorKind::Interrupted => WriteError::Interrupted,
        io::ErrorKind::BrokenPipe => WriteError::BrokenPipe,
        _ => WriteError::Other(e.raw_os_error().unwrap_or(-1)),
    })
}

/// SIGPIPE does not exist off Unix; write failures already arrive in-band.
pub fn block_broken_pipe() {}

pub fn exit(code: i32) -> ! {
    std::process::exit(code)
}
