// e2e/stream.rs — streaming-path tests.
//
// Runs the `fyes` binary with a piped stdout, reads a bounded prefix of the
// infinite stream, and checks the repetition byte-for-byte: default line,
// joined operands, terminator handling, tile alignment, the long-line
// fallback, and the broken-pipe exit path.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

/// Locate the `fyes` binary produced by Cargo.
fn fyes_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_fyes") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("fyes");
    p
}

fn spawn_stream(args: &[&str]) -> Child {
    Command::new(fyes_bin())
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn fyes")
}

/// Read exactly `n` bytes of the stream, then kill the producer.
fn stream_prefix(args: &[&str], n: usize) -> Vec<u8> {
    let mut child = spawn_stream(args);
    let mut buf = vec![0u8; n];
    child
        .stdout
        .as_mut()
        .unwrap()
        .read_exact(&mut buf)
        .expect("stream ended early");
    let _ = child.kill();
    let _ = child.wait();
    buf
}

/// Wait for exit, bounded; the streaming paths must never hang.
fn wait_with_deadline(child: &mut Child, deadline: Duration) -> Option<i32> {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if let Some(status) = child.try_wait().expect("try_wait failed") {
            return status.code();
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    let _ = child.kill();
    let _ = child.wait();
    None
}

// ── 1. Default stream ─────────────────────────────────────────────────────────

#[test]
fn no_args_streams_y_lines() {
    let data = stream_prefix(&[], 4096);
    assert!(data.chunks(2).all(|c| c == b"y\n"));
}

// ── 2. Joined operands ────────────────────────────────────────────────────────

#[test]
fn operands_stream_space_joined() {
    let data = stream_prefix(&["a", "b"], 4096 - 4096 % 4);
    assert!(data.chunks(4).all(|c| c == b"a b\n"));
}

#[test]
fn dash_operand_streams_literally() {
    let data = stream_prefix(&["-"], 512);
    assert!(data.chunks(2).all(|c| c == b"-\n"));
}

// ── 3. Terminator handling ────────────────────────────────────────────────────

#[test]
fn lone_terminator_streams_the_default() {
    let data = stream_prefix(&["--"], 512);
    assert!(data.chunks(2).all(|c| c == b"y\n"));
}

#[test]
fn help_after_terminator_streams_literally() {
    let line = b"--help\n";
    let n = 700 - 700 % line.len();
    let data = stream_prefix(&["--", "--help"], n);
    assert!(data.chunks(line.len()).all(|c| c == line));
}

#[test]
fn later_terminators_appear_in_the_stream() {
    let line = b"a b -- c\n";
    let n = 900 - 900 % line.len();
    let data = stream_prefix(&["a", "--", "b", "--", "c"], n);
    assert!(data.chunks(line.len()).all(|c| c == line));
}

// ── 4. Output integrity ───────────────────────────────────────────────────────

#[test]
fn no_partial_lines_at_any_read_boundary() {
    // 300 000 is a multiple of the 12-byte line, so every chunk must match
    // exactly; a torn line anywhere would shift the remainder.
    let line = b"hello world\n";
    let data = stream_prefix(&["hello", "world"], 300_000);
    assert_eq!(data.len() % line.len(), 0);
    assert!(data.chunks(line.len()).all(|c| c == line));
}

#[test]
fn stream_is_deterministic_across_runs() {
    let a = stream_prefix(&["det", "check"], 50_000);
    let b = stream_prefix(&["det", "check"], 50_000);
    assert_eq!(a, b);
}

#[test]
fn streaming_writes_nothing_to_stderr() {
    let mut child = spawn_stream(&["quiet"]);
    let mut prefix = [0u8; 1024];
    child.stdout.as_mut().unwrap().read_exact(&mut prefix).unwrap();
    let _ = child.kill();
    let out = child.wait_with_output().unwrap();
    assert!(out.stderr.is_empty());
}

// ── 5. Long-line fallback ─────────────────────────────────────────────────────

#[test]
fn long_line_repeats_without_truncation() {
    // One operand larger than the 16 KiB write buffer forces the fallback;
    // three full repetitions must come through byte-identical.
    let big = "x".repeat(20_000);
    let mut line = big.clone().into_bytes();
    line.push(b'\n');
    let data = stream_prefix(&[&big], line.len() * 3);
    assert!(data.chunks(line.len()).all(|c| c == line.as_slice()));
}

// ── 6. Broken pipe ────────────────────────────────────────────────────────────

#[test]
fn closing_the_consumer_stops_the_stream_with_status_zero() {
    let mut child = spawn_stream(&[]);
    let mut prefix = [0u8; 2];
    child.stdout.as_mut().unwrap().read_exact(&mut prefix).unwrap();
    assert_eq!(&prefix, b"y\n");

    // Close the read end; the next write fails with EPIPE and the process
    // must exit 0 promptly rather than die of SIGPIPE or hang.
    drop(child.stdout.take());
    let code = wait_with_deadline(&mut child, Duration::from_secs(5));
    assert_eq!(code, Some(0), "expected clean exit after consumer left");
}

#[test]
fn broken_pipe_exit_is_prompt_and_repeatable() {
    for _ in 0..5 {
        let mut child = spawn_stream(&["hello"]);
        let mut prefix = [0u8; 6];
        child.stdout.as_mut().unwrap().read_exact(&mut prefix).unwrap();
        drop(child.stdout.take());
        let code = wait_with_deadline(&mut child, Duration::from_secs(5));
        assert_eq!(code, Some(0));
    }
}
