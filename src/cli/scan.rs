//! Option scanning for the `fyes` binary.
//!
//! A single left-to-right pass over argv that neither prints nor consumes.
//! Equivalent to the one `getopt_long` call GNU yes makes through
//! `parse_gnu_standard_options_only`: with a permuting glibc the first
//! recognized or rejected option wins no matter how many operands precede
//! it, and the first literal `--` ends recognition for everything after it.

/// Outcome of scanning the argument sequence.
///
/// Produced once per run and consumed immediately by the dispatch in
/// `main`; never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan<'a> {
    /// No option matched; stream the operands. `terminator` is the index of
    /// the first `--`, which the line builder drops from the output.
    Proceed { terminator: Option<usize> },
    /// `--help` seen before any `--`.
    Help,
    /// `--version` seen before any `--`.
    Version,
    /// A dash-leading token with an unknown flag; carries the first flag
    /// byte. This tool accepts no short options, so every `-x` lands here.
    InvalidShort(u8),
    /// A `--`-leading token that is neither `--help` nor `--version`;
    /// carries the whole token.
    InvalidLong(&'a [u8]),
}

/// Classify `argv` (program name already removed).
///
/// Recognition order is argv order. A bare `-` and empty strings are
/// operands. Matching is exact: glibc's unambiguous-prefix expansion
/// (`--ve`) and its distinct `--help=x` rejection are not reproduced, so
/// both shapes fall through to [`Scan::InvalidLong`].
pub fn scan(argv: &[Vec<u8>]) -> Scan<'_> {
    for (i, arg) in argv.iter().enumerate() {
        match arg.as_slice() {
            b"--" => return Scan::Proceed { terminator: Some(i) },
            b"--help" => return Scan::Help,
            b"--version" => return Scan::Version,
            arg if arg.len() >= 2 && arg[0] == b'-' => {
                if arg[1] == b'-' {
                    return Scan::InvalidLong(arg);
                }
                return Scan::InvalidShort(arg[1]);
            }
            // Operand (including a bare `-`); options may still follow.
            _ => {}
        }
    }
    Scan::Proceed { terminator: None }
}
