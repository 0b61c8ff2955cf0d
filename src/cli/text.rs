//! Captured GNU text blobs and diagnostic assembly.
//!
//! The help and version bodies are data, not code: captured from a
//! reference GNU coreutils installation (9.4, C locale) and replayed
//! verbatim, so nothing here interprets their contents. Diagnostics are
//! assembled the same way, fixed prefix and suffix fragments spliced
//! around the offending bytes, because argv is not guaranteed to be UTF-8
//! and the offending token must be echoed byte-for-byte.

/// Tool name baked into the captured texts. Diagnostics use it too: the
/// reference texts carry their own name, so the messages read the same no
/// matter what the installed binary is called.
pub const PROGRAM_NAME: &str = "yes";

/// `--help` body, written to stdout followed by exit 0.
pub const HELP_TEXT: &str = "Usage: yes [STRING]...
  or:  yes OPTION
Repeatedly output a line with all specified STRING(s), or 'y'.

      --help        display this help and exit
      --version     output version information and exit

GNU coreutils online help: <https://www.gnu.org/software/coreutils/>
Full documentation <https://www.gnu.org/software/coreutils/yes>
or available locally via: info '(coreutils) yes invocation'
";

/// `--version` body, written to stdout followed by exit 0.
pub const VERSION_TEXT: &str = "yes (GNU coreutils) 9.4
Copyright (C) 2023 Free Software Foundation, Inc.
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.

Written by David MacKenzie.
";

// ── Diagnostic fragments ──────────────────────────────────────────────────────
// Split around the offending bytes, mirroring how the reference texts are
// captured: everything up to the token, then everything after it.

const ERR_INVAL_PREFIX: &str = "yes: invalid option -- '";
const ERR_UNREC_PREFIX: &str = "yes: unrecognized option '";
const ERR_SUFFIX: &str = "'\nTry 'yes --help' for more information.\n";

/// Two-line diagnostic for an unknown short flag byte, e.g.
/// `yes: invalid option -- 'z'` + the Try line. Written to stderr; the
/// caller exits 1.
pub fn invalid_option(flag: u8) -> Vec<u8> {
    let mut msg = Vec::with_capacity(ERR_INVAL_PREFIX.len() + 1 + ERR_SUFFIX.len());
    msg.extend_from_slice(ERR_INVAL_PREFIX.as_bytes());
    msg.push(flag);
    msg.extend_from_slice(ERR_SUFFIX.as_bytes());
    msg
}

/// Two-line diagnostic for an unrecognized long option token, echoed whole,
/// e.g. `yes: unrecognized option '--bogus'` + the Try line.
pub fn unrecognized_option(token: &[u8]) -> Vec<u8> {
    let mut msg =
        Vec::with_capacity(ERR_UNREC_PREFIX.len() + token.len() + ERR_SUFFIX.len());
    msg.extend_from_slice(ERR_UNREC_PREFIX.as_bytes());
    msg.extend_from_slice(token);
    msg.extend_from_slice(ERR_SUFFIX.as_bytes());
    msg
}
