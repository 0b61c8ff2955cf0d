// fyes — Rust implementation of a GNU-compatible `yes`

pub mod cli;
pub mod config;
pub mod emit;
pub mod line;
pub mod platform;
pub mod tile;

// ── Version constants ─────────────────────────────────────────────────────────
pub const FYES_VERSION_MAJOR: u32 = 0;
pub const FYES_VERSION_MINOR: u32 = 4;
pub const FYES_VERSION_RELEASE: u32 = 0;
pub const FYES_VERSION_NUMBER: u32 =
    FYES_VERSION_MAJOR * 100 * 100 + FYES_VERSION_MINOR * 100 + FYES_VERSION_RELEASE;
pub const FYES_VERSION_STRING: &str = "0.4.0";

/// Version of GNU coreutils the embedded help/version/diagnostic texts were
/// captured from. The texts are replayed verbatim; nothing else in the crate
/// depends on this value.
pub const REFERENCE_COREUTILS_VERSION: &str = "9.4";

/// Returns the runtime version number.
pub fn version_number() -> u32 {
    FYES_VERSION_NUMBER
}

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    FYES_VERSION_STRING
}
