//! Command-line surface: option scanning and the captured GNU text blobs.
//!
//! GNU `yes` takes no short options and exactly two long ones, yet it
//! inherits glibc's full parsing rules: options are recognized anywhere
//! among the operands (permutation) and only a literal `--` ends that
//! recognition. [`scan`] reproduces the decision procedure; [`text`] holds
//! the byte-exact output it selects.
//!
//! [`scan`]: scan::scan
//! [`text`]: self::text

pub mod scan;
pub mod text;
