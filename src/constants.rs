//! Shared crate-wide constants for chperm.
//!
//! Centralizes magic values and labels used across modules.

/// Program name used as the prefix of every diagnostic line.
pub const PROGRAM_NAME: &str = "chperm";

/// Version banner printed by `--version`.
pub const VERSION_BANNER: &str = "chperm 1.0 (with chmod functionality)";

/// Mask of the 12 permission bits (rwx for all classes plus setuid/setgid/sticky).
pub const PERM_BITS: u32 = 0o7777;

/// Mask of the nine rwx bits.
pub const RWX_BITS: u32 = 0o777;

/// Upper bound accepted for a numeric mode token.
pub const MAX_NUMERIC_MODE: u32 = PERM_BITS;

/// Raw id the kernel interprets as "leave unchanged"; never accepted as a real id.
pub const UNCHANGED_ID: u32 = u32::MAX;

/// Environment variable selecting the stderr log level of the binary.
pub const LOG_ENV: &str = "CHPERM_LOG";

/// Subsystem label attached to every structured fact.
pub const FACTS_SUBSYSTEM: &str = "chperm";
