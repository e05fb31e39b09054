#![forbid(unsafe_code)]
//! chperm: change ownership and permission bits of files and directory trees in one pass.
//!
//! Safety model highlights:
//! - Owner/group and mode tokens are parsed and resolved once, before any file is touched.
//! - Symbolic modes are kept as data and re-evaluated against every visited entry's own bits.
//! - Ownership is applied before permissions so setuid/setgid bits cleared by `chown` are restored.
//! - Symlinks are handled explicitly: `-h` operates on the link, `-L` on (and through) the target.
//! - This crate forbids `unsafe` and uses `rustix` for syscalls and `nix` for identity lookups.

pub mod adapters;
pub mod api;
pub mod cli;
pub mod constants;
pub mod fs;
pub mod logging;
pub mod policy;
pub mod types;

pub use api::*;
