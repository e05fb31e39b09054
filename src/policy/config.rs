use super::types::SymlinkPolicy;
use crate::types::Result;

/// Options governs traversal, symlink handling and reporting for a chperm run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub recursive: bool,
    pub verbose: bool,
    pub changes_only: bool,
    /// Suppress per-path error diagnostics. Never changes the exit status.
    pub quiet: bool,
    pub symlinks: SymlinkPolicy,
    /// Set only when a MODE token was supplied.
    pub apply_permissions: bool,
}

/// Raw command-line switches, before validation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Flags {
    pub recursive: bool,
    pub verbose: bool,
    pub changes_only: bool,
    pub quiet: bool,
    pub no_dereference: bool,
    pub dereference: bool,
}

impl Options {
    /// Validate raw flags into options.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConflictingOptions` when both `-h` and `-L` are given.
    pub fn from_flags(flags: Flags) -> Result<Self> {
        Ok(Self {
            recursive: flags.recursive,
            verbose: flags.verbose,
            changes_only: flags.changes_only,
            quiet: flags.quiet,
            symlinks: SymlinkPolicy::from_flags(flags.no_dereference, flags.dereference)?,
            apply_permissions: false,
        })
    }

    #[must_use]
    pub fn with_apply_permissions(mut self, apply: bool) -> Self {
        self.apply_permissions = apply;
        self
    }
}
