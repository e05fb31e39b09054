/// How symbolic links met on the command line or during a walk are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SymlinkPolicy {
    /// Neither `-h` nor `-L`: the mutator follows links, the walker does not descend through them.
    #[default]
    Default,
    /// `-h`: operate on the link itself; links are leaves.
    NoDereference,
    /// `-L`: operate on the target and descend into linked directories.
    Dereference,
}

impl SymlinkPolicy {
    /// Build the policy from the two mutually exclusive flags.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConflictingOptions` when both flags are set.
    pub fn from_flags(no_dereference: bool, dereference: bool) -> crate::types::Result<Self> {
        match (no_dereference, dereference) {
            (true, true) => Err(crate::types::Error::ConflictingOptions),
            (true, false) => Ok(Self::NoDereference),
            (false, true) => Ok(Self::Dereference),
            (false, false) => Ok(Self::Default),
        }
    }

    /// Whether metadata and ownership calls should follow a link at the visited path.
    #[must_use]
    pub fn follows_links(self) -> bool {
        !matches!(self, Self::NoDereference)
    }

    /// Whether the walker may descend into a directory reached through a link.
    #[must_use]
    pub fn descends_links(self) -> bool {
        matches!(self, Self::Dereference)
    }
}
