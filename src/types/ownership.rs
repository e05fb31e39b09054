//! Owner/group token parsing and the resolved ownership value.
//! Centralized under `crate::types` for cross-layer reuse.
use std::fmt;

use super::errors::{Error, IdField, Result};

/// One half of an owner/group token before resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Identifier {
    /// Raw numeric id.
    Id(u32),
    /// Name still to be looked up (may turn out to be numeric when no such name exists).
    Name(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Id(id) => write!(f, "{id}"),
            Identifier::Name(name) => f.write_str(name),
        }
    }
}

/// Parsed `[OWNER][:[GROUP]]` token; `None` means "leave unchanged".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OwnershipSpec {
    pub user: Option<Identifier>,
    pub group: Option<Identifier>,
}

impl OwnershipSpec {
    /// Split an owner/group token on its first colon.
    ///
    /// `OWNER`, `OWNER:`, `OWNER:GROUP` and `:GROUP` are accepted. A token naming neither half
    /// (empty, or a bare `:`) is rejected.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIdentifier` when neither an owner nor a group is named.
    pub fn parse(token: &str) -> Result<Self> {
        let (user, group) = match token.split_once(':') {
            Some((u, g)) => (u, g),
            None => (token, ""),
        };
        let spec = Self {
            user: non_empty(user),
            group: non_empty(group),
        };
        if spec.user.is_none() && spec.group.is_none() {
            return Err(Error::InvalidIdentifier {
                field: IdField::OwnerGroup,
                token: token.to_string(),
            });
        }
        Ok(spec)
    }
}

fn non_empty(s: &str) -> Option<Identifier> {
    if s.is_empty() {
        None
    } else {
        Some(Identifier::Name(s.to_string()))
    }
}

/// Ownership after identity resolution. Always numeric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolvedOwnership {
    pub uid: Option<u32>,
    pub gid: Option<u32>,
}

impl ResolvedOwnership {
    /// Target uid given the entry's current uid.
    #[must_use]
    pub fn uid_or(&self, current: u32) -> u32 {
        self.uid.unwrap_or(current)
    }

    /// Target gid given the entry's current gid.
    #[must_use]
    pub fn gid_or(&self, current: u32) -> u32 {
        self.gid.unwrap_or(current)
    }
}
