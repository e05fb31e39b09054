//! Identity resolution: owner/group tokens to numeric ids.
use crate::adapters::IdentityDb;
use crate::constants::UNCHANGED_ID;
use crate::types::{Error, IdField, Identifier, OwnershipSpec, ResolvedOwnership, Result};

/// Resolve a user token: name lookup first, then a plain decimal uid.
///
/// # Errors
///
/// Returns `Error::InvalidIdentifier` when the token is neither a known user nor a valid uid.
pub fn resolve_user(db: &dyn IdentityDb, token: &Identifier) -> Result<u32> {
    resolve(token, IdField::User, |name| db.lookup_user(name))
}

/// Resolve a group token: name lookup first, then a plain decimal gid.
///
/// # Errors
///
/// Returns `Error::InvalidIdentifier` when the token is neither a known group nor a valid gid.
pub fn resolve_group(db: &dyn IdentityDb, token: &Identifier) -> Result<u32> {
    resolve(token, IdField::Group, |name| db.lookup_group(name))
}

/// Resolve both halves of an ownership spec; absent halves stay `None`.
///
/// # Errors
///
/// Propagates the first `Error::InvalidIdentifier` (user before group).
pub fn resolve_ownership(db: &dyn IdentityDb, spec: &OwnershipSpec) -> Result<ResolvedOwnership> {
    let uid = spec.user.as_ref().map(|u| resolve_user(db, u)).transpose()?;
    let gid = spec.group.as_ref().map(|g| resolve_group(db, g)).transpose()?;
    Ok(ResolvedOwnership { uid, gid })
}

fn resolve(token: &Identifier, field: IdField, lookup: impl Fn(&str) -> Option<u32>) -> Result<u32> {
    let invalid = || Error::InvalidIdentifier {
        field,
        token: token.to_string(),
    };
    match token {
        Identifier::Id(id) if *id != UNCHANGED_ID => Ok(*id),
        Identifier::Id(_) => Err(invalid()),
        Identifier::Name(name) => lookup(name)
            .or_else(|| parse_numeric_id(name))
            .ok_or_else(invalid),
    }
}

fn parse_numeric_id(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().filter(|id| *id != UNCHANGED_ID)
}
