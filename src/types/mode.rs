//! Mode tokens: numeric (octal) or symbolic (`u+x,g-w,o=r`).
//!
//! Parsing produces data only. Symbolic operations are relative, so they are folded over each
//! entry's current bits by [`ModeSpec::apply_to`] at mutation time.
use serde::Serialize;

use super::errors::{Error, Result};
use crate::constants::{MAX_NUMERIC_MODE, PERM_BITS, RWX_BITS};

/// Permission subject classes selected by a clause, as a mask over the rwx bits they own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Who(u32);

impl Who {
    pub const USER: Who = Who(0o700);
    pub const GROUP: Who = Who(0o070);
    pub const OTHER: Who = Who(0o007);
    pub const ALL: Who = Who(RWX_BITS);

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn union(self, other: Who) -> Who {
        Who(self.0 | other.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    const fn none() -> Who {
        Who(0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Operator {
    Add,
    Remove,
    Set,
}

/// Requested permissions of a clause, stored class-independently as bits of `0o7`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Perms(u32);

impl Perms {
    pub const READ: u32 = 0o4;
    pub const WRITE: u32 = 0o2;
    pub const EXECUTE: u32 = 0o1;

    #[must_use]
    pub const fn new(bits: u32) -> Self {
        Self(bits & 0o7)
    }

    /// Spread the rwx triple over every class selected by `who`.
    #[must_use]
    pub const fn mask_for(self, who: Who) -> u32 {
        (self.0 * 0o111) & who.bits()
    }
}

/// A single `[who]*op[perm]*` clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SymbolicOp {
    pub who: Who,
    pub op: Operator,
    pub perms: Perms,
}

impl SymbolicOp {
    /// Apply this clause to `mode`. Bits outside the rwx range are never touched.
    #[must_use]
    pub fn apply(&self, mode: u32) -> u32 {
        let mask = self.perms.mask_for(self.who);
        match self.op {
            Operator::Add => mode | mask,
            Operator::Remove => mode & !mask,
            Operator::Set => (mode & !self.who.bits()) | mask,
        }
    }
}

/// What to do with the permission bits of each visited entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ModeSpec {
    #[default]
    Unchanged,
    /// Replace all 12 permission bits; file-type bits are kept.
    Numeric(u32),
    /// Ordered clauses folded left-to-right over the entry's current mode.
    Symbolic(Vec<SymbolicOp>),
}

impl ModeSpec {
    /// Parse a mode token.
    ///
    /// A token made only of decimal digits is numeric and read as octal in `0..=0o7777`.
    /// Anything else is parsed as a comma-separated list of symbolic clauses.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidMode` naming the full token when it is malformed or out of range.
    pub fn parse(token: &str) -> Result<Self> {
        if is_numeric(token) {
            return parse_numeric(token).map(ModeSpec::Numeric);
        }
        parse_symbolic(token).map(ModeSpec::Symbolic)
    }

    /// Whether a permission mutation was requested at all.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        !matches!(self, ModeSpec::Unchanged)
    }

    /// Compute the new full mode for an entry currently at `current`.
    /// File-type bits (above `0o7777`) are always preserved.
    #[must_use]
    pub fn apply_to(&self, current: u32) -> u32 {
        match self {
            ModeSpec::Unchanged => current,
            ModeSpec::Numeric(bits) => (current & !PERM_BITS) | (bits & PERM_BITS),
            ModeSpec::Symbolic(ops) => ops.iter().fold(current, |mode, op| op.apply(mode)),
        }
    }
}

/// Whether `token` should be taken as MODE rather than a file name on the command line.
///
/// Only the shape is checked here; a token that looks like a mode but is malformed is reported
/// by [`ModeSpec::parse`].
#[must_use]
pub fn looks_like_mode(token: &str) -> bool {
    is_numeric(token) || token.contains(&['+', '-', '='][..])
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

fn parse_numeric(token: &str) -> Result<u32> {
    match u32::from_str_radix(token, 8) {
        Ok(bits) if bits <= MAX_NUMERIC_MODE => Ok(bits),
        _ => Err(Error::InvalidMode(token.to_string())),
    }
}

fn parse_symbolic(token: &str) -> Result<Vec<SymbolicOp>> {
    let invalid = || Error::InvalidMode(token.to_string());
    let mut ops = Vec::new();
    for clause in token.split(',') {
        let mut chars = clause.chars().peekable();

        let mut who = Who::none();
        while let Some(&c) = chars.peek() {
            let class = match c {
                'u' => Who::USER,
                'g' => Who::GROUP,
                'o' => Who::OTHER,
                'a' => Who::ALL,
                _ => break,
            };
            chars.next();
            who = who.union(class);
            if c == 'a' {
                break;
            }
        }
        if who.is_empty() {
            who = Who::ALL;
        }

        let op = match chars.next() {
            Some('+') => Operator::Add,
            Some('-') => Operator::Remove,
            Some('=') => Operator::Set,
            _ => return Err(invalid()),
        };

        let mut perms = 0;
        for c in chars {
            perms |= match c {
                'r' => Perms::READ,
                'w' => Perms::WRITE,
                'x' => Perms::EXECUTE,
                _ => return Err(invalid()),
            };
        }

        ops.push(SymbolicOp {
            who,
            op,
            perms: Perms::new(perms),
        });
    }
    if ops.is_empty() {
        return Err(invalid());
    }
    Ok(ops)
}

/// Render the nine rwx bits of `mode` as `rwxr-xr-x`.
#[must_use]
pub fn rwx_string(mode: u32) -> String {
    const FLAGS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];
    FLAGS
        .iter()
        .map(|&(bit, c)| if mode & bit != 0 { c } else { '-' })
        .collect()
}
