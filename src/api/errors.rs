use crate::types::Error;

// Stable identifiers emitted in structured facts.
// We intentionally keep SCREAMING_SNAKE_CASE to match emitted IDs.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorId {
    E_IDENTIFIER,
    E_MODE,
    E_OPTIONS,
    E_OPERAND,
    E_PATH,
    E_MUTATE,
    E_DIRECTORY,
}

#[must_use]
pub const fn id_str(id: ErrorId) -> &'static str {
    match id {
        ErrorId::E_IDENTIFIER => "E_IDENTIFIER",
        ErrorId::E_MODE => "E_MODE",
        ErrorId::E_OPTIONS => "E_OPTIONS",
        ErrorId::E_OPERAND => "E_OPERAND",
        ErrorId::E_PATH => "E_PATH",
        ErrorId::E_MUTATE => "E_MUTATE",
        ErrorId::E_DIRECTORY => "E_DIRECTORY",
    }
}

/// Classify an error into its stable id.
#[must_use]
pub fn error_id(e: &Error) -> ErrorId {
    match e {
        Error::InvalidIdentifier { .. } => ErrorId::E_IDENTIFIER,
        Error::InvalidMode(_) => ErrorId::E_MODE,
        Error::ConflictingOptions => ErrorId::E_OPTIONS,
        Error::MissingOperand(_) => ErrorId::E_OPERAND,
        Error::PathUnavailable { .. } => ErrorId::E_PATH,
        Error::MutationFailed { .. } => ErrorId::E_MUTATE,
        Error::DirectoryUnreadable { .. } => ErrorId::E_DIRECTORY,
    }
}
