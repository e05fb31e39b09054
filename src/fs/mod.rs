pub mod attrs;
pub mod meta;

pub use attrs::{change_mode, change_owner};
pub use meta::{read_state, EntryKind, EntryState};
