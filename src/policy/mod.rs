pub mod config;
pub mod types;

pub use config::{Flags, Options};
pub use types::SymlinkPolicy;
