pub mod identity;

pub use identity::system::SystemIdentityDb;
pub use identity::IdentityDb;
