pub mod system;

/// Read-only view of the user and group databases.
pub trait IdentityDb {
    /// Look up a user by name.
    fn lookup_user(&self, name: &str) -> Option<u32>;

    /// Look up a group by name.
    fn lookup_group(&self, name: &str) -> Option<u32>;

    /// Reverse lookup for reporting; `None` when the uid has no entry.
    fn user_name(&self, uid: u32) -> Option<String>;

    /// Reverse lookup for reporting; `None` when the gid has no entry.
    fn group_name(&self, gid: u32) -> Option<String>;
}
