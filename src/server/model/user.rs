//! Insert payloads for users.

/// Fields for inserting a user
#[derive(Clone, Debug)]
pub struct NewUser {
    /// Display name
    pub name: String,
    /// Email address, must be unique
    pub email: String,
    /// Whether the account is active
    pub is_active: bool,
}
