//! Static user directory
//!
//! The user list is fixed at compile time and never mutated.

use once_cell::sync::Lazy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
}

static USERS: Lazy<Vec<UserRecord>> = Lazy::new(|| {
    [
        ("1", "John Doe", "john.doe@example.com"),
        ("2", "Jane Doe", "jane.doe@example.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| UserRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
    })
    .collect()
});

/// Every known user
pub fn all() -> &'static [UserRecord] {
    &USERS
}
