//! Which GraphQL service a process serves.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceKind {
    /// Books/authors catalog with a `bookAdded` subscription
    #[default]
    Events,
    /// Books/authors catalog with create/update/delete mutations
    Crud,
    /// Read-only static user list
    Users,
}

impl ServiceKind {
    pub fn from_arg(value: &str) -> Option<Self> {
        match value {
            "events" => Some(ServiceKind::Events),
            "crud" => Some(ServiceKind::Crud),
            "users" => Some(ServiceKind::Users),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Events => "events",
            ServiceKind::Crud => "crud",
            ServiceKind::Users => "users",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
