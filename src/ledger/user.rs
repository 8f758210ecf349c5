use serde::{Deserialize, Serialize};

/// A group participant. The display name is the identity; group expenses and
/// settlements reference it by value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
