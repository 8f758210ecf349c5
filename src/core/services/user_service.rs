use crate::ledger::{Ledger, User};

/// Validated helpers for the users collection.
pub struct UserService;

impl UserService {
    /// Adds a participant. Rejects blank names; duplicate names are
    /// permitted, matching the historical behavior downstream data relies
    /// on.
    pub fn add(ledger: &mut Ledger, name: &str) -> Option<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        ledger.add_user(User::new(trimmed));
        Some(trimmed.to_string())
    }
}
