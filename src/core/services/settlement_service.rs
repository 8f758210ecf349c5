use uuid::Uuid;

use super::valid_amount;
use crate::ledger::{Ledger, Settlement};

/// Validated helpers for the settlements collection.
pub struct SettlementService;

impl SettlementService {
    /// Records a payment by `user`. Rejects a blank user or a non-positive
    /// amount.
    pub fn add(ledger: &mut Ledger, user: &str, amount: f64) -> Option<Uuid> {
        let user = user.trim();
        if user.is_empty() || !valid_amount(amount) {
            return None;
        }
        let settlement = Settlement::new(user, amount);
        let id = settlement.id;
        ledger.add_settlement(settlement);
        Some(id)
    }
}
