pub mod ledger_manager;
pub mod notify;
pub mod services;

pub use ledger_manager::LedgerManager;
pub use notify::{LogSink, NotificationSink};
