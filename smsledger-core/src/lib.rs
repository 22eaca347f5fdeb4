//! smsledger-core: shared record types and currency validation.

pub mod currency;
pub mod transaction;

pub use currency::is_valid_code;
pub use transaction::Transaction;
