pub mod account;
pub mod date;
pub mod ledger;
pub mod money;
pub mod profile;
pub mod teller;
