use crate::date::Date;
use crate::profile::Profile;
use thiserror::Error;

/// Reasons a teller request is refused. The display text is the message
/// shown to whoever made the request.
#[derive(Debug, Error, PartialEq)]
pub enum TellerError {
    #[error("DOB invalid: {0} not a valid calendar date!")]
    InvalidDateOfBirth(Date),
    #[error("DOB invalid: {0} cannot be today or a future day.")]
    FutureDateOfBirth(Date),
    #[error("DOB invalid: {0} under 16.")]
    Underage(Date),
    #[error("DOB invalid: {0} over 24.")]
    OverCollegeAge(Date),
    #[error("Initial deposit cannot be 0 or negative.")]
    NonPositiveInitialDeposit,
    #[error("Minimum of $2000 to open a Money Market account.")]
    BelowMoneyMarketMinimum,
    #[error("Missing data for {0} an account.")]
    MissingData(&'static str),
    #[error("{holder}({symbol}) is already in the database.")]
    AlreadyExists {
        holder: Profile,
        symbol: &'static str,
    },
    #[error("{holder}({symbol}) is not in the database.")]
    NotFound {
        holder: Profile,
        symbol: &'static str,
    },
    #[error("{0} - amount cannot be 0 or negative.")]
    NonPositiveAmount(&'static str),
    #[error("{holder}({symbol}) Withdraw - insufficient fund.")]
    InsufficientFunds {
        holder: Profile,
        symbol: &'static str,
    },
    #[error("{holder}({symbol}) Deposit - balance out of range.")]
    BalanceOutOfRange {
        holder: Profile,
        symbol: &'static str,
    },
    #[error("Invalid campus code.")]
    InvalidCampusCode,
    #[error("Invalid account type.")]
    InvalidAccountType(String),
    #[error("Invalid record on line {0}.")]
    InvalidRecord(u64),
}
