use thiserror::Error;

#[derive(Debug, PartialEq)]
pub enum LedgerErrorKind {
    Empty,
    NotFound,
    KindMismatch,
    InsufficientFunds,
    Overflow,
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct LedgerError {
    kind: LedgerErrorKind,
    message: String,
}

impl LedgerError {
    pub fn kind(&self) -> &LedgerErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn new(kind: LedgerErrorKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }

    pub fn empty() -> Self {
        LedgerError::new(LedgerErrorKind::Empty, "Ledger holds no accounts")
    }

    pub fn not_found() -> Self {
        LedgerError::new(
            LedgerErrorKind::NotFound,
            "No account of this kind exists for the holder",
        )
    }

    pub fn kind_mismatch() -> Self {
        LedgerError::new(
            LedgerErrorKind::KindMismatch,
            "Holder's matching account is of a different kind",
        )
    }

    pub fn insufficient_funds() -> Self {
        LedgerError::new(
            LedgerErrorKind::InsufficientFunds,
            "Amount is greater than the balance, withdrawal would lead to negative balance",
        )
    }

    pub fn overflow() -> Self {
        LedgerError::new(
            LedgerErrorKind::Overflow,
            "Amount would take the balance out of the representable range",
        )
    }
}
