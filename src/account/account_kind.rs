use crate::account::campus::Campus;
use strum::EnumString;

/// The four account products, named by the short symbol callers and import
/// files use to select them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum AccountType {
    #[strum(serialize = "C")]
    Checking,
    #[strum(serialize = "CC")]
    CollegeChecking,
    #[strum(serialize = "S")]
    Savings,
    #[strum(serialize = "MM")]
    MoneyMarket,
}

impl AccountType {
    pub fn symbol(&self) -> &'static str {
        match self {
            AccountType::Checking => "C",
            AccountType::CollegeChecking => "CC",
            AccountType::Savings => "S",
            AccountType::MoneyMarket => "MM",
        }
    }

    /// Type discriminator; the primary sort key of a ledger listing.
    pub fn tag(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::CollegeChecking => "College",
            AccountType::Savings => "Savings",
            AccountType::MoneyMarket => "Money Market",
        }
    }
}

/// Variant-specific state carried by an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKind {
    Checking,
    /// `campus` is absent on lookup requests, which only carry holder and kind.
    CollegeChecking { campus: Option<Campus> },
    Savings { loyal: bool },
    /// `loyal` is derived from the balance, never set by a caller.
    MoneyMarket { loyal: bool, withdrawals: u32 },
}

impl AccountKind {
    pub fn account_type(&self) -> AccountType {
        match self {
            AccountKind::Checking => AccountType::Checking,
            AccountKind::CollegeChecking { .. } => AccountType::CollegeChecking,
            AccountKind::Savings { .. } => AccountType::Savings,
            AccountKind::MoneyMarket { .. } => AccountType::MoneyMarket,
        }
    }

    /// Whether two accounts of these kinds may belong to the same holder.
    /// Checking and College Checking count as one kind here even though they
    /// sort and list separately.
    pub fn is_same_identity(&self, other: &AccountKind) -> bool {
        use AccountKind::*;

        matches!(
            (self, other),
            (Checking | CollegeChecking { .. }, Checking | CollegeChecking { .. })
                | (Savings { .. }, Savings { .. })
                | (MoneyMarket { .. }, MoneyMarket { .. })
        )
    }
}
