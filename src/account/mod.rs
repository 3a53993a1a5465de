pub mod account_kind;
pub mod campus;
pub mod rules;

use crate::money::format_currency;
use crate::profile::Profile;
use account_kind::{AccountKind, AccountType};
use campus::Campus;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;

/// A holder's account of one kind.
///
/// Accounts built only to address an existing account in a ledger (close,
/// deposit, withdraw) carry the amount to move in `balance`.
#[derive(Debug, Clone)]
pub struct Account {
    holder: Profile,
    balance: Decimal,
    kind: AccountKind,
}

impl Account {
    fn new(holder: Profile, balance: Decimal, kind: AccountKind) -> Self {
        Self {
            holder,
            balance,
            kind,
        }
    }

    pub fn checking(holder: Profile, balance: Decimal) -> Self {
        Account::new(holder, balance, AccountKind::Checking)
    }

    pub fn college_checking(holder: Profile, balance: Decimal, campus: Campus) -> Self {
        Account::new(
            holder,
            balance,
            AccountKind::CollegeChecking {
                campus: Some(campus),
            },
        )
    }

    pub fn savings(holder: Profile, balance: Decimal, loyal: bool) -> Self {
        Account::new(holder, balance, AccountKind::Savings { loyal })
    }

    pub fn money_market(holder: Profile, balance: Decimal) -> Self {
        let mut account = Account::new(
            holder,
            balance,
            AccountKind::MoneyMarket {
                loyal: false,
                withdrawals: 0,
            },
        );
        account.refresh_loyalty();
        account
    }

    /// Builds an account of `account_type` with default variant state, as
    /// used for lookups where only the holder, kind and amount matter.
    pub fn of_type(account_type: AccountType, holder: Profile, balance: Decimal) -> Self {
        match account_type {
            AccountType::Checking => Account::checking(holder, balance),
            AccountType::CollegeChecking => Account::new(
                holder,
                balance,
                AccountKind::CollegeChecking { campus: None },
            ),
            AccountType::Savings => Account::savings(holder, balance, false),
            AccountType::MoneyMarket => Account::money_market(holder, balance),
        }
    }

    pub fn holder(&self) -> &Profile {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn account_type(&self) -> AccountType {
        self.kind.account_type()
    }

    pub fn kind_tag(&self) -> &'static str {
        self.account_type().tag()
    }

    pub fn kind_symbol(&self) -> &'static str {
        self.account_type().symbol()
    }

    pub fn is_loyal(&self) -> bool {
        match self.kind {
            AccountKind::Savings { loyal } | AccountKind::MoneyMarket { loyal, .. } => loyal,
            _ => false,
        }
    }

    pub fn withdrawals(&self) -> Option<u32> {
        match self.kind {
            AccountKind::MoneyMarket { withdrawals, .. } => Some(withdrawals),
            _ => None,
        }
    }

    pub fn monthly_interest_rate(&self) -> Decimal {
        rules::monthly_interest_rate(&self.kind)
    }

    pub fn monthly_fee(&self) -> Decimal {
        rules::monthly_fee(&self.kind, self.balance)
    }

    /// Interest one cycle would credit at the current balance.
    pub fn monthly_interest(&self) -> Decimal {
        self.balance * self.monthly_interest_rate()
    }

    /// Listing order: kind tag first, then holder.
    pub fn compare(&self, other: &Account) -> Ordering {
        self.kind_tag()
            .cmp(other.kind_tag())
            .then_with(|| self.holder.compare(&other.holder))
    }

    /// Identity used to find an account in a ledger. Looser than
    /// [`Account::compare`]: Checking and College Checking of the same holder
    /// match each other, Savings and Money Market never do.
    pub fn matches(&self, other: &Account) -> bool {
        self.kind.is_same_identity(&other.kind) && self.holder == other.holder
    }

    /// Adds `amount` to the balance. Returns `None`, leaving the balance
    /// unchanged, when the result is out of range.
    pub(crate) fn credit(&mut self, amount: Decimal) -> Option<Decimal> {
        self.balance = self.balance.checked_add(amount)?;
        Some(self.balance)
    }

    pub(crate) fn debit(&mut self, amount: Decimal) -> Option<Decimal> {
        self.balance = self.balance.checked_sub(amount)?;
        Some(self.balance)
    }

    pub(crate) fn record_withdrawal(&mut self) {
        if let AccountKind::MoneyMarket { withdrawals, .. } = &mut self.kind {
            *withdrawals += 1;
        }
    }

    pub(crate) fn reset_withdrawals(&mut self) {
        if let AccountKind::MoneyMarket { withdrawals, .. } = &mut self.kind {
            *withdrawals = 0;
        }
    }

    pub(crate) fn refresh_loyalty(&mut self) {
        let balance = self.balance;
        if let AccountKind::MoneyMarket { loyal, .. } = &mut self.kind {
            *loyal = balance >= rules::MONEY_MARKET_BENEFITS_BALANCE;
        }
    }

    /// Applies one cycle: interest on the current balance, then the fee as
    /// computed on the credited balance. Returns `None` and leaves the
    /// account untouched if any step is out of range.
    pub(crate) fn apply_monthly_update(&mut self) -> Option<Decimal> {
        let interest = self.balance.checked_mul(self.monthly_interest_rate())?;
        let credited = self.balance.checked_add(interest)?;
        let fee = rules::monthly_fee(&self.kind, credited);

        self.balance = credited.checked_sub(fee)?;
        self.reset_withdrawals();
        Some(self.balance)
    }

    /// Listing line followed by the would-be fee and interest of a cycle.
    pub fn fees_and_interest_line(&self) -> String {
        format!(
            "{}::fee {}::monthly interest {}",
            self,
            format_currency(self.monthly_fee()),
            format_currency(self.monthly_interest())
        )
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = format!("{}::Balance {}", self.holder, format_currency(self.balance));
        match &self.kind {
            AccountKind::Checking => write!(f, "Checking::{}", base),
            AccountKind::CollegeChecking { campus } => {
                write!(f, "College Checking::{}", base)?;
                if let Some(campus) = campus {
                    write!(f, "::{}", campus)?;
                }
                Ok(())
            }
            AccountKind::Savings { loyal } => {
                write!(f, "Savings::{}", base)?;
                if *loyal {
                    write!(f, "::is loyal")?;
                }
                Ok(())
            }
            AccountKind::MoneyMarket { loyal, withdrawals } => {
                write!(f, "Money Market::Savings::{}", base)?;
                if *loyal {
                    write!(f, "::is loyal")?;
                }
                write!(f, "::withdrawal: {}", withdrawals)
            }
        }
    }
}
