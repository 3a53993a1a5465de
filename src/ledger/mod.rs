pub mod ledger_error;
pub mod report;

use crate::account::Account;
use ledger_error::LedgerError;
use report::{render, ReportKind, EMPTY_LEDGER};
use tracing::{debug, info, warn};

pub type LedgerResult<T> = Result<T, LedgerError>;

const INITIAL_CAPACITY: usize = 4;
const CAPACITY_INCREASE: usize = 4;

/// Every open account, kept in insertion order and sorted only when a report
/// is produced.
///
/// The ledger does not check eligibility (age, minimum deposits) or
/// uniqueness on open; callers check [`Ledger::contains_for_opening`] first.
#[derive(Debug)]
pub struct Ledger {
    accounts: Vec<Account>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            accounts: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn find(&self, account: &Account) -> Option<usize> {
        self.accounts
            .iter()
            .position(|stored| stored.matches(account))
    }

    fn find_exact(&self, account: &Account) -> Option<usize> {
        self.accounts.iter().position(|stored| {
            stored.matches(account) && stored.kind_tag() == account.kind_tag()
        })
    }

    // Grows by a fixed step instead of letting the vector double.
    fn grow(&mut self) {
        self.accounts.reserve_exact(CAPACITY_INCREASE);
    }

    pub fn open(&mut self, account: Account) {
        if self.accounts.len() == self.accounts.capacity() {
            self.grow();
        }

        debug!(
            holder = %account.holder(),
            kind = account.kind_tag(),
            balance = %account.balance(),
            "opening account"
        );
        self.accounts.push(account);
    }

    /// Duplicate check for opening: a Checking holder already "has" a
    /// College Checking account and vice versa.
    pub fn contains_for_opening(&self, account: &Account) -> bool {
        self.find(account).is_some()
    }

    /// Whether an account of exactly this kind exists for the holder.
    pub fn contains(&self, account: &Account) -> bool {
        self.find_exact(account).is_some()
    }

    /// Removes the holder's account of this kind, keeping the order of the
    /// remaining accounts.
    pub fn close(&mut self, account: &Account) -> LedgerResult<Account> {
        if self.accounts.is_empty() {
            return Err(LedgerError::empty());
        }

        let index = self.find(account).ok_or_else(LedgerError::not_found)?;
        if self.accounts[index].kind_tag() != account.kind_tag() {
            return Err(LedgerError::kind_mismatch());
        }

        let closed = self.accounts.remove(index);
        debug!(holder = %closed.holder(), kind = closed.kind_tag(), "closed account");

        Ok(closed)
    }

    /// Withdraws `request.balance()` from the holder's account of the same
    /// kind. The stored balance is left untouched on failure.
    pub fn withdraw(&mut self, request: &Account) -> LedgerResult<()> {
        let index = self
            .find_exact(request)
            .ok_or_else(LedgerError::not_found)?;
        let stored = &mut self.accounts[index];

        let amount = request.balance();
        if stored.balance() < amount {
            return Err(LedgerError::insufficient_funds());
        }

        stored.debit(amount).ok_or_else(LedgerError::overflow)?;
        stored.record_withdrawal();
        stored.refresh_loyalty();
        debug!(holder = %stored.holder(), kind = stored.kind_tag(), %amount, "withdrew");

        Ok(())
    }

    /// Deposits `request.balance()` into the holder's account of the same
    /// kind. Fails with `Overflow`, balance unchanged, if the sum is out of
    /// range.
    pub fn deposit(&mut self, request: &Account) -> LedgerResult<()> {
        let index = self
            .find_exact(request)
            .ok_or_else(LedgerError::not_found)?;
        let stored = &mut self.accounts[index];

        let amount = request.balance();
        stored.credit(amount).ok_or_else(LedgerError::overflow)?;
        stored.refresh_loyalty();
        debug!(holder = %stored.holder(), kind = stored.kind_tag(), %amount, "deposited");

        Ok(())
    }

    /// Stable sort by kind tag, then holder.
    fn sort(&mut self) {
        self.accounts.sort_by(Account::compare);
    }

    pub fn list_sorted(&mut self) -> String {
        if self.accounts.is_empty() {
            return EMPTY_LEDGER.to_owned();
        }

        self.sort();
        render(
            ReportKind::Sorted,
            self.accounts.iter().map(Account::to_string),
        )
    }

    /// Like [`Ledger::list_sorted`], with each account's next fee and
    /// interest appended. Balances are not changed.
    pub fn list_with_fees_and_interest(&mut self) -> String {
        if self.accounts.is_empty() {
            return EMPTY_LEDGER.to_owned();
        }

        self.sort();
        render(
            ReportKind::FeesAndInterest,
            self.accounts.iter().map(Account::fees_and_interest_line),
        )
    }

    /// Runs one cycle over every account: credits interest, charges the
    /// fee and clears Money Market withdrawal counts. Returns the updated
    /// listing. An account whose update would overflow is left as it was.
    pub fn apply_monthly_update(&mut self) -> String {
        if self.accounts.is_empty() {
            return EMPTY_LEDGER.to_owned();
        }

        self.sort();
        for account in self.accounts.iter_mut() {
            if account.apply_monthly_update().is_none() {
                warn!(
                    holder = %account.holder(),
                    kind = account.kind_tag(),
                    "monthly update out of range, account left unchanged"
                );
            }
        }
        info!(accounts = self.accounts.len(), "applied monthly fees and interest");

        render(
            ReportKind::MonthlyUpdate,
            self.accounts.iter().map(Account::to_string),
        )
    }

    pub fn report(&mut self, kind: ReportKind) -> String {
        match kind {
            ReportKind::Sorted => self.list_sorted(),
            ReportKind::FeesAndInterest => self.list_with_fees_and_interest(),
            ReportKind::MonthlyUpdate => self.apply_monthly_update(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::account_kind::AccountType;
    use crate::account::campus::Campus;
    use crate::date::Date;
    use crate::ledger::ledger_error::LedgerErrorKind;
    use crate::profile::Profile;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn decimal_str(decimal: &str) -> Decimal {
        Decimal::from_str(decimal).unwrap()
    }

    fn bill() -> Profile {
        Profile::new("Bill", "Gates", Date::new(1976, 1, 1))
    }

    fn request(account_type: AccountType, holder: Profile, amount: Decimal) -> Account {
        Account::of_type(account_type, holder, amount)
    }

    #[test]
    fn test_close_existing_account() {
        let mut ledger = Ledger::new();
        let account = Account::checking(bill(), dec!(100));
        ledger.open(account.clone());

        let closed = ledger.close(&account).unwrap();

        assert_eq!(dec!(100), closed.balance());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_close_missing_account() {
        let mut ledger = Ledger::new();
        let account = Account::checking(bill(), dec!(100));

        let err = ledger.close(&account).unwrap_err();
        assert_eq!(&LedgerErrorKind::Empty, err.kind());

        ledger.open(Account::savings(bill(), dec!(100), false));
        let err = ledger.close(&account).unwrap_err();
        assert_eq!(&LedgerErrorKind::NotFound, err.kind());
        assert_eq!(1, ledger.len());
    }

    #[test]
    fn test_close_requires_exact_kind() {
        let mut ledger = Ledger::new();
        ledger.open(Account::checking(bill(), dec!(100)));

        let err = ledger
            .close(&request(AccountType::CollegeChecking, bill(), dec!(0)))
            .unwrap_err();

        assert_eq!(&LedgerErrorKind::KindMismatch, err.kind());
        assert_eq!(1, ledger.len());
    }

    #[test]
    fn test_close_preserves_order() {
        let mut ledger = Ledger::new();
        let names = ["Ann", "Bob", "Cid", "Dee", "Eve"];
        for name in names {
            ledger.open(Account::checking(
                Profile::new(name, "Lee", Date::new(1980, 1, 1)),
                dec!(10),
            ));
        }

        ledger
            .close(&request(
                AccountType::Checking,
                Profile::new("Bob", "Lee", Date::new(1980, 1, 1)),
                dec!(0),
            ))
            .unwrap();

        let remaining: Vec<&str> = ledger
            .accounts()
            .iter()
            .map(|account| account.holder().first_name())
            .collect();
        assert_eq!(vec!["Ann", "Cid", "Dee", "Eve"], remaining);
    }

    #[test]
    fn test_grows_past_initial_capacity() {
        let mut ledger = Ledger::new();
        for day in 1..=10 {
            ledger.open(Account::checking(
                Profile::new("Ann", "Lee", Date::new(1980, 1, day)),
                dec!(10),
            ));
        }

        assert_eq!(10, ledger.len());
    }

    #[test]
    fn test_checking_and_college_checking_are_duplicates_on_open() {
        let mut ledger = Ledger::new();
        ledger.open(Account::checking(bill(), dec!(100)));

        let college = Account::college_checking(bill(), dec!(100), Campus::Newark);
        assert!(ledger.contains_for_opening(&college));
        assert!(!ledger.contains(&college));

        let mut ledger = Ledger::new();
        ledger.open(college);
        assert!(ledger.contains_for_opening(&Account::checking(bill(), dec!(1))));
    }

    #[test]
    fn test_savings_and_money_market_may_coexist() {
        let mut ledger = Ledger::new();
        ledger.open(Account::savings(bill(), dec!(100), true));

        let money_market = Account::money_market(bill(), dec!(2500));
        assert!(!ledger.contains_for_opening(&money_market));
        ledger.open(money_market);

        assert!(ledger.contains(&request(AccountType::Savings, bill(), dec!(0))));
        assert!(ledger.contains(&request(AccountType::MoneyMarket, bill(), dec!(0))));
    }

    #[test]
    fn test_valid_withdrawal() {
        let mut ledger = Ledger::new();
        ledger.open(Account::checking(bill(), dec!(100)));

        ledger
            .withdraw(&request(AccountType::Checking, bill(), dec!(40)))
            .unwrap();
        assert_eq!(dec!(60), ledger.accounts()[0].balance());

        ledger
            .withdraw(&request(AccountType::Checking, bill(), dec!(60)))
            .unwrap();
        assert_eq!(Decimal::ZERO, ledger.accounts()[0].balance());
    }

    #[test]
    fn test_insufficient_funds_withdrawal() {
        let mut ledger = Ledger::new();
        ledger.open(Account::money_market(bill(), dec!(2000)));

        let err = ledger
            .withdraw(&request(AccountType::MoneyMarket, bill(), decimal_str("2000.01")))
            .unwrap_err();

        assert_eq!(&LedgerErrorKind::InsufficientFunds, err.kind());
        assert_eq!(dec!(2000), ledger.accounts()[0].balance());
        assert_eq!(Some(0), ledger.accounts()[0].withdrawals());
    }

    #[test]
    fn test_money_market_withdrawal_counts_and_refreshes_loyalty() {
        let mut ledger = Ledger::new();
        ledger.open(Account::money_market(bill(), dec!(2100)));
        assert!(ledger.accounts()[0].is_loyal());

        ledger
            .withdraw(&request(AccountType::MoneyMarket, bill(), dec!(200)))
            .unwrap();

        let stored = &ledger.accounts()[0];
        assert_eq!(dec!(1900), stored.balance());
        assert_eq!(Some(1), stored.withdrawals());
        assert!(!stored.is_loyal());
    }

    #[test]
    fn test_deposit_refreshes_money_market_loyalty() {
        let mut ledger = Ledger::new();
        ledger.open(Account::money_market(bill(), dec!(1500)));
        assert!(!ledger.accounts()[0].is_loyal());

        ledger
            .deposit(&request(AccountType::MoneyMarket, bill(), dec!(500)))
            .unwrap();

        assert_eq!(dec!(2000), ledger.accounts()[0].balance());
        assert!(ledger.accounts()[0].is_loyal());
    }

    #[test]
    fn test_deposit_and_withdraw_require_exact_kind() {
        let mut ledger = Ledger::new();
        ledger.open(Account::checking(bill(), dec!(100)));

        let college = request(AccountType::CollegeChecking, bill(), dec!(10));
        assert_eq!(
            &LedgerErrorKind::NotFound,
            ledger.deposit(&college).unwrap_err().kind()
        );
        assert_eq!(
            &LedgerErrorKind::NotFound,
            ledger.withdraw(&college).unwrap_err().kind()
        );
        assert_eq!(dec!(100), ledger.accounts()[0].balance());
    }

    #[test]
    fn test_empty_reports() {
        let mut ledger = Ledger::new();

        assert_eq!(EMPTY_LEDGER, ledger.list_sorted());
        assert_eq!(EMPTY_LEDGER, ledger.list_with_fees_and_interest());
        assert_eq!(EMPTY_LEDGER, ledger.apply_monthly_update());
    }

    #[test]
    fn test_sort_order_by_kind_tag() {
        let adams = Profile::new("John", "Adams", Date::new(1970, 2, 3));
        let zed = Profile::new("Zed", "Zed", Date::new(1970, 2, 3));
        let mut ledger = Ledger::new();
        ledger.open(Account::money_market(zed, dec!(2000)));
        ledger.open(Account::checking(adams.clone(), dec!(1000)));
        ledger.open(Account::savings(adams, dec!(500), false));

        let report = ledger.list_sorted();

        assert_eq!(
            "*Accounts sorted by account type and profile.\n\
             Checking::John Adams 2/3/1970::Balance $1,000.00\n\
             Money Market::Savings::Zed Zed 2/3/1970::Balance $2,000.00::is loyal::withdrawal: 0\n\
             Savings::John Adams 2/3/1970::Balance $500.00\n\
             *end of list.\n",
            report
        );
    }

    #[test]
    fn test_listing_is_idempotent() {
        let mut ledger = Ledger::new();
        ledger.open(Account::savings(bill(), dec!(300), true));
        ledger.open(Account::checking(bill(), dec!(999)));

        let first = ledger.list_sorted();
        let second = ledger.list_sorted();
        let fees = ledger.list_with_fees_and_interest();

        assert_eq!(first, second);
        assert_eq!(first, ledger.list_sorted());
        assert!(fees.starts_with(ReportKind::FeesAndInterest.header()));
        assert_eq!(dec!(999), ledger.accounts()[0].balance());
        assert_eq!(dec!(300), ledger.accounts()[1].balance());
    }

    #[test]
    fn test_fees_and_interest_report() {
        let mut ledger = Ledger::new();
        ledger.open(Account::checking(bill(), dec!(999)));

        assert_eq!(
            "*list of accounts with fee and monthly interest\n\
             Checking::Bill Gates 1/1/1976::Balance $999.00::fee $12.00::monthly interest $0.83\n\
             *end of list.\n",
            ledger.list_with_fees_and_interest()
        );
    }

    #[test]
    fn test_apply_monthly_update() {
        let mut ledger = Ledger::new();
        ledger.open(Account::checking(bill(), dec!(999)));
        ledger.open(Account::money_market(bill(), dec!(3000)));
        for _ in 0..4 {
            ledger
                .withdraw(&request(AccountType::MoneyMarket, bill(), dec!(100)))
                .unwrap();
        }

        let report = ledger.apply_monthly_update();

        assert_eq!(
            "*list of accounts with fees and interests applied.\n\
             Checking::Bill Gates 1/1/1976::Balance $987.83\n\
             Money Market::Savings::Bill Gates 1/1/1976::Balance $2,600.29::is loyal::withdrawal: 0\n\
             *end of list.\n",
            report
        );
        assert_eq!(decimal_str("987.8325"), ledger.accounts()[0].balance().round_dp(4));
        assert_eq!(Some(0), ledger.accounts()[1].withdrawals());
    }

    #[test]
    fn test_deposit_overflow_is_refused() {
        let mut ledger = Ledger::new();
        ledger.open(Account::checking(bill(), Decimal::MAX));

        let err = ledger
            .deposit(&request(AccountType::Checking, bill(), dec!(1)))
            .unwrap_err();

        assert_eq!(&LedgerErrorKind::Overflow, err.kind());
        assert_eq!(Decimal::MAX, ledger.accounts()[0].balance());
    }

    #[test]
    fn test_monthly_update_skips_out_of_range_account() {
        let mut ledger = Ledger::new();
        ledger.open(Account::checking(bill(), dec!(999)));
        ledger.open(Account::savings(bill(), Decimal::MAX, true));

        let report = ledger.apply_monthly_update();

        assert!(report.starts_with(ReportKind::MonthlyUpdate.header()));
        assert_eq!(decimal_str("987.8325"), ledger.accounts()[0].balance().round_dp(4));
        assert_eq!(Decimal::MAX, ledger.accounts()[1].balance());
    }

    #[test]
    fn test_report_dispatch() {
        let mut ledger = Ledger::new();
        ledger.open(Account::college_checking(bill(), dec!(50), Campus::Camden));

        assert_eq!(ledger.list_sorted(), ledger.report(ReportKind::Sorted));
        assert!(ledger
            .report(ReportKind::MonthlyUpdate)
            .starts_with(ReportKind::MonthlyUpdate.header()));
    }
}
