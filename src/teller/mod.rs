//! Front desk for the ledger: checks eligibility, turns ledger outcomes into
//! messages and bulk-loads accounts from import files.

pub mod account_record;
pub mod teller_error;

use crate::account::account_kind::AccountType;
use crate::account::campus::Campus;
use crate::account::rules::MONEY_MARKET_BENEFITS_BALANCE;
use crate::account::Account;
use crate::date::Date;
use crate::ledger::ledger_error::LedgerErrorKind;
use crate::ledger::report::ReportKind;
use crate::ledger::Ledger;
use crate::profile::Profile;
use account_record::AccountRecord;
use csv::{Reader, ReaderBuilder, Trim};
use rust_decimal::Decimal;
use std::io;
use std::str::FromStr;
use teller_error::TellerError;
use tracing::{debug, info, warn};

pub type TellerResult<T> = Result<T, TellerError>;

const MIN_AGE: i32 = 16;
const COLLEGE_MAX_AGE: i32 = 24;
const LOYAL_FLAG: &str = "1";
pub const ACCOUNTS_LOADED: &str = "Accounts loaded.";

/// Everything needed to open an account.
#[derive(Debug, Clone)]
pub struct OpenRequest {
    pub account_type: AccountType,
    pub holder: Profile,
    pub initial_deposit: Decimal,
    pub campus: Option<Campus>,
    pub loyal: bool,
}

impl OpenRequest {
    pub fn new(account_type: AccountType, holder: Profile, initial_deposit: Decimal) -> Self {
        Self {
            account_type,
            holder,
            initial_deposit,
            campus: None,
            loyal: false,
        }
    }

    pub fn with_campus(mut self, campus: Campus) -> Self {
        self.campus = Some(campus);
        self
    }

    pub fn with_loyalty(mut self, loyal: bool) -> Self {
        self.loyal = loyal;
        self
    }

    fn into_account(self) -> TellerResult<Account> {
        let account = match self.account_type {
            AccountType::Checking => Account::checking(self.holder, self.initial_deposit),
            AccountType::CollegeChecking => {
                let campus = self.campus.ok_or(TellerError::MissingData("opening"))?;
                Account::college_checking(self.holder, self.initial_deposit, campus)
            }
            AccountType::Savings => Account::savings(self.holder, self.initial_deposit, self.loyal),
            AccountType::MoneyMarket => Account::money_market(self.holder, self.initial_deposit),
        };

        Ok(account)
    }
}

fn trimmed_csv_reader<R: io::Read>(reader: R) -> Reader<R> {
    let mut builder = ReaderBuilder::new();
    builder.trim(Trim::All).has_headers(false).flexible(true);
    builder.from_reader(reader)
}

pub struct Teller {
    ledger: Ledger,
    today: Date,
}

impl Default for Teller {
    fn default() -> Self {
        Teller::with_today(Date::today())
    }
}

impl Teller {
    pub fn new() -> Self {
        Teller::default()
    }

    /// A teller that computes ages and future dates against `today`.
    pub fn with_today(today: Date) -> Self {
        Self {
            ledger: Ledger::new(),
            today,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn check_eligibility(&self, account: &Account) -> TellerResult<()> {
        let dob = *account.holder().date_of_birth();
        if !dob.is_valid() {
            return Err(TellerError::InvalidDateOfBirth(dob));
        }
        if dob.is_on_or_after(&self.today) {
            return Err(TellerError::FutureDateOfBirth(dob));
        }

        let age = dob.age_on(&self.today);
        if age < MIN_AGE {
            return Err(TellerError::Underage(dob));
        }
        if account.balance() <= Decimal::ZERO {
            return Err(TellerError::NonPositiveInitialDeposit);
        }
        if account.account_type() == AccountType::CollegeChecking && age >= COLLEGE_MAX_AGE {
            return Err(TellerError::OverCollegeAge(dob));
        }
        if account.account_type() == AccountType::MoneyMarket
            && account.balance() < MONEY_MARKET_BENEFITS_BALANCE
        {
            return Err(TellerError::BelowMoneyMarketMinimum);
        }

        Ok(())
    }

    pub fn open(&mut self, request: OpenRequest) -> TellerResult<String> {
        let account = request.into_account()?;
        self.check_eligibility(&account)?;

        if self.ledger.contains_for_opening(&account) {
            return Err(TellerError::AlreadyExists {
                holder: account.holder().clone(),
                symbol: account.kind_symbol(),
            });
        }

        let message = format!("{}({}) opened.", account.holder(), account.kind_symbol());
        self.ledger.open(account);

        Ok(message)
    }

    pub fn close(&mut self, account_type: AccountType, holder: Profile) -> TellerResult<String> {
        let account = Account::of_type(account_type, holder, Decimal::ZERO);
        match self.ledger.close(&account) {
            Ok(_) => Ok(format!(
                "{}({}) has been closed.",
                account.holder(),
                account.kind_symbol()
            )),
            Err(err) => {
                debug!(reason = err.message(), "close refused");
                Err(TellerError::NotFound {
                    holder: account.holder().clone(),
                    symbol: account.kind_symbol(),
                })
            }
        }
    }

    pub fn deposit(
        &mut self,
        account_type: AccountType,
        holder: Profile,
        amount: Decimal,
    ) -> TellerResult<String> {
        if amount <= Decimal::ZERO {
            return Err(TellerError::NonPositiveAmount("Deposit"));
        }

        let request = Account::of_type(account_type, holder, amount);
        if let Err(err) = self.ledger.deposit(&request) {
            debug!(reason = err.message(), "deposit refused");
            let holder = request.holder().clone();
            let symbol = request.kind_symbol();
            return Err(match err.kind() {
                LedgerErrorKind::Overflow => TellerError::BalanceOutOfRange { holder, symbol },
                _ => TellerError::NotFound { holder, symbol },
            });
        }

        Ok(format!(
            "{}({}) Deposit - balance updated.",
            request.holder(),
            request.kind_symbol()
        ))
    }

    pub fn withdraw(
        &mut self,
        account_type: AccountType,
        holder: Profile,
        amount: Decimal,
    ) -> TellerResult<String> {
        if amount <= Decimal::ZERO {
            return Err(TellerError::NonPositiveAmount("Withdraw"));
        }

        let request = Account::of_type(account_type, holder, amount);
        if let Err(err) = self.ledger.withdraw(&request) {
            debug!(reason = err.message(), "withdrawal refused");
            let holder = request.holder().clone();
            let symbol = request.kind_symbol();
            return Err(match err.kind() {
                LedgerErrorKind::InsufficientFunds => {
                    TellerError::InsufficientFunds { holder, symbol }
                }
                _ => TellerError::NotFound { holder, symbol },
            });
        }

        Ok(format!(
            "{}({}) Withdraw - balance updated.",
            request.holder(),
            request.kind_symbol()
        ))
    }

    pub fn report(&mut self, kind: ReportKind) -> String {
        self.ledger.report(kind)
    }

    fn open_record(&mut self, line: u64, record: AccountRecord) -> TellerResult<String> {
        let account_type = AccountType::from_str(&record.symbol)
            .map_err(|_| TellerError::InvalidAccountType(record.symbol.clone()))?;
        let date_of_birth: Date = record
            .date_of_birth
            .parse()
            .map_err(|_| TellerError::InvalidRecord(line))?;
        let holder = Profile::new(&record.first_name, &record.last_name, date_of_birth);

        let mut request = OpenRequest::new(account_type, holder, record.initial_deposit);
        match account_type {
            AccountType::CollegeChecking => {
                let campus = record
                    .option
                    .as_deref()
                    .and_then(|code| code.parse::<u8>().ok())
                    .and_then(Campus::from_code)
                    .ok_or(TellerError::InvalidCampusCode)?;
                request = request.with_campus(campus);
            }
            AccountType::Savings => {
                request = request.with_loyalty(record.option.as_deref() == Some(LOYAL_FLAG));
            }
            _ => {}
        }

        self.open(request)
    }

    /// Opens an account for every line of a bulk import file. Returns one
    /// message per rejected line, followed by [`ACCOUNTS_LOADED`].
    pub fn load<R: io::Read>(&mut self, reader: R) -> Vec<String> {
        let mut messages = Vec::new();
        let mut opened = 0usize;
        let mut last_line = 0;

        for record in trimmed_csv_reader(reader).records() {
            let position = match &record {
                Ok(record) => record.position(),
                Err(err) => err.position(),
            };
            let line = position
                .map(|position| position.line())
                .unwrap_or(last_line + 1);
            last_line = line;

            let result = record
                .map_err(|_| TellerError::InvalidRecord(line))
                .and_then(|record| {
                    record
                        .deserialize::<AccountRecord>(None)
                        .map_err(|_| TellerError::InvalidRecord(line))
                })
                .and_then(|fields| self.open_record(line, fields));

            match result {
                Ok(_) => opened += 1,
                Err(err) => {
                    warn!(line, %err, "rejected import record");
                    messages.push(err.to_string());
                }
            }
        }

        info!(opened, rejected = messages.len(), "bulk import finished");
        messages.push(ACCOUNTS_LOADED.to_owned());

        messages
    }
}
