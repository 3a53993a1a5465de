//! Interest and fee table for every account kind.

use crate::account::account_kind::AccountKind;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const MONTHS_IN_YEAR: Decimal = dec!(12);
const NO_FEE: Decimal = dec!(0);

const CHECKING_RATE: Decimal = dec!(0.01);
const CHECKING_FEE: Decimal = dec!(12);
const CHECKING_WAIVER_BALANCE: Decimal = dec!(1000);

const SAVINGS_RATE: Decimal = dec!(0.04);
const SAVINGS_FEE: Decimal = dec!(25);
const SAVINGS_WAIVER_BALANCE: Decimal = dec!(500);

const MONEY_MARKET_RATE: Decimal = dec!(0.045);
const MONEY_MARKET_FEE: Decimal = dec!(25);
const MONEY_MARKET_EXCESS_WITHDRAWAL_FEE: Decimal = dec!(10);
const MONEY_MARKET_FREE_WITHDRAWALS: u32 = 3;

const LOYAL_EXTRA_RATE: Decimal = dec!(0.0025);

/// Balance at or above which a Money Market account waives its fee and is
/// considered loyal.
pub const MONEY_MARKET_BENEFITS_BALANCE: Decimal = dec!(2000);

pub fn annual_interest_rate(kind: &AccountKind) -> Decimal {
    match kind {
        AccountKind::Checking | AccountKind::CollegeChecking { .. } => CHECKING_RATE,
        AccountKind::Savings { loyal } => with_loyalty(SAVINGS_RATE, *loyal),
        AccountKind::MoneyMarket { loyal, .. } => with_loyalty(MONEY_MARKET_RATE, *loyal),
    }
}

fn with_loyalty(rate: Decimal, loyal: bool) -> Decimal {
    if loyal {
        return rate + LOYAL_EXTRA_RATE;
    }

    rate
}

pub fn monthly_interest_rate(kind: &AccountKind) -> Decimal {
    annual_interest_rate(kind) / MONTHS_IN_YEAR
}

pub fn monthly_fee(kind: &AccountKind, balance: Decimal) -> Decimal {
    match kind {
        AccountKind::Checking => waived_at(CHECKING_FEE, CHECKING_WAIVER_BALANCE, balance),
        AccountKind::CollegeChecking { .. } => NO_FEE,
        AccountKind::Savings { .. } => waived_at(SAVINGS_FEE, SAVINGS_WAIVER_BALANCE, balance),
        AccountKind::MoneyMarket { withdrawals, .. } => {
            let fee = waived_at(MONEY_MARKET_FEE, MONEY_MARKET_BENEFITS_BALANCE, balance);
            if *withdrawals > MONEY_MARKET_FREE_WITHDRAWALS {
                return fee + MONEY_MARKET_EXCESS_WITHDRAWAL_FEE;
            }

            fee
        }
    }
}

fn waived_at(fee: Decimal, waiver_balance: Decimal, balance: Decimal) -> Decimal {
    if balance >= waiver_balance {
        return NO_FEE;
    }

    fee
}
