use rust_decimal::Decimal;
use serde::Deserialize;

/// One line of a bulk import file:
/// `symbol,first,last,mm/dd/yyyy,deposit[,campus code | loyalty flag]`.
#[derive(Debug, Deserialize)]
pub struct AccountRecord {
    pub symbol: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub initial_deposit: Decimal,
    /// Campus code for `CC`, loyalty flag (`1` is loyal) for `S`.
    #[serde(default)]
    pub option: Option<String>,
}
