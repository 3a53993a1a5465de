pub const EMPTY_LEDGER: &str = "Account Database is empty!\n";
pub const END_OF_LIST: &str = "*end of list.\n";

/// The three listings a ledger can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Sorted,
    FeesAndInterest,
    MonthlyUpdate,
}

impl ReportKind {
    pub fn header(&self) -> &'static str {
        match self {
            ReportKind::Sorted => "*Accounts sorted by account type and profile.\n",
            ReportKind::FeesAndInterest => "*list of accounts with fee and monthly interest\n",
            ReportKind::MonthlyUpdate => "*list of accounts with fees and interests applied.\n",
        }
    }
}

pub(crate) fn render<I>(kind: ReportKind, lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut output = String::from(kind.header());
    for line in lines {
        output.push_str(&line);
        output.push('\n');
    }
    output.push_str(END_OF_LIST);

    output
}
