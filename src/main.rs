use bank_ledger::ledger::report::ReportKind;
use bank_ledger::teller::Teller;
use clap::{Parser, ValueEnum};
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bank-ledger")]
#[command(about = "Loads accounts from an import file and prints ledger reports", long_about = None)]
struct Cli {
    /// Bulk import file: symbol,first,last,mm/dd/yyyy,deposit[,campus|loyal]
    file: PathBuf,

    /// Reports to print after loading, in order
    #[arg(short, long, value_enum, default_value = "sorted")]
    report: Vec<ReportArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportArg {
    /// Accounts sorted by type and holder
    Sorted,
    /// Sorted accounts with next month's fee and interest
    Fees,
    /// Apply a month of fees and interest, then list
    Update,
}

impl From<ReportArg> for ReportKind {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Sorted => ReportKind::Sorted,
            ReportArg::Fees => ReportKind::FeesAndInterest,
            ReportArg::Update => ReportKind::MonthlyUpdate,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut teller = Teller::new();
    for message in teller.load(File::open(&cli.file)?) {
        println!("{}", message);
    }

    for report in cli.report {
        print!("{}", teller.report(report.into()));
    }

    Ok(())
}
