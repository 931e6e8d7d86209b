use anyhow::{Context, Result};
use clap::Parser;
use csv2ofx_core::{OfxDefaults, write_statement};
use csv2ofx_ingest::parse_busey_csv;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CSV2OFX_BUILD_SHA"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "csv2ofx",
    version = VERSION,
    about = "Convert a Busey Bank CSV export into an OFX statement on stdout"
)]
struct Cli {
    /// Path to the Busey CSV export
    csv: PathBuf,

    /// Bank routing number written to <BANKID> (default: 071102568)
    #[arg(long)]
    bank_id: Option<String>,

    /// Account type written to <ACCTTYPE> (default: CHECKING)
    #[arg(long)]
    account_type: Option<String>,

    /// Currency written to <CURDEF> (default: USD)
    #[arg(long)]
    currency: Option<String>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace); RUST_LOG wins if set
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn ofx_defaults(&self) -> OfxDefaults {
        let base = OfxDefaults::default();
        OfxDefaults {
            bank_id: self.bank_id.clone().unwrap_or(base.bank_id),
            account_type: self.account_type.clone().unwrap_or(base.account_type),
            currency: self.currency.clone().unwrap_or(base.currency),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout carries the OFX document; logs go to stderr only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, out: impl Write) -> Result<()> {
    let statement = parse_busey_csv(&cli.csv)
        .with_context(|| format!("parsing {}", cli.csv.display()))?;

    write_statement(&statement, &cli.ofx_defaults(), out).context("writing OFX document")?;

    info!(
        transactions = statement.len(),
        path = %cli.csv.display(),
        "wrote OFX statement"
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    run(&cli, std::io::stdout().lock())
}
