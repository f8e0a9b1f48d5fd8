//! scanner-qr command-line entrypoint

use clap::Parser;
use clap::error::ErrorKind;
use scanner_qr::{Domain, Result, ScannerQr, ScannerQrConfig, logging, output};
use std::path::PathBuf;
use std::process;
use tracing::info;

const PROGRAM: &str = "scanner-qr";

#[derive(Parser, Debug)]
#[command(
    name = "scanner-qr",
    version,
    about = "Generate a printable QR code for a shop's ticket-scanner page"
)]
struct Cli {
    /// Shop domain the scanner page is served from (e.g. example.de)
    #[arg(allow_hyphen_values = true)]
    domain: String,

    /// Optional configuration file (toml/yaml). Defaults to scanner-qr.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the result as JSON instead of human-readable lines
    #[arg(long)]
    json: bool,

    /// Decode the written image and fail unless it reads back as the scanner URL
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                for line in output::usage_lines(PROGRAM) {
                    println!("{line}");
                }
                process::exit(1);
            }
        },
    };

    let config = ScannerQrConfig::load(cli.config.as_deref())?;
    let _log_guard = logging::init(&config.logging)?;

    let domain = Domain::new(cli.domain)?;
    info!(%domain, verify = cli.verify, "Generating scanner QR code");

    let report = ScannerQr::new().verify(cli.verify).generate(&domain)?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::report_value(&report))?
        );
    } else {
        for line in output::human_lines(&report) {
            println!("{line}");
        }
    }

    Ok(())
}
