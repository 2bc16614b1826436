//! pdfprops - Extract PDF document properties into a report.

#[path = "../cli/extract.rs"]
mod cli;
#[path = "../cli/logging.rs"]
mod logging;

use clap::Parser;
use std::process;

use crate::cli::Cli;
use pdfprop::error::PdfPropError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), PdfPropError> {
    let config = cli.to_config()?;
    log::debug!(
        "{} v{}: reading {}",
        pdfprop::NAME,
        pdfprop::VERSION,
        config.input.display()
    );

    pdfprop::extract(&config).await?;
    Ok(())
}
