use clap::Parser;
use color_eyre::eyre::{bail, Result, WrapErr};
use crossterm::tty::IsTty;
use typetrial::{cli::Cli, trainer};
use typetrial_core::QuoteStore;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if !std::io::stdin().is_tty() || !std::io::stdout().is_tty() {
        bail!("not running in a terminal");
    }

    let mut store = QuoteStore::load(&cli.quotes)
        .wrap_err_with(|| format!("could not load quotes from {}", cli.quotes.display()))?;

    if store.is_empty() {
        bail!("no quotes found in {}", cli.quotes.display());
    }

    trainer::run(&mut store, &cli.quotes, cli.id)
}
