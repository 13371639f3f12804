use clap::Parser;
use std::path::PathBuf;

/// Terminal typing trainer. Type the quote, beat your best time.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the quotes JSON file.
    #[arg(long, default_value = "quotes.json")]
    pub quotes: PathBuf,

    /// ID of the quote to type. A random quote is picked when omitted.
    #[arg(long)]
    pub id: Option<usize>,
}
