use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "cart")]
#[command(about = "Interactive shopping cart in the terminal")]
#[command(version = "0.1.0")]
pub struct Args {
    /// JSON catalog file; the built-in juice catalog is used when omitted
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Quantity each catalog product starts with
    #[arg(short = 'q', long)]
    pub initial_quantity: Option<i64>,

    /// Start with an empty cart
    #[arg(long)]
    pub no_seed: bool,
}
