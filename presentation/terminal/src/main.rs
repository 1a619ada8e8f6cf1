use std::io;

use clap::Parser;
use dotenvy::dotenv;

mod config {
    pub mod app_config;
    pub mod args;
}
mod setup {
    pub mod dependency_injection;
    pub mod session;
}
mod view {
    pub mod command;
    pub mod confirm;
    pub mod error;
    pub mod likes;
    pub mod render;
}

use config::{app_config::AppConfig, args::Args};
use setup::{dependency_injection::DependencyContainer, session::Session};
use view::confirm::DialoguerConfirmer;

/// Terminal Entry Point
///
/// Loads configuration, builds the catalog and cart session, then hands
/// stdin/stdout to the interactive session.
fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration, CLI arguments override the environment
    let config = AppConfig::from_env()?.with_args(Args::parse())?;
    tracing::debug!(?config, "Configuration loaded");

    // 4. Wire dependencies and build the starting cart
    let container = DependencyContainer::new(&config)?;
    let cart = container.initial_cart(&config)?;

    // 5. Run the session
    let stdin = io::stdin();
    let mut session = Session::new(
        container,
        cart,
        Box::new(DialoguerConfirmer),
        stdin.lock(),
        io::stdout(),
    );
    session.run()?;

    let cart = session.into_cart();
    tracing::info!(
        total_items = cart.total_items(),
        total_price = cart.total_price(),
        "Cart session closed"
    );

    Ok(())
}
