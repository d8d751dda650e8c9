use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use advisor::cli::Menu;
use advisor::config::Config;
use advisor::interview::{RandomSource, RngSource};
use advisor::Advisor;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so the menu owns stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting career advisor v{}", env!("CARGO_PKG_VERSION"));

    let rng: Box<dyn RandomSource> = match config.seed {
        Some(seed) => {
            info!("Using seeded random source ({seed})");
            Box::new(RngSource::seeded(seed))
        }
        None => Box::new(RngSource::from_entropy()),
    };

    let advisor = Advisor::builtin();
    info!(
        "Catalog loaded: {} roles, top-{} recommendations",
        advisor.list_roles().len(),
        config.top_n
    );

    let stdin = io::stdin();
    let mut menu = Menu::new(advisor, config, rng, stdin.lock(), io::stdout());
    menu.run()
}
