//! Cooking skill inspector binary.
//!
//! Registers the cooking skill from its data directory and prints what a
//! player would see: professions per unlock level, recipes per level, and the
//! level-up and hover texts under the current configuration.
//!
//! # Examples
//!
//! ```bash
//! # Whole progression from the bundled data
//! cargo run -p cooking-client
//!
//! # One level, French strings, verbose registration
//! COOKING_LOCALE=fr COOKING_DEBUG=1 RUST_LOG=debug cargo run -p cooking-client -- 5
//! ```

mod report;

use anyhow::{Context, Result};
use cooking_bootstrap::{BootstrapConfig, SkillBuilder};
use cooking_core::SkillDefinition;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let level = std::env::args()
        .nth(1)
        .map(|arg| {
            arg.parse::<u32>()
                .with_context(|| format!("Level must be a number, got '{arg}'"))
        })
        .transpose()?;

    let config = BootstrapConfig::from_env();
    tracing::info!("Data directory: {}", config.resolve_data_dir().display());

    let setup = SkillBuilder::new(config).build()?;
    let env = setup.oracles.env();

    let levels = match level {
        Some(level) => level..=level,
        None => 1..=SkillDefinition::MAX_LEVEL,
    };

    print!("{}", report::render(&setup.skill, &env, levels));
    Ok(())
}
