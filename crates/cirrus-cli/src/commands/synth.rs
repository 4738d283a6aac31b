use std::path::Path;

use cirrus_core::ProcessEnv;
use tracing::info;

use cirrus_cli::app;
use cirrus_cli::config::AppConfig;

pub fn synth(config_path: Option<&Path>, output: Option<&Path>) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path)?;
    let stack = app::assemble(&config, &ProcessEnv::capture());
    info!(
        "Assembled stack {} with {} resources",
        stack.name(),
        stack.resources().len()
    );
    let json = stack.to_json()?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)?;
            println!("✓ Synthesized {} to {}", stack.name(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
