use std::path::Path;

use cirrus_core::ProcessEnv;
use tracing::info;

use cirrus_cli::app;
use cirrus_cli::config::AppConfig;

pub fn resources(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path)?;
    let stack = app::assemble(&config, &ProcessEnv::capture());
    info!("Assembled stack {}", stack.name());

    println!("stack: {}", stack.name());
    for resource in stack.resources() {
        println!("  {:<10} {}", resource.kind(), resource.name());
    }
    for (name, output) in stack.outputs() {
        println!("  {:<10} {} = {}", "output", name, output.value);
    }

    Ok(())
}
