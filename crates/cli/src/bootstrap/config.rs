use linktracer_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    debug!(
        config_file = config_path.unwrap_or("default"),
        name_servers = ?config.analyzer.name_servers,
        timeout_ms = config.analyzer.timeout_ms,
        cache_enabled = config.analyzer.cache_enabled,
        "Configuration loaded"
    );

    Ok(config)
}
