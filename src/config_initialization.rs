//! Configuration initialization and hierarchy management

use tracing::info;

use crate::adapters::{ClipConfig, EnvPathAdapter, TomlConfigAdapter};
use crate::cli::Cli;
use crate::error::TrimResult;

/// Environment variable overriding `ffmpeg_path`
pub const ENV_FFMPEG: &str = "TRIMCLIP_FFMPEG";
/// Environment variable overriding `overwrite`
pub const ENV_OVERWRITE: &str = "TRIMCLIP_OVERWRITE";
/// Environment variable overriding `log_level`
pub const ENV_LOG_LEVEL: &str = "TRIMCLIP_LOG_LEVEL";

/// Build the configuration following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration(cli: &Cli) -> TrimResult<ClipConfig> {
    let mut config = TomlConfigAdapter::load_or_default(cli.config.as_deref())?;
    apply_environment_overrides(&mut config)?;
    apply_cli_overrides(&mut config, cli);
    config.validate()?;
    Ok(config)
}

/// Override file values with environment variables
pub fn apply_environment_overrides(config: &mut ClipConfig) -> TrimResult<()> {
    if let Some(path) = EnvPathAdapter::get_env(ENV_FFMPEG)? {
        info!("Environment override: ffmpeg_path = {}", path);
        config.ffmpeg_path = path.into();
    }
    if let Some(overwrite) = EnvPathAdapter::get_env_flag(ENV_OVERWRITE)? {
        info!("Environment override: overwrite = {}", overwrite);
        config.overwrite = overwrite;
    }
    if let Some(level) = EnvPathAdapter::get_env(ENV_LOG_LEVEL)? {
        config.log_level = level;
    }
    Ok(())
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut ClipConfig, cli: &Cli) {
    if let Some(path) = &cli.ffmpeg {
        config.ffmpeg_path = path.clone();
    }
    if cli.overwrite {
        config.overwrite = true;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if cli.json_logs {
        config.json_logs = true;
    }
}
