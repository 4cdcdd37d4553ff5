use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediaindex_lib::{load_settings, settings_path};

use crate::CliError;

/// Show the effective settings (file values merged over defaults).
pub(crate) fn run_config_show(config: Option<&Path>) -> Result<(), CliError> {
    let path = config.map(Path::to_path_buf).unwrap_or_else(settings_path);
    let settings = load_settings(config)?;

    log::info!(
        "{} {}",
        "Settings file:".if_supports_color(Stdout, |t| t.bold()),
        path.display(),
    );
    if !path.exists() {
        log::info!(
            "{}",
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let extract = settings.extract_options();
    log::info!("{}", "[extract]".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  record_element = {}", extract.record_element);
    log::info!("  field_element  = {}", extract.field_element);
    log::info!("  name_attribute = {}", extract.name_attribute);
    log::info!("  field          = {}", extract.field);

    log::info!("{}", "[collapse]".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  mode = {}", settings.collapse_mode());

    log::info!("{}", "[scan]".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  order = {}", settings.scan_order());

    log::info!("{}", "[compare]".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  excluded_extensions = {}",
        settings.compare_options().excluded_extensions.join(" ")
    );
    log::info!("  display_limit = {}", settings.display_limit());

    if path.exists() {
        let raw = settings
            .to_toml_string()
            .map_err(|e| CliError::config(e.to_string()))?;
        log::debug!("Parsed settings file:\n{raw}");
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(config: Option<&Path>) -> Result<(), CliError> {
    let path = config.map(Path::to_path_buf).unwrap_or_else(settings_path);
    log::info!("{}", path.display());
    Ok(())
}
