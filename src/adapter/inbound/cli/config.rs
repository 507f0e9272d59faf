//! Handlers for the `config` command group, and configuration loading for
//! every other command.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use miette::IntoDiagnostic;

use crate::adapter::inbound::cli::diagnostic::ConfigDiagnostic;
use crate::adapter::inbound::cli::output::Output;
use crate::adapter::inbound::cli::paths;
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::settings::{Config, DATABASE_ENV};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// The file a command reads: `--config` when given, else the default.
#[must_use]
pub fn resolve(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(paths::default_config, Path::to_path_buf)
}

/// Load the effective configuration.
///
/// A missing file is only acceptable at the default location, where it
/// means "use defaults". Errors inside the file come back as a
/// [`ConfigDiagnostic`] pointing at the problem.
///
/// # Errors
/// Returns an error if the file is missing (when named explicitly),
/// unreadable, malformed or invalid.
pub fn load(explicit: Option<&Path>) -> miette::Result<Config> {
    let path = resolve(explicit);
    if explicit.is_none() && !path.exists() {
        return Config::load_or_default(&path).into_diagnostic();
    }
    let text = fs::read_to_string(&path)
        .map_err(|e| Error::from(ConfigError::ReadFile(e)))
        .into_diagnostic()?;
    parse(&path, &text)
}

fn parse(path: &Path, text: &str) -> miette::Result<Config> {
    match Config::parse_toml(text) {
        Err(Error::Config(err)) => match ConfigDiagnostic::locate(path, text, &err) {
            Some(diagnostic) => Err(diagnostic.into()),
            None => Err::<Config, _>(Error::Config(err)).into_diagnostic(),
        },
        other => other.into_diagnostic(),
    }
}

/// Execute `config init`.
pub fn execute_init<W: Write>(path: &Path, force: bool, out: &mut Output<W>) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    out.section("Config Initialized")?;
    out.success("Created configuration file")?;
    out.field("Path", path.display())?;
    out.section("Next Steps")?;
    out.note(&format!("1. Edit {} with your settings", path.display()))?;
    out.note(&format!(
        "2. Run: northwind -c {} config validate",
        path.display()
    ))?;
    out.note(&format!("3. Run: northwind -c {} db seed", path.display()))?;
    out.note(&format!("4. Run: northwind -c {}", path.display()))?;
    Ok(())
}

/// Execute `config show`.
pub fn execute_show<W: Write>(config: &Config, out: &mut Output<W>) -> Result<()> {
    if out.is_json() {
        return out.record("config", config);
    }

    out.section("Effective Configuration")?;
    out.field("Database", &config.database)?;
    if std::env::var_os(DATABASE_ENV).is_some() {
        out.note(&format!("database taken from {DATABASE_ENV}"))?;
    }

    out.section("Logging")?;
    out.field("Level", &config.logging.level)?;
    out.field("Format", &config.logging.format)?;
    out.field(
        "Sink",
        config.logging.file.as_deref().unwrap_or("stderr"),
    )?;

    out.section("Console")?;
    out.field("Clear screen", config.console.clear_screen)?;

    out.section("Workflow")?;
    out.field(
        "Unique on edit",
        config.workflow.check_unique_on_edit,
    )?;

    out.section("As TOML")?;
    out.lines(&config.to_toml()?)
}

/// Execute `config validate`.
pub fn execute_validate<W: Write>(
    explicit: Option<&Path>,
    out: &mut Output<W>,
) -> miette::Result<()> {
    let path = resolve(explicit);
    let text = fs::read_to_string(&path)
        .map_err(|e| Error::from(ConfigError::ReadFile(e)))
        .into_diagnostic()?;
    parse(&path, &text)?;

    out.section("Config Validation").into_diagnostic()?;
    out.field("Path", path.display()).into_diagnostic()?;
    out.success("Config file is valid").into_diagnostic()?;
    Ok(())
}
