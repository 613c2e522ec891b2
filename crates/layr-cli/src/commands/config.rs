//! `layr config`: read and write configuration values.

use std::path::Path;

use clap::ValueEnum;
use layr_core::domain::DatabaseKind;

use crate::{
    cli::{ConfigCommands, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Keys accepted by `get` and `set`.
const KEYS: [&str; 3] = ["defaults.database", "output.no_color", "output.format"];

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = AppConfig::resolve_path(global.config.as_deref());

    match cmd {
        ConfigCommands::Get { key } => {
            output.print(&get_config_value(&config, &key)?)?;
        }

        ConfigCommands::Set { key, value } => {
            set_config_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key '{key}' (known: {})", KEYS.join(", ")),
        source: None,
    }
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.database" => Ok(config.defaults.database.clone()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(unknown_key(key)),
    }
}

/// Validate `value` for `key` and convert it to its TOML form.
fn parse_value(key: &str, value: &str) -> CliResult<toml::Value> {
    match key {
        "defaults.database" => {
            // Strict here: a typo in the config file would otherwise fall
            // back silently on every `layr new`.
            let database: DatabaseKind = value.parse().map_err(|e| CliError::InvalidInput {
                message: format!("{e}"),
            })?;
            Ok(toml::Value::String(database.as_str().to_owned()))
        }
        "output.no_color" => value
            .parse::<bool>()
            .map(toml::Value::Boolean)
            .map_err(|_| CliError::InvalidInput {
                message: format!("output.no_color must be true or false, got '{value}'"),
            }),
        "output.format" => OutputFormat::from_str(value, true)
            .map(|_| toml::Value::String(value.to_ascii_lowercase()))
            .map_err(|_| CliError::InvalidInput {
                message: format!("output.format must be auto, human, plain or json, got '{value}'"),
            }),
        _ => Err(unknown_key(key)),
    }
}

/// Update one key in the config file, creating the file if needed. Other
/// keys and sections in the file are preserved.
fn set_config_value(path: &Path, key: &str, value: &str) -> CliResult<()> {
    let parsed = parse_value(key, value)?;
    let (section, field) = key.split_once('.').ok_or_else(|| unknown_key(key))?;

    let mut table = if path.exists() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read config '{}'", path.display()))?;
        toml::from_str::<toml::Table>(&text).map_err(|e| CliError::ConfigError {
            message: format!("Failed to parse '{}': {e}", path.display()),
            source: Some(Box::new(e)),
        })?
    } else {
        toml::Table::new()
    };

    let entry = table
        .entry(section)
        .or_insert(toml::Value::Table(toml::Table::new()));
    let Some(section_table) = entry.as_table_mut() else {
        return Err(CliError::ConfigError {
            message: format!("'{section}' in '{}' is not a table", path.display()),
            source: None,
        });
    };
    section_table.insert(field.to_owned(), parsed);

    let text = toml::to_string_pretty(&table).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.database").unwrap(), "postgres");
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "auto");
    }

    #[test]
    fn get_unknown_key_is_error() {
        assert!(matches!(
            get_config_value(&AppConfig::default(), "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn set_database_is_strict_and_canonical() {
        assert_eq!(
            parse_value("defaults.database", "PostgreSQL").unwrap(),
            toml::Value::String("postgres".into())
        );
        assert!(matches!(
            parse_value("defaults.database", "oracle"),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn set_rejects_bad_bool_and_format() {
        assert!(parse_value("output.no_color", "maybe").is_err());
        assert!(parse_value("output.format", "xml").is_err());
        assert_eq!(
            parse_value("output.format", "JSON").unwrap(),
            toml::Value::String("json".into())
        );
    }

    #[test]
    fn set_creates_file_and_preserves_other_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/layr.toml");

        set_config_value(&path, "defaults.database", "mysql").unwrap();
        set_config_value(&path, "output.no_color", "true").unwrap();

        let cfg = AppConfig::load(Some(&path), false).unwrap();
        assert_eq!(cfg.defaults.database, "mysql");
        assert!(cfg.output.no_color);
        assert_eq!(cfg.output.format, "auto");
    }
}
