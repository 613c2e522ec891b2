//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "layr",
    bin_name = "layr",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Layered Go service scaffolding",
    long_about = "Layr generates Go web services laid out in clean-architecture \
                  layers: a project skeleton, full CRUD modules, or single components.",
    after_help = "EXAMPLES:\n\
        \x20 layr new shop mysql\n\
        \x20 cd shop && layr module order\n\
        \x20 layr generate usecase payment\n\
        \x20 layr completions bash > /usr/share/bash-completion/completions/layr",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        about = "Create a new project with a default module",
        after_help = "EXAMPLES:\n\
            \x20 layr new shop             # database from config (postgres)\n\
            \x20 layr new shop mysql\n\
            \x20 layr new shop --dry-run"
    )]
    New(NewArgs),

    /// Generate a single layer component in the current project.
    #[command(
        visible_alias = "g",
        about = "Generate a single component",
        after_help = "EXAMPLES:\n\
            \x20 layr generate controller order\n\
            \x20 layr g repository order\n\
            \x20 layr g usecase order --dry-run"
    )]
    Generate(GenerateArgs),

    /// Generate a full CRUD module in the current project.
    #[command(
        visible_alias = "m",
        about = "Generate a module (model, handler, repository, use-case)",
        after_help = "EXAMPLES:\n\
            \x20 layr module order\n\
            \x20 layr m product --output-format json"
    )]
    Module(ModuleArgs),

    /// Initialise a Layr configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 layr init                   # default location\n\
            \x20 layr -c ./layr.toml init    # explicit path\n\
            \x20 layr init --force           # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 layr completions bash > ~/.local/share/bash-completion/completions/layr\n\
            \x20 layr completions zsh  > ~/.zfunc/_layr\n\
            \x20 layr completions fish > ~/.config/fish/completions/layr.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Layr configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 layr config get defaults.database\n\
            \x20 layr config set defaults.database mysql\n\
            \x20 layr config list"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// Commands that create or edit the config file, so a `--config` path
    /// that does not exist yet is not an error for them.
    pub fn writes_config(&self) -> bool {
        matches!(
            self,
            Self::Init(_) | Self::Config(ConfigCommands::Set { .. } | ConfigCommands::Path)
        )
    }
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `layr new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name; also the Go module path. Creates `./<name>`.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Database driver: postgres or mysql. Unrecognised values fall back
    /// to postgres with a warning.
    #[arg(value_name = "DATABASE")]
    pub database: Option<String>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `layr generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Component kind: controller, repository or usecase (any case).
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// Entity name, e.g. `order`.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── module ────────────────────────────────────────────────────────────────────

/// Arguments for `layr module`.
#[derive(Debug, Args)]
pub struct ModuleArgs {
    /// Module (entity) name, e.g. `order`.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `layr init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `layr completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `layr config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.database`.
        key: String,
    },
    /// Set a configuration key in the config file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_with_database() {
        let cli = Cli::parse_from(["layr", "new", "shop", "mysql"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.name, "shop");
        assert_eq!(args.database.as_deref(), Some("mysql"));
        assert!(!args.dry_run);
    }

    #[test]
    fn database_is_optional() {
        let cli = Cli::parse_from(["layr", "new", "shop", "--dry-run"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert!(args.database.is_none());
        assert!(args.dry_run);
    }

    #[test]
    fn generate_alias() {
        let cli = Cli::parse_from(["layr", "g", "Controller", "order"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.kind, "Controller");
        assert_eq!(args.name, "order");
    }

    #[test]
    fn module_alias() {
        let cli = Cli::parse_from(["layr", "m", "order"]);
        assert!(matches!(cli.command, Commands::Module(_)));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["layr", "module", "order", "-vv", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn no_color_flag_takes_no_value() {
        let cli = Cli::parse_from(["layr", "--no-color", "module", "order"]);
        assert!(cli.global.no_color);
        let cli = Cli::parse_from(["layr", "module", "order"]);
        assert!(!cli.global.no_color || std::env::var_os("NO_COLOR").is_some());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["layr", "--quiet", "--verbose", "module", "order"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_name_is_usage_error() {
        assert!(Cli::try_parse_from(["layr", "generate", "controller"]).is_err());
    }

    #[test]
    fn only_init_and_config_set_tolerate_missing_config() {
        assert!(Cli::parse_from(["layr", "init"]).command.writes_config());
        assert!(Cli::parse_from(["layr", "config", "set", "a.b", "c"]).command.writes_config());
        assert!(!Cli::parse_from(["layr", "config", "get", "a.b"]).command.writes_config());
        assert!(!Cli::parse_from(["layr", "new", "shop"]).command.writes_config());
    }
}
