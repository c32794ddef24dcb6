use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "gradebook", bin_name = "gradebook", version = get_version())]
#[command(about = "Interactive in-memory student record manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Debug-level logging to stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable ANSI styling
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Override the configuration directory
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive menu (the default)
    #[command(display_order = 1)]
    Menu,

    /// Get or set configuration
    #[command(display_order = 2)]
    Config {
        /// Configuration key (color, bar-glyph, banner)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_command_means_menu() {
        let cli = Cli::try_parse_from(["gradebook"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.verbose);
        assert!(!cli.no_color);
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["gradebook", "menu", "--no-color", "--config-dir", "/tmp/x", "-v"])
                .unwrap();
        assert_eq!(cli.command, Some(Commands::Menu));
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn parses_config_key_and_value() {
        let cli = Cli::try_parse_from(["gradebook", "config", "banner", "false"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                key: Some("banner".into()),
                value: Some("false".into()),
            })
        );
    }

    #[test]
    fn version_starts_with_package_version() {
        assert!(get_version().starts_with(env!("CARGO_PKG_VERSION")));
    }
}
