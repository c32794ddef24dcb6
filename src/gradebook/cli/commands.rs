//! # CLI Layer
//!
//! This module is **one possible UI client** for gradebook; it is not the application
//! itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Installs the tracing subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API, configuration and renderer
//! - `handle_*()`: Per-command handlers that call the API and print the outcome
//!
//! Menu behavior is tested through scripted sessions in `menu.rs`; this module only
//! wires real stdin/stdout into them.

use super::menu::Menu;
use super::prompt::Console;
use super::render::Renderer;
use super::setup::{Cli, Commands};
use clap::Parser;
use gradebook::api::{ConfigAction, GradebookApi};
use gradebook::config::{resolve_config_dir, ColorChoice, GradebookConfig};
use gradebook::error::Result;
use gradebook::logging::init_logging;
use gradebook::store::memory::InMemoryStore;
use std::io::Write;

struct AppContext {
    api: GradebookApi<InMemoryStore>,
    config: GradebookConfig,
    renderer: Renderer,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Menu) | None => handle_menu(ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
    let config = GradebookConfig::load(&config_dir)?;
    tracing::debug!(config_dir = %config_dir.display(), ?config, "context initialized");

    let use_color = resolve_color(cli.no_color, config.color, console::colors_enabled());
    let renderer = Renderer::new(use_color, config.bar_glyph.clone());
    let api = GradebookApi::new(InMemoryStore::new(), config_dir);

    Ok(AppContext {
        api,
        config,
        renderer,
    })
}

/// `--no-color` wins over the config setting; `auto` defers to the terminal.
fn resolve_color(no_color: bool, choice: ColorChoice, terminal_supports: bool) -> bool {
    if no_color {
        return false;
    }
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => terminal_supports,
    }
}

fn handle_menu(ctx: AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock(), ctx.renderer);

    let mut menu = Menu::new(ctx.api, console, ctx.config.banner);
    menu.run()?;
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;

    let mut lines = Vec::new();
    if show_all {
        if let Some(config) = &result.config {
            lines.extend(
                config
                    .list_all()
                    .into_iter()
                    .map(|(k, v)| format!("{} = {}", k, v)),
            );
        }
    }

    let mut stdout = std::io::stdout().lock();
    if show_all {
        writeln!(
            stdout,
            "{}",
            ctx.renderer
                .text_list(&lines, "No configuration values.")
        )?;
    }
    let messages = ctx.renderer.messages(&result.messages);
    if !messages.is_empty() {
        writeln!(stdout, "{}", messages)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_flag_overrides_config() {
        assert!(!resolve_color(true, ColorChoice::Always, true));
    }

    #[test]
    fn explicit_choices_ignore_terminal() {
        assert!(resolve_color(false, ColorChoice::Always, false));
        assert!(!resolve_color(false, ColorChoice::Never, true));
    }

    #[test]
    fn auto_follows_terminal() {
        assert!(resolve_color(false, ColorChoice::Auto, true));
        assert!(!resolve_color(false, ColorChoice::Auto, false));
    }
}
