//! # CLI Behavior
//!
//! This is **one possible UI client** for gradebook, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`gradebook`].
//!
//! ### Naked Execution (`gradebook`)
//!
//! Running `gradebook` with no arguments starts the menu, same as `gradebook menu`.
//! Records live only for the session; exiting the menu (or closing stdin) discards
//! them.
//!
//! ### Configuration (`gradebook config`)
//!
//! - `gradebook config`: show every setting
//! - `gradebook config color`: show one setting
//! - `gradebook config color never`: change and persist a setting
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and dispatch
//! - `menu`: The interactive session and its per-choice handlers
//! - `prompt`: Line input with per-subject mark re-prompting
//! - `render`: Screen layout through templates
//! - `setup`: Argument parsing via clap
//! - `styles`: The named style theme
//! - `templates`: Screen templates

mod commands;
mod menu;
mod prompt;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
