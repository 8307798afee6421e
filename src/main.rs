//! Jotter - A terminal diary composer with live markdown preview.
//!
//! # Usage
//!
//! ```bash
//! jotter
//! jotter --author "Ada"
//! jotter --no-sidebar
//! ```

use anyhow::{Context, Result};
use clap::Parser;

use jotter::app::App;
use jotter::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use jotter::entries::PastEntries;
use jotter::identity::Identity;

/// A terminal diary composer with live markdown preview
#[derive(Parser, Debug)]
#[command(name = "jotter", version, about, long_about = None)]
struct Cli {
    /// Display name shown in the greeting (defaults to $USER)
    #[arg(short, long)]
    author: Option<String>,

    /// Past-entry title for the sidebar (repeatable)
    #[arg(long = "entry", value_name = "TITLE")]
    entries: Vec<String>,

    /// Start with the past-entries sidebar visible
    #[arg(long)]
    sidebar: bool,

    /// Hide the past-entries sidebar
    #[arg(long)]
    no_sidebar: bool,

    /// Save current command-line flags as defaults in .jotterrc
    #[arg(long)]
    save: bool,

    /// Clear saved defaults in .jotterrc
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let identity = Identity::resolve(effective.author.as_deref());
    let entries = if cli.entries.is_empty() {
        PastEntries::placeholder()
    } else {
        PastEntries::from_titles(cli.entries)
    };

    let mut app = App::new(identity)
        .with_entries(entries)
        .with_sidebar_visible(effective.sidebar_visible());

    app.run().context("Application error")
}
