//! # CLI Layer
//!
//! One possible host for deckid. This is the only code that touches the
//! terminal, reads environment variables, or installs a tracing subscriber.
//!
//! - `run()`: parses arguments, builds the context, dispatches
//! - `init_context()`: resolves the data directory and loads config
//! - `handle_*()`: one per command, calling the API and printing the result
//!
//! Every command except `init` and `config` first fires the session-start hook,
//! which reconciles labels when `reconcile-on-start` is enabled.

use super::print::{print_config, print_entries, print_groups, print_messages};
use super::setup::{Cli, Commands, GroupCommands};
use clap::Parser;
use deckid::api::{ConfigAction, DeckIdApi, DeckIdPaths, OnSessionStart};
use deckid::config::DeckIdConfig;
use deckid::error::{DeckIdError, Result};
use deckid::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Overrides the data directory (store and config).
const HOME_ENV: &str = "DECKID_HOME";

struct AppContext {
    api: DeckIdApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    if !matches!(
        cli.command,
        Some(Commands::Init) | Some(Commands::Config { .. })
    ) {
        let start = ctx.api.on_session_start();
        print_messages(&start.messages);
    }

    match cli.command {
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Group(cmd)) => match cmd {
            GroupCommands::Add { name, parent } => {
                handle_group_add(&mut ctx, &name, parent.as_deref())
            }
            GroupCommands::List => handle_group_list(&ctx),
        },
        Some(Commands::Add {
            group,
            front,
            no_label,
        }) => handle_add(&mut ctx, &group, front, !no_label),
        Some(Commands::List { group }) => handle_list(&ctx, group.as_deref()),
        Some(Commands::Up { position, group }) => handle_up(&mut ctx, position, group.as_deref()),
        Some(Commands::Down { position, group }) => {
            handle_down(&mut ctx, position, group.as_deref())
        }
        Some(Commands::Sweep { group }) => handle_sweep(&mut ctx, &group),
        Some(Commands::Reconcile) => handle_reconcile(&mut ctx),
        Some(Commands::Renumber { group }) => handle_renumber(&mut ctx, group.as_deref()),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

/// Logs go to stderr. `-v` lowers the default level to debug; `RUST_LOG` wins over both.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "deckid", "deckid")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DeckIdError::Api("Could not determine data directory".into()))
}

fn init_context() -> Result<AppContext> {
    let root = data_dir()?;
    debug!(root = %root.display(), "using data directory");

    let config = DeckIdConfig::load(&root).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        DeckIdConfig::default()
    });
    let store = FileStore::new(root.clone());
    let api = DeckIdApi::new(store, config, DeckIdPaths { root });

    Ok(AppContext { api })
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_group_add(ctx: &mut AppContext, name: &str, parent: Option<&str>) -> Result<()> {
    let result = ctx.api.add_group(name, parent)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_group_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_groups()?;
    print_groups(&result.groups);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, group: &str, front: String, labeled: bool) -> Result<()> {
    let result = ctx.api.add_record(group, front, labeled)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, group: Option<&str>) -> Result<()> {
    let result = ctx.api.list(group)?;
    print_entries(&result.listed_entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_up(ctx: &mut AppContext, position: usize, group: Option<&str>) -> Result<()> {
    let result = ctx.api.move_up(group, position)?;
    print_messages(&result.messages);
    print_entries(&result.listed_entries);
    Ok(())
}

fn handle_down(ctx: &mut AppContext, position: usize, group: Option<&str>) -> Result<()> {
    let result = ctx.api.move_down(group, position)?;
    print_messages(&result.messages);
    print_entries(&result.listed_entries);
    Ok(())
}

fn handle_sweep(ctx: &mut AppContext, group: &str) -> Result<()> {
    let result = ctx.api.sweep_group(group)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reconcile(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.reconcile()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_renumber(ctx: &mut AppContext, group: Option<&str>) -> Result<()> {
    let result = ctx.api.renumber_view(group)?;
    print_messages(&result.messages);
    print_entries(&result.listed_entries);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config_action(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
