//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the tracing subscriber
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Logging**: Route library `tracing` events to stderr, filtered by
//!    `-v` / `-q` / `LEARNSHELF_LOG`
//! 3. **Context Setup**: Load configuration and open the store
//! 4. **Dispatch**: Turn flags into drafts and filter selections, call the API
//! 5. **Output Formatting**: Hand results to `render`, or print JSON

use anyhow::{bail, Context, Result};
use clap::Parser;
use learnshelf::api::ShelfApi;
use learnshelf::draft::{parse_link, ResourceDraft};
use learnshelf::filter::{parse_constraint, FilterSelection};
use learnshelf::init::{default_config_path, initialize, ShelfContext};
use learnshelf::model::{Level, Priority, Progress, Status};
use learnshelf::store::DataStore;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use super::render;
use super::setup::{
    build_command, CategoryCommands, Cli, Commands, CompletionShell, ConfigCommands, ListArgs,
    ResourceFields,
};

pub fn run() -> Result<()> {
    let Cli {
        command,
        verbose,
        quiet,
        user,
        config,
    } = Cli::parse();

    init_tracing(quiet, verbose)?;

    // Naked `learnshelf` lists.
    let command = command.unwrap_or_else(|| Commands::List(ListArgs::default()));
    debug!(?command, "dispatching");

    match command {
        Commands::Completions { shell } => {
            print_completions(shell);
            Ok(())
        }
        Commands::Config {
            action: Some(ConfigCommands::Gen),
        } => {
            print!("{}", learnshelf::config::template());
            Ok(())
        }
        Commands::Config { action: None } => {
            let (ctx, config_path) = open(config, user)?;
            print!(
                "{}",
                render::render_config(&ctx.config, &config_path, &ctx.data_dir)
            );
            Ok(())
        }
        Commands::Add { title, fields } => handle_add(&mut open(config, user)?.0, title, fields),
        Commands::List(args) => handle_list(&open(config, user)?.0, args),
        Commands::View { selectors, json } => handle_view(&open(config, user)?.0, &selectors, json),
        Commands::Edit {
            selector,
            title,
            clear_links,
            fields,
        } => handle_edit(
            &mut open(config, user)?.0,
            &selector,
            title,
            clear_links,
            fields,
        ),
        Commands::Progress {
            selectors,
            set,
            status,
        } => handle_progress(
            &mut open(config, user)?.0,
            &selectors,
            set,
            status.map(Status::from),
        ),
        Commands::Delete { selectors } => handle_delete(&mut open(config, user)?.0, &selectors),
        Commands::Stats { json } => handle_stats(&open(config, user)?.0, json),
        Commands::Categories { action } => handle_categories(&mut open(config, user)?.0, action),
    }
}

/// Logs go to stderr so stdout stays clean for output and `--json`.
fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LEARNSHELF_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn open(config: Option<PathBuf>, user: Option<String>) -> Result<(ShelfContext, PathBuf)> {
    let config_path = match config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let ctx = initialize(Some(config_path.clone()), user).with_context(|| {
        format!(
            "failed to load configuration from {}",
            config_path.display()
        )
    })?;
    Ok((ctx, config_path))
}

fn print_completions(shell: CompletionShell) {
    let mut cmd = build_command();
    clap_complete::generate(
        clap_complete::Shell::from(shell),
        &mut cmd,
        "learnshelf",
        &mut std::io::stdout(),
    );
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Copies every flag the user passed onto `draft`, leaving the rest alone.
fn apply_fields<S: DataStore>(
    api: &ShelfApi<S>,
    draft: &mut ResourceDraft,
    fields: ResourceFields,
) -> Result<()> {
    if let Some(description) = fields.description {
        draft.description = Some(description);
    }
    if let Some(raw) = fields.category {
        let raw = raw.trim();
        draft.category_id = if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(api.resolve_category(raw)?)
        };
    }
    if let Some(level) = fields.level {
        draft.level = Level::from(level);
    }
    if let Some(priority) = fields.priority {
        draft.priority = Priority::from(priority);
    }
    if let Some(status) = fields.status {
        draft.status = Status::from(status);
    }
    if let Some(progress) = fields.progress {
        draft.progress = Progress::new(progress)?;
    }
    draft
        .links
        .extend(fields.links.iter().map(|raw| parse_link(raw)));
    if let Some(favorite) = fields.favorite {
        draft.is_favorite = favorite;
    }
    if let Some(public) = fields.public {
        draft.is_public = public;
    }
    Ok(())
}

/// Builds the filter selection for `list`; "all" or an empty value means unset.
fn build_selection<S: DataStore>(api: &ShelfApi<S>, args: &ListArgs) -> Result<FilterSelection> {
    let category = match args.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) if raw.eq_ignore_ascii_case("all") => None,
        Some(raw) => Some(api.resolve_category(raw)?),
    };

    Ok(FilterSelection {
        search: args.search.clone().unwrap_or_default(),
        category,
        level: parse_constraint(args.level.as_deref().unwrap_or(""))?,
        priority: parse_constraint(args.priority.as_deref().unwrap_or(""))?,
        status: parse_constraint(args.status.as_deref().unwrap_or(""))?,
    })
}

fn handle_add(ctx: &mut ShelfContext, title: Vec<String>, fields: ResourceFields) -> Result<()> {
    let mut draft = ResourceDraft::new(title.join(" "));
    draft.level = ctx.config.level()?;
    draft.priority = ctx.config.priority()?;
    apply_fields(&ctx.api, &mut draft, fields)?;

    let result = ctx.api.create_resource(draft)?;
    print!("{}", render::render_messages(&result.messages));
    Ok(())
}

fn handle_list(ctx: &ShelfContext, args: ListArgs) -> Result<()> {
    let selection = build_selection(&ctx.api, &args)?;
    let result = ctx.api.get_resources(&selection)?;

    if args.json {
        return print_json(&serde_json::json!({
            "stats": result.stats,
            "resources": result.listed_resources,
        }));
    }
    print!("{}", render::render_list(&result));
    Ok(())
}

fn handle_view(ctx: &ShelfContext, selectors: &[String], json: bool) -> Result<()> {
    let result = ctx.api.view_resources(selectors)?;
    if json {
        return print_json(&result.listed_resources);
    }
    print!("{}", render::render_full(&result));
    Ok(())
}

fn handle_edit(
    ctx: &mut ShelfContext,
    selector: &str,
    title: Option<String>,
    clear_links: bool,
    fields: ResourceFields,
) -> Result<()> {
    let current = ctx.api.view_resources(&[selector])?;
    let Some(existing) = current.listed_resources.first() else {
        bail!("Nothing matches {}", selector);
    };

    let mut draft = ResourceDraft::from_resource(&existing.resource);
    if let Some(title) = title {
        draft.title = title;
    }
    if clear_links {
        draft.links.clear();
    }
    apply_fields(&ctx.api, &mut draft, fields)?;

    let result = ctx.api.update_resource(selector, draft)?;
    print!("{}", render::render_messages(&result.messages));
    Ok(())
}

fn handle_progress(
    ctx: &mut ShelfContext,
    selectors: &[String],
    set: Option<u8>,
    status: Option<Status>,
) -> Result<()> {
    let progress = set.map(Progress::new).transpose()?;
    let result = ctx.api.set_progress(selectors, progress, status)?;
    print!("{}", render::render_messages(&result.messages));
    Ok(())
}

fn handle_delete(ctx: &mut ShelfContext, selectors: &[String]) -> Result<()> {
    let result = ctx.api.delete_resources(selectors)?;
    print!("{}", render::render_messages(&result.messages));
    Ok(())
}

fn handle_stats(ctx: &ShelfContext, json: bool) -> Result<()> {
    let result = ctx.api.stats()?;
    let stats = result.stats.unwrap_or_default();
    if json {
        return print_json(&stats);
    }
    print!("{}", render::render_stats(&stats));
    Ok(())
}

fn handle_categories(ctx: &mut ShelfContext, action: Option<CategoryCommands>) -> Result<()> {
    let result = match action {
        None => ctx.api.list_categories()?,
        Some(CategoryCommands::Add {
            name,
            description,
            color,
        }) => ctx.api.create_category(&name, description, color)?,
    };
    print!("{}", render::render_categories(&result));
    Ok(())
}
