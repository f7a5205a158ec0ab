//! siteshift CLI
//!
//! One-shot commands over the shared checklist: each invocation loads the
//! current map, applies at most one edit and pushes the whole map back.
//! Points at a running server by default; `--data` switches to a local
//! store file for single-user use.

use anyhow::{anyhow, Context};
use clap::{value_parser, Arg, ArgMatches, Command};
use siteshift_client::{
    display_path, load_checklist_urls, render_progress, status_icon, status_label, Checklist,
    ChecklistBackend, HttpBackend, LocalBackend, UserProfile,
};
use siteshift_model::{Status, UrlSettings};
use siteshift_store::{JsonFileStore, Store};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Command::new("siteshift")
        .version(siteshift_client::VERSION)
        .about("Collaborative checklist for migrating a fixed list of URLs")
        .arg_required_else_help(true)
        .arg(
            Arg::new("server")
                .long("server")
                .default_value("http://127.0.0.1:8080")
                .help("Base URL of the checklist server"),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .value_parser(value_parser!(PathBuf))
                .help("Operate on a local store file instead of a server"),
        )
        .arg(
            Arg::new("checklist")
                .long("checklist")
                .default_value("checklist.toml")
                .value_parser(value_parser!(PathBuf))
                .help("TOML file with the fixed urls list"),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .default_value(".siteshift/user.json")
                .value_parser(value_parser!(PathBuf))
                .help("Where the local user identity is kept"),
        )
        .subcommand(Command::new("list").about("Show every checklist URL with its status"))
        .subcommand(Command::new("progress").about("Show aggregate progress"))
        .subcommand(
            Command::new("status")
                .about("Set the status of a URL")
                .arg(Arg::new("url").required(true).help("Original URL"))
                .arg(
                    Arg::new("status")
                        .required(true)
                        .help("pending | inProgress | completed | questioned"),
                ),
        )
        .subcommand(
            Command::new("migrate")
                .about("Record the replacement URL for a page")
                .arg(Arg::new("url").required(true).help("Original URL"))
                .arg(
                    Arg::new("new-url")
                        .required(true)
                        .help("Replacement URL on the target site"),
                ),
        )
        .subcommand(
            Command::new("settings")
                .about("Show or update the source/target base URLs")
                .arg(Arg::new("source").long("source").help("New source base URL"))
                .arg(Arg::new("target").long("target").help("New target base URL")),
        )
        .subcommand(
            Command::new("user")
                .about("Show or set the local user")
                .arg(Arg::new("name").long("name").help("Display name to store")),
        );

    let matches = cli.get_matches();

    let backend = build_backend(&matches);
    let checklist_path = matches.get_one::<PathBuf>("checklist").unwrap().clone();
    let profile = UserProfile::new(matches.get_one::<PathBuf>("profile").unwrap().clone());

    match matches.subcommand() {
        Some(("list", _)) => {
            let urls = load_checklist_urls(&checklist_path)
                .with_context(|| format!("failed to load {}", checklist_path.display()))?;
            let mut checklist = Checklist::new(backend);
            checklist.load().await?;
            let user = profile.load()?;
            let source = checklist.settings().source.clone();

            println!("{}", render_progress(&checklist.progress(urls.len())));
            println!();

            for url in &urls {
                let item = checklist.entry_for(url);
                let migrated = match &item.migrated_url {
                    Some(new_url) => display_path(new_url, &source),
                    None => "(no new url set)".to_string(),
                };

                let mut line = format!(
                    "{} {:<12} {} -> {}",
                    status_icon(item.status),
                    status_label(item.status),
                    display_path(url, &source),
                    migrated
                );
                if item.needs_301 == Some(true) {
                    line.push_str("  [301]");
                }
                if let Some(assignee) = &item.assignee {
                    let shown = match &user {
                        Some(me) if me.id == *assignee => me.name.clone(),
                        _ => assignee.clone(),
                    };
                    line.push_str(&format!("  @{shown}"));
                }
                println!("{line}");
            }
        }
        Some(("progress", _)) => {
            let urls = load_checklist_urls(&checklist_path)
                .with_context(|| format!("failed to load {}", checklist_path.display()))?;
            let mut checklist = Checklist::new(backend);
            checklist.load().await?;
            println!("{}", render_progress(&checklist.progress(urls.len())));
        }
        Some(("status", args)) => {
            let url = args.get_one::<String>("url").unwrap();
            let status: Status = args
                .get_one::<String>("status")
                .unwrap()
                .parse()
                .map_err(|err| anyhow!("{err}"))?;
            let user = profile.load()?.ok_or_else(|| {
                anyhow!("no local user yet; run `siteshift user --name <name>` first")
            })?;

            let mut checklist = Checklist::new(backend);
            checklist.load().await?;
            checklist.update_status(url, status, &user.id).await?;
            println!("{url} is now {}", status_label(status));
        }
        Some(("migrate", args)) => {
            let url = args.get_one::<String>("url").unwrap();
            let new_url = args.get_one::<String>("new-url").unwrap();

            let mut checklist = Checklist::new(backend);
            checklist.load().await?;
            checklist.set_migrated_url(url, new_url).await?;

            let item = checklist.entry_for(url);
            if item.needs_301 == Some(true) {
                println!("{url} -> {new_url}  (301 redirect required)");
            } else {
                println!("{url} -> {new_url}");
            }
        }
        Some(("settings", args)) => {
            let source = args.get_one::<String>("source");
            let target = args.get_one::<String>("target");

            let mut checklist = Checklist::new(backend);
            checklist.load().await?;

            if source.is_none() && target.is_none() {
                println!("source: {}", checklist.settings().source);
                println!("target: {}", checklist.settings().target);
            } else {
                let current = checklist.settings().clone();
                let next = UrlSettings {
                    source: source.cloned().unwrap_or(current.source),
                    target: target.cloned().unwrap_or(current.target),
                };
                checklist.update_settings(next).await?;
                println!("source: {}", checklist.settings().source);
                println!("target: {}", checklist.settings().target);
            }
        }
        Some(("user", args)) => match args.get_one::<String>("name") {
            Some(name) => {
                let user = profile.login(name)?;
                println!("working as {} ({})", user.name, user.id);
            }
            None => match profile.load()? {
                Some(user) => println!("working as {} ({})", user.name, user.id),
                None => println!("no local user yet; run `siteshift user --name <name>`"),
            },
        },
        _ => {}
    }

    Ok(())
}

fn build_backend(matches: &ArgMatches) -> Arc<dyn ChecklistBackend> {
    if let Some(data) = matches.get_one::<PathBuf>("data") {
        let store = Store::new(Arc::new(JsonFileStore::new(data.clone())));
        Arc::new(LocalBackend::new(store))
    } else {
        let server = matches.get_one::<String>("server").unwrap();
        Arc::new(HttpBackend::new(server.clone()))
    }
}
