//! Tally CLI - demonstration and scripting harness for the item store.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tally::{Item, ItemStore, NewItem, Response, Stats, StoreBatchExt, load_script};

mod cli;

use cli::{Cli, Command};

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tally")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("tally.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn format_completed(completed: bool) -> ColoredString {
    if completed { "done".blue() } else { "pending".green() }
}

fn print_item(item: &Item) {
    println!(
        "{} {} {}{}",
        format_completed(item.completed),
        format!("#{}", item.id).cyan(),
        item.title,
        if item.description.is_empty() {
            String::new()
        } else {
            format!("\n    {}", item.description.dimmed())
        }
    );
}

fn print_items(items: &[Item]) {
    if items.is_empty() {
        println!("{}", "No items".dimmed());
    } else {
        for item in items {
            print_item(item);
        }
    }
}

fn print_stats(stats: &Stats) {
    println!(
        "{} {} total, {} completed, {} pending ({})",
        "→".blue(),
        stats.total,
        stats.completed,
        stats.pending,
        stats.completion_rate.bold()
    );
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn print_response(response: &Response) {
    match response {
        Response::Item { item } => print_item(item),
        Response::Items { items } => print_items(items),
        Response::Stats { stats } => print_stats(stats),
        Response::NotFound { id } => println!("{} Item not found: {}", "✗".red(), id),
    }
}

#[derive(Serialize)]
struct DemoOutput<'a> {
    stats: Stats,
    items: &'a [Item],
}

fn demo(json: bool) -> Result<()> {
    let mut store = ItemStore::new();

    store.batch_add(vec![
        NewItem::new("Learn Rust").with_description("Ownership, traits and error handling"),
        NewItem::new("Finish project").with_description("Ship the list manager"),
        NewItem::new("Write docs").with_description("Usage guide for the project"),
    ]);
    store.complete(1).context("Failed to complete sample item")?;

    let stats = store.stats();
    if json {
        return print_json(&DemoOutput {
            stats,
            items: store.get_all(),
        });
    }

    print_stats(&stats);
    print_items(store.get_all());
    Ok(())
}

fn run_script(script: PathBuf, keep_going: bool, json: bool) -> Result<()> {
    let requests = load_script(&script)?;
    info!("Running {} request(s) from {}", requests.len(), script.display());

    let mut store = ItemStore::new();
    let mut responses = Vec::with_capacity(requests.len());

    for (index, request) in requests.into_iter().enumerate() {
        let response = store.handle(request);
        if !json {
            print_response(&response);
        }
        let failed = response.is_not_found();
        responses.push(response);

        if failed && !keep_going {
            if json {
                print_json(&responses)?;
            }
            eyre::bail!("Request {} referenced a missing item", index + 1);
        }
    }

    if json {
        print_json(&responses)?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Demo => demo(cli.json),
        Command::Run { script, keep_going } => run_script(script, keep_going, cli.json),
    }
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    info!("Command: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
