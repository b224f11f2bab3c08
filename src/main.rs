mod calendar;
mod cli;
mod commands;
mod model;
mod storage;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let command = args.command.unwrap_or(cli::Command::Tui);
    match command {
        cli::Command::Init { name } => commands::init(name),
        cli::Command::List => commands::list(),
        cli::Command::Add { name, start, end } => commands::add(name, start, end),
        cli::Command::Edit {
            name,
            rename,
            start,
            end,
        } => commands::edit(name, rename, start, end),
        cli::Command::Remove { name } => commands::remove(name),
        cli::Command::Grid { year, quarter } => commands::grid(year, quarter),
        cli::Command::Tui => commands::tui(),
    }
}
