use anyhow::{Context, Result};
use log::info;
use std::{env, io, process};

mod bank;
mod cli;
mod output;
mod quiz;
mod runner;
mod settings;

use crate::bank::QuestionBank;
use crate::cli::{Options, USAGE};
use crate::output::terminal::TerminalOutput;
use crate::runner::{RunSettings, Runner};
use crate::settings::{resolve_bank_paths, Settings};

fn run() -> Result<()> {
    let options = Options::parse(env::args().skip(1)).context("Invalid arguments")?;
    if options.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let settings = Settings::default();
    let bank_paths = resolve_bank_paths(&options.banks)?;
    info!("Reading question bank from {:?}", bank_paths);
    let bank = QuestionBank::open(&bank_paths)?;

    let run_settings = RunSettings {
        categories: options.categories,
        number_of_questions: options.number.unwrap_or(settings.number_of_questions),
        training: options.training,
        hide_multiple_choice: options.hide_multiple_choice,
    };

    let stdin = io::stdin();
    let output = TerminalOutput::new(stdin.lock(), io::stdout(), settings.wordwrap_width);
    let mut runner = Runner::new(run_settings, output);

    if options.list {
        runner.list_categories(&bank);
        return Ok(());
    }

    runner.run(&bank)?;
    Ok(())
}

fn main() {
    pretty_env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
