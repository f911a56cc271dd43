// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use alumni_app::{AppState, Directory};
use alumni_db::Store;
use anyhow::{Context, Result, anyhow};
use config::Config;
use runtime::DbRuntime;
use std::env;
use std::path::PathBuf;
use tracing::info;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print!("{USAGE}");
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `alumni --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;

    let db_path = if options.demo {
        PathBuf::from(":memory:")
    } else {
        config.db_path()?
    };
    if options.print_db_path {
        println!("{}", db_path.display());
        return Ok(());
    }

    let log_path = config.log_path()?;
    logging::init(&log_path, config.log_level())
        .with_context(|| format!("start logging to {}", log_path.display()))?;
    info!(
        config = %options.config_path.display(),
        db = %db_path.display(),
        demo = options.demo,
        "alumni starting"
    );

    let store = Store::open(&db_path).with_context(|| {
        format!(
            "open database {}; if this path is wrong, set [storage].db_path or ALUMNI_DB_PATH",
            db_path.display()
        )
    })?;
    store.bootstrap()?;
    if options.demo {
        store.seed_demo_data()?;
    }

    if options.check_only {
        let directory = store
            .load_directory()
            .context("read the alumni directory for --check")?;
        let summary = check_summary(&directory);
        info!(%summary, "check passed");
        println!("{summary}");
        return Ok(());
    }

    let mut state = AppState::with_view(config.start_view());
    let mut runtime = DbRuntime::new(&store, config.featured_count());
    alumni_tui::run_app(&mut state, &mut runtime)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_db_path: bool,
    demo: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_db_path: false,
        demo: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => options.print_config_path = true,
            "--print-path" => options.print_db_path = true,
            "--print-example-config" => options.print_example = true,
            "--demo" => options.demo = true,
            "--check" => options.check_only = true,
            "--help" | "-h" => options.show_help = true,
            unknown => {
                return Err(anyhow!(
                    "unrecognized option {unknown:?}; `alumni --help` lists the options"
                ));
            }
        }
    }

    Ok(options)
}

const USAGE: &str = "\
alumni: browse classmates, mentors, jobs and events from the terminal

usage: alumni [options]

  --config <path>          Read settings from this TOML file
  --print-config-path      Show which config file would be read
  --print-path             Show which alumni database would be opened
  --print-example-config   Print a commented config to start from
  --demo                   Browse the sample class directory (nothing is saved)
  --check                  Open the directory, report what it holds, then exit
  --help, -h               Show this help
";

/// One line describing what the directory holds, printed by `--check`.
fn check_summary(directory: &Directory) -> String {
    let counts = directory.dashboard_counts();
    format!(
        "directory ok: {} alumni ({} mentors), {} jobs, {} events, {} news items",
        counts.alumni,
        counts.mentors,
        counts.open_jobs,
        counts.upcoming_events,
        directory.news.len()
    )
}
