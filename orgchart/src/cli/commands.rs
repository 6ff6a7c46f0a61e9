//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::{self, ChartOp};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::OrgChart;
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "settings loaded");
    output::set_color(settings.color);

    match &cli.command {
        Some(Commands::Show { roster }) => cmd_show(&settings, roster.as_deref()),
        Some(Commands::Run {
            script,
            roster,
            steps,
            export,
        }) => cmd_run(&settings, script, roster.as_deref(), *steps, *export),
        Some(Commands::Demo) => cmd_demo(&settings),
        Some(Commands::Config) => cmd_config(&settings),
        Some(Commands::Completion { shell }) => {
            clap_complete::generate(*shell, &mut Cli::command(), "orgchart", &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see `orgchart --help`".into(),
        )),
    }
}

/// Roster given on the command line, else the configured one.
fn resolve_roster(settings: &Settings, arg: Option<&Path>) -> CliResult<PathBuf> {
    arg.map(Path::to_path_buf)
        .or_else(|| settings.roster.clone())
        .ok_or_else(|| {
            CliError::Usage("no roster given and none configured (set `roster` in config)".into())
        })
}

fn print_chart(chart: &OrgChart, settings: &Settings) {
    output::info(&chart.to_tree_string(settings.show_ids));
}

fn print_history(chart: &OrgChart) {
    let history = chart.history();
    output::detail(&format!(
        "history: {} entries, cursor at {}",
        history.len(),
        history.index()
    ));
}

#[instrument(skip(settings))]
fn cmd_show(settings: &Settings, roster: Option<&Path>) -> CliResult<()> {
    let path = resolve_roster(settings, roster)?;
    let chart = application::load_roster(&path)?;
    print_chart(&chart, settings);
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_run(
    settings: &Settings,
    script: &Path,
    roster: Option<&Path>,
    steps: bool,
    export: bool,
) -> CliResult<()> {
    let path = resolve_roster(settings, roster)?;
    let mut chart = application::load_roster(&path)?;
    let ops = application::load_script(script)?;

    if steps {
        for op in &ops {
            op.apply(&mut chart);
            output::header(op);
            print_chart(&chart, settings);
        }
    } else {
        application::run_script(&mut chart, &ops);
    }

    if export {
        output::info(&application::to_roster_toml(&chart)?);
    } else {
        if !steps {
            print_chart(&chart, settings);
        }
        print_history(&chart);
    }
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_demo(settings: &Settings) -> CliResult<()> {
    let mut chart = application::reference_chart();
    output::header("initial chart");
    print_chart(&chart, settings);

    let ops = [
        ChartOp::Move {
            employee: 11,
            supervisor: 6,
        },
        ChartOp::Undo,
        ChartOp::Redo,
    ];
    for op in &ops {
        op.apply(&mut chart);
        output::header(op);
        print_chart(&chart, settings);
    }
    print_history(&chart);
    Ok(())
}

fn cmd_config(settings: &Settings) -> CliResult<()> {
    match crate::config::global_config_path() {
        Some(path) => output::action("global config", &path.display()),
        None => output::action("global config", "unavailable"),
    }
    output::info(&settings.to_toml()?);
    Ok(())
}
