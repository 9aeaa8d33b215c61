#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod config;
mod logger;
mod report;

use std::{fmt::Display, process::ExitCode};

use anyhow::{Context, anyhow};
use clap::Parser;
use liftsync_domain::{
    self as domain, ExerciseMappings, ExerciseTemplateRepository, ParsedWeek, Plan,
    RoutineFolderRepository, RoutineRepository, Service, Snapshot, Summary,
};
use liftsync_storage::{offline::Offline, program_file, rest::REST};
use log::{error, info};

use crate::config::{Args, Config, Mode};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = logger::init(args.level()) {
        eprintln!("failed to initialize logger: {err}");
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::try_from(args).map_err(failure)?;

    let rows = program_file::read_rows(&config.csv)
        .with_context(|| format!("failed to read program from {}", config.csv.display()))?;
    info!("found {} rows in {}", rows.len(), config.csv.display());

    let weeks = config.weeks.select(domain::group_rows(&rows));
    info!("processing {}", report::selection(&weeks));
    info!(
        "found {} unique exercises",
        domain::unique_exercise_names(&weeks).len()
    );

    match &config.mode {
        Mode::Simulate { api_key: None } => {
            info!("no API key present, planning against an empty account");
            simulate(&Service::new(Offline), &config, &weeks).await
        }
        Mode::Simulate {
            api_key: Some(api_key),
        } => {
            let rest = REST::connect(&config.api_base, api_key).map_err(failure)?;
            simulate(&Service::new(rest), &config, &weeks).await
        }
        Mode::Sync { api_key } => {
            let rest = REST::connect(&config.api_base, api_key).map_err(failure)?;
            let summary = synchronize(&Service::new(rest), &config, &weeks).await?;
            println!("{}", report::summary(&summary));
            Ok(())
        }
    }
}

/// Reads the remote state and plans the run. Dry and real runs share this step.
async fn prepare<R>(
    service: &Service<R>,
    config: &Config,
    weeks: &[ParsedWeek],
) -> anyhow::Result<(ExerciseMappings, Snapshot, Plan)>
where
    R: ExerciseTemplateRepository + RoutineFolderRepository + RoutineRepository,
{
    let snapshot = service.get_snapshot().await.map_err(failure)?;
    let mappings = ExerciseMappings::build(
        domain::unique_exercise_names(weeks),
        &snapshot.templates,
        &config.policy,
    );
    let plan = domain::plan(weeks, &mappings, &snapshot, &config.program);
    Ok((mappings, snapshot, plan))
}

/// Plans the run without changing anything remotely.
async fn simulate<R>(
    service: &Service<R>,
    config: &Config,
    weeks: &[ParsedWeek],
) -> anyhow::Result<()>
where
    R: ExerciseTemplateRepository + RoutineFolderRepository + RoutineRepository,
{
    let (mappings, _, plan) = prepare(service, config, weeks).await?;

    println!("{}", report::simulation(weeks, &mappings, &plan));
    info!("dry run complete, run without --dry-run to apply these changes");
    Ok(())
}

async fn synchronize<R>(
    service: &Service<R>,
    config: &Config,
    weeks: &[ParsedWeek],
) -> anyhow::Result<Summary>
where
    R: ExerciseTemplateRepository + RoutineFolderRepository + RoutineRepository,
{
    let (mappings, mut snapshot, plan) = prepare(service, config, weeks).await?;
    report::log_mappings(&mappings);
    domain::log_skipped(&plan);

    service.apply(&plan, &mut snapshot).await.map_err(failure)
}

/// Domain errors may hold causes that are not `Send`, so only their message is kept.
fn failure(err: impl Display) -> anyhow::Error {
    anyhow!("{err}")
}
