//! Batch runner: solves every instance listed in a run configuration.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use u_aco::io::{Instance, InstanceFormat, Report, RunConfig, RunEntry};
use u_aco::{AcoConfig, AcoEngine, AcoError, AcoResult};

#[derive(Parser, Debug)]
#[command(name = "u-aco")]
#[command(author, version, about = "Ant Colony Optimization for the traveling salesman problem")]
struct Cli {
    /// Run configuration: `<instance> <iterations>` pairs, or YAML (.yaml/.yml)
    #[arg(short, long, default_value = "conf.ini")]
    config: PathBuf,

    /// Random seed (runs are reproducible when set)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Ants per generation
    #[arg(short = 'm', long)]
    ants: Option<usize>,

    /// Pheromone exponent
    #[arg(long)]
    alpha: Option<f64>,

    /// Visibility exponent
    #[arg(long)]
    beta: Option<f64>,

    /// Evaporation rate in [0, 1)
    #[arg(long)]
    rho: Option<f64>,

    /// Instance file format: auto, coords or matrix
    #[arg(short, long)]
    format: Option<InstanceFormat>,

    /// Also deposit 1/d on every edge an ant traverses
    #[arg(long)]
    step_deposit: bool,

    /// Write all reports to this file as a JSON array
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Cli {
    fn apply_overrides(&self, params: &mut AcoConfig) {
        if let Some(seed) = self.seed {
            params.seed = Some(seed);
        }
        if let Some(ants) = self.ants {
            params.num_ants = ants;
        }
        if let Some(alpha) = self.alpha {
            params.alpha = alpha;
        }
        if let Some(beta) = self.beta {
            params.beta = beta;
        }
        if let Some(rho) = self.rho {
            params.rho = rho;
        }
        if self.step_deposit {
            params.step_deposit = true;
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(&Cli::parse()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Solves every configured instance. Instance failures are logged and
/// skipped; configuration, parameter and `--json` failures are returned.
fn run(cli: &Cli) -> AcoResult<Vec<Report>> {
    let mut run = RunConfig::load(&cli.config)?;
    cli.apply_overrides(&mut run.parameters);
    if let Some(format) = cli.format {
        run.format = format;
    }
    run.parameters.validate()?;

    info!(
        "{} instance(s), alpha={} beta={} rho={} ants={}",
        run.entries.len(),
        run.parameters.alpha,
        run.parameters.beta,
        run.parameters.rho,
        run.parameters.num_ants
    );

    let engine = AcoEngine::new(run.parameters.clone());
    let mut reports = Vec::with_capacity(run.entries.len());

    for entry in &run.entries {
        match solve_entry(&engine, entry, run.format) {
            Ok(report) => {
                println!("{report}");
                reports.push(report);
            }
            Err(e) => warn!("skipping {}: {e}", entry.file.display()),
        }
    }

    if let Some(path) = &cli.json {
        write_json(path, &reports)?;
    }
    Ok(reports)
}

fn solve_entry(engine: &AcoEngine, entry: &RunEntry, format: InstanceFormat) -> AcoResult<Report> {
    let instance = Instance::load(&entry.file, format)?;
    info!(
        "{}: {} cities ({}), {} generations",
        instance.name,
        instance.dimension(),
        if instance.is_symmetric() { "symmetric" } else { "asymmetric" },
        entry.iterations
    );
    let solution = engine.solve(&instance.distances, entry.iterations)?;
    Ok(Report::new(instance.name, &solution))
}

fn write_json(path: &Path, reports: &[Report]) -> AcoResult<()> {
    let json = serde_json::to_string_pretty(reports)?;
    std::fs::write(path, json).map_err(|e| AcoError::io(path, e))?;
    info!("reports written to {}", path.display());
    Ok(())
}
