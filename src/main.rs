use bhgrav::{Engine, Mode, Scenario, ScenarioConfig, SummaryRenderer, WindowRenderer};
use bhgrav::{bench_integrators, run_2d, run_menu};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::io;
use std::path::PathBuf;

/// Black hole gravity simulator: Newtonian and approximate relativistic orbits
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Scenario YAML file; built-in defaults are used when omitted
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print a text summary instead of opening a window (menu and `view`)
    #[arg(long, global = true)]
    headless: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the viewer for one mode (1|static, 2|animated, 3|relativistic)
    View { mode: Mode },
    /// Integrate one mode and print its summary
    Run { mode: Mode },
    /// Time the three integration loops
    Bench,
}

impl Args {
    /// Whether this invocation ends up in the bevy viewer
    fn opens_window(&self) -> bool {
        !self.headless && matches!(self.command, None | Some(Command::View { .. }))
    }
}

// logs go to stderr so the menu owns stdout
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},wgpu=error,naga=warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// load here to keep main clean
fn load_config(path: Option<&PathBuf>) -> Result<ScenarioConfig> {
    match path {
        Some(path) => ScenarioConfig::load(path)
            .with_context(|| format!("failed to load scenario from {}", path.display())),
        None => Ok(ScenarioConfig::default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let cfg = load_config(args.config.as_ref())?;
    if !args.opens_window() {
        info!("headless run, no window will be opened");
    }

    match args.command {
        Some(Command::View { mode }) if args.headless => {
            let mut engine = Engine::new(cfg, SummaryRenderer::new(io::stdout()));
            engine.run_mode(mode)?;
        }
        Some(Command::View { mode }) => {
            let scenario = Scenario::build_scenario(&cfg, mode);
            let trajectory = scenario.integrate();
            run_2d(&scenario, &trajectory).context("viewer failed")?;
        }
        Some(Command::Run { mode }) => {
            let mut engine = Engine::new(cfg, SummaryRenderer::new(io::stdout()));
            engine.run_mode(mode)?;
        }
        Some(Command::Bench) => bench_integrators(&cfg),
        None if args.headless => {
            let mut engine = Engine::new(cfg, SummaryRenderer::new(io::stdout()));
            let exit = run_menu(io::stdin().lock(), io::stdout(), &mut engine)?;
            info!(?exit, "menu closed");
        }
        None => {
            let renderer = WindowRenderer::current(args.config.clone(), args.verbose)?;
            let mut engine = Engine::new(cfg, renderer);
            let exit = run_menu(io::stdin().lock(), io::stdout(), &mut engine)?;
            info!(?exit, "menu closed");
        }
    }

    Ok(())
}
