use clap::{Parser, Subcommand};
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tracing::{info, warn};
use vacuum_planner::{
    config::ScenarioConfig,
    search::{search_engines::SearchEngineName, validate, Problem, Verbosity},
    vacuum::{Environment, GoalFormulation, TracingObserver, VacuumAgent},
};

#[derive(Parser)]
#[command(version)]
/// Plan for the vacuum world described by a scenario file.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(help = "The TOML scenario file")]
    config: PathBuf,
    #[arg(
        value_enum,
        help = "The search engine to use, overriding the scenario",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    search_engine_name: Option<SearchEngineName>,
    #[arg(
        help = "The search time limit, overriding the scenario (e.g. 30s, 2m)",
        short = 't',
        long = "time-limit",
        id = "TIME",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search once from the initial world and print the resulting plan.
    Plan,
    /// Let an agent act in the world, planning again whenever its plan runs
    /// out.
    Simulate {
        #[arg(
            help = "The maximum number of actions to execute",
            long = "steps",
            id = "STEPS",
            default_value_t = 100
        )]
        steps: usize,
        #[arg(
            value_enum,
            help = "What the agent plans for each time",
            long = "goal",
            id = "GOAL",
            default_value_t = GoalFormulation::AllClean
        )]
        goal: GoalFormulation,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = ScenarioConfig::load(&cli.config)?;
    let engine = cli.search_engine_name.unwrap_or(config.search.engine);
    let mut budget = config.search.budget()?;
    if cli.time_limit.is_some() {
        budget.time_limit = cli.time_limit;
    }
    let problem = config.problem()?;

    match cli.command {
        Commands::Plan => {
            info!(%engine, "planning");
            let (node, _statistics) =
                engine.search(&problem, &mut budget.termination_condition());

            if let Some(reason) = node.failure_reason() {
                info!("no plan found");
                println!("No plan found: {:?}", reason);
                return Ok(ExitCode::FAILURE);
            }

            let plan = node.action_sequence();
            info!("validating plan");
            match validate(&problem, &plan) {
                Ok(()) => info!("plan is valid"),
                Err(e) => {
                    warn!("plan is invalid: {}", e);
                    return Ok(ExitCode::FAILURE);
                }
            }
            info!(plan_length = plan.len());

            println!("Plan found:");
            println!("{}", plan);
            println!("Plan length: {}", plan.len());
            println!("Plan cost: {}", node.cost());
        }
        Commands::Simulate { steps, goal } => {
            let mut environment =
                Environment::new(problem.initial_state().clone(), TracingObserver);
            let mut agent = VacuumAgent::new(engine)
                .with_goal_formulation(goal)
                .with_settings(config.problem.into())
                .with_budget(budget);
            let executed = agent.run(&mut environment, steps);

            let world = environment.into_state();
            println!("{}", world);
            println!("Actions executed: {}", executed);
            if !world.is_clean() {
                println!("World is not clean");
                return Ok(ExitCode::FAILURE);
            }
            println!("World is clean");
        }
    }
    Ok(ExitCode::SUCCESS)
}
