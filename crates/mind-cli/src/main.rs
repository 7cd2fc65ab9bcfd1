//! Mind CLI - solve and step goal-oriented action plans.
//!
//! - `mind solve WORLD... : GOAL...` - solve for a plan and step through it
//! - `mind conditions` - list the conditions the domain knows
//!
//! Conditions may be prefixed with `-` to negate them. Without `--domain` the built-in pizza
//! domain is used.

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use mind_core::{ConditionSet, Mind, Plan, StepStatus};
use mind_goap::Planner;
use mind_recipe::{parse_conditions, parse_literal, Domain, GOAL_SEPARATOR};

use crate::config::MindConfig;

#[derive(Parser)]
#[command(name = "mind")]
#[command(about = "Goal-oriented action planner", version)]
struct Cli {
    /// Domain file (YAML or JSON) describing the available actions
    #[arg(short, long, global = true)]
    domain: Option<PathBuf>,

    /// Planner configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve for a plan and execute it step by step
    Solve {
        /// World conditions, then `:` followed by goal conditions
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        conditions: Vec<String>,
    },

    /// List the conditions known to the domain
    Conditions,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = MindConfig::load_or_default(cli.config.as_deref())?;
    let domain = match cli.domain.as_deref() {
        Some(path) => Domain::load(path)
            .with_context(|| format!("Failed to load domain from {}", path.display()))?,
        None => Domain::pizza(),
    };

    let mut mind: Mind = Mind::new();
    domain.teach(&mut mind).context("Failed to teach domain")?;
    tracing::info!(
        actions = mind.action_count(),
        conditions = mind.condition_count(),
        "domain ready"
    );

    match cli.command {
        Some(Commands::Solve { conditions }) => {
            solve(&mind, &config, &conditions)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Conditions) => {
            list_conditions(&mind);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("Please supply a set of conditions.");
            list_conditions(&mind);
            println!("Conditions may be prefixed with - to negate them");
            println!("Use {GOAL_SEPARATOR} to switch write destination to goal");
            println!("Ex. usage: mind solve is_hungry {GOAL_SEPARATOR} -is_hungry");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn list_conditions(mind: &Mind) {
    println!("Available conditions are:");
    for (_, atom) in mind.conditions() {
        println!("\t{atom}");
    }
}

fn solve(mind: &Mind, config: &MindConfig, words: &[String]) -> Result<()> {
    let (world, goal) = parse_conditions(mind, words).context("Invalid conditions")?;

    let mut writing_goal = false;
    for word in words {
        if word == GOAL_SEPARATOR {
            writing_goal = true;
            continue;
        }
        let (atom, value) = parse_literal(word)?;
        let target = if writing_goal { "goal" } else { "world" };
        let prefix = if value { "" } else { "-" };
        println!("Writing condition to {target}: {prefix}{atom}");
    }

    let mut plan = Plan::with_config(mind, config.plan);
    let mut planner: Planner = Planner::with_config(config.search);
    let Some(cost) = planner.solve(mind, &mut plan, world, goal, &())? else {
        println!("No plan possible!");
        return Ok(());
    };
    let stats = planner.stats();
    tracing::info!(
        cost,
        steps = plan.len(),
        expanded = stats.expanded,
        created = stats.created,
        "solved"
    );

    println!("Doing the plan...");
    let mut state = world;
    loop {
        let next = plan.peek();
        match plan.step(&mut ()) {
            StepStatus::Continuing => {
                if let Some(action) = next {
                    println!("Executing action '{}'...", action.name);
                    state = action.apply(&state);
                }
            }
            StepStatus::Completed => {
                println!("Plan was completed!");
                break;
            }
            StepStatus::Interrupted => {
                println!("Plan was interrupted!");
                break;
            }
        }
    }
    tracing::debug!(state = %mind.describe(&state), "final world");

    println!("The plan in detail:");
    print_plan(&plan);
    Ok(())
}

/// One line per action: running cost, name and the conditions established so far.
fn print_plan(plan: &Plan<'_>) {
    let mind = plan.mind();
    let mut cost = 0u32;
    let mut reached = ConditionSet::EMPTY;
    for action in plan.iter() {
        cost = cost.saturating_add(action.cost);
        reached = reached.apply(&action.exit);
        println!("f = {cost}, {}, c = {}", action.name, mind.describe(&reached));
    }
}
