// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use mu_coloring::graph::parse::{parse_adjacency, parse_budgets, parse_coloring};
use mu_coloring::graph::{Budgets, Color, Graph};
use mu_coloring::oracle;
use mu_coloring::solver::{self, count_solutions, NoCutoff, SolverConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mu")]
#[command(about = "Graph coloring with per-vertex color budgets", long_about = None)]
struct Cli {
    /// Log solver progress at debug level (overrides MU_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Color a graph
    Solve {
        #[command(flatten)]
        problem: ProblemArgs,
        /// Which solver to run
        #[arg(long, value_enum, default_value_t = SolverChoice::Both)]
        solver: SolverChoice,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Check a coloring against a graph and its budgets
    Check {
        #[command(flatten)]
        problem: ProblemArgs,
        /// Coloring file, one `<vertex> <color>` line per assigned vertex
        #[arg(long)]
        coloring: PathBuf,
    },
    /// Count every valid coloring
    Count {
        #[command(flatten)]
        problem: ProblemArgs,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Solve the sample 4-cycle with every budget 1
    Demo,
}

#[derive(Args)]
struct ProblemArgs {
    /// Adjacency file, one `<vertex> <neighbor>...` line per vertex
    graph: PathBuf,
    #[command(flatten)]
    budgets: BudgetSource,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct BudgetSource {
    /// Budget file, one `<vertex> <mu>` line per vertex
    #[arg(long)]
    budgets: Option<PathBuf>,
    /// Give every vertex the same budget
    #[arg(long)]
    uniform: Option<Color>,
}

#[derive(Args)]
struct SearchArgs {
    /// Largest color the exhaustive search may use
    #[arg(long)]
    ceiling: Option<Color>,
    /// Stop the exhaustive search after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

impl SearchArgs {
    fn config(&self) -> SolverConfig {
        let mut config = SolverConfig::new();
        if let Some(ceiling) = self.ceiling {
            config = config.with_ceiling(ceiling);
        }
        if let Some(ms) = self.timeout_ms {
            config = config.with_time_limit(Duration::from_millis(ms));
        }
        config
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SolverChoice {
    Greedy,
    Exhaustive,
    Both,
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load(problem: &ProblemArgs) -> Result<(Graph, Budgets)> {
    let graph = parse_adjacency(&read(&problem.graph)?)
        .with_context(|| format!("invalid graph in {}", problem.graph.display()))?;
    let budgets = match (&problem.budgets.budgets, problem.budgets.uniform) {
        (Some(path), _) => parse_budgets(&read(path)?, &graph)
            .with_context(|| format!("invalid budgets in {}", path.display()))?,
        (None, Some(limit)) => Budgets::uniform(&graph, limit),
        (None, None) => bail!("either --budgets or --uniform is required"),
    };
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "problem loaded"
    );
    Ok((graph, budgets))
}

fn solve(graph: &Graph, budgets: &Budgets, choice: SolverChoice, config: &SolverConfig) -> Result<()> {
    match choice {
        SolverChoice::Greedy => print!("{}", solver::greedy_report(graph, budgets, config)?),
        SolverChoice::Exhaustive => {
            print!("{}", solver::exhaustive_report(graph, budgets, config, &NoCutoff)?)
        }
        SolverChoice::Both => {
            let (greedy, exhaustive) = solver::solve_both(graph, budgets, config, &NoCutoff)?;
            print!("{}", greedy);
            print!("{}", exhaustive);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("MU_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Solve {
            problem,
            solver,
            search,
        } => {
            let (graph, budgets) = load(&problem)?;
            solve(&graph, &budgets, solver, &search.config())?;
        }
        Commands::Check { problem, coloring: path } => {
            let (graph, budgets) = load(&problem)?;
            let coloring = parse_coloring(&read(&path)?, &graph)
                .with_context(|| format!("invalid coloring in {}", path.display()))?;
            let violations = oracle::violations(&graph, &budgets, &coloring);
            for violation in &violations {
                println!("{}", violation);
            }
            if !violations.is_empty() {
                bail!("coloring breaks {} constraint(s)", violations.len());
            }
            if coloring.is_total() {
                println!("valid total coloring");
            } else {
                println!(
                    "valid partial coloring ({} of {} vertices colored)",
                    coloring.assigned_count(),
                    coloring.len()
                );
            }
        }
        Commands::Count { problem, search } => {
            let (graph, budgets) = load(&problem)?;
            let count = count_solutions(&graph, &budgets, &search.config(), &NoCutoff)?;
            println!("{}", count);
        }
        Commands::Demo => {
            let graph = Graph::from_adjacency(&[vec![1, 2], vec![0, 3], vec![0, 3], vec![1, 2]])?;
            let budgets = Budgets::uniform(&graph, 1);
            solve(&graph, &budgets, SolverChoice::Both, &SolverConfig::default())?;
        }
    }

    Ok(())
}
