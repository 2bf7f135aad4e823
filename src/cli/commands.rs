use crate::action::ActionRegistry;
use crate::config::load_routes;
use crate::dispatcher::Dispatcher;
use crate::echo::register_echo_actions;
use crate::request::parameters_from_query;
use crate::router::RouteTable;
use crate::runtime_config::DEFAULT_ROUTES_PATH;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Command-line interface for jsonmvc
#[derive(Parser, Debug)]
#[command(name = "jsonmvc")]
#[command(about = "Route table and dispatch tooling", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the compiled route table
    Routes {
        /// Route declaration file (YAML, JSON or TOML)
        #[arg(short, long, env = "JSONMVC_ROUTES", default_value = DEFAULT_ROUTES_PATH)]
        config: PathBuf,
    },
    /// Load and compile the route file, reporting the first error
    Check {
        /// Route declaration file (YAML, JSON or TOML)
        #[arg(short, long, env = "JSONMVC_ROUTES", default_value = DEFAULT_ROUTES_PATH)]
        config: PathBuf,
    },
    /// Resolve an action path to its handler id
    Resolve {
        /// Route declaration file (YAML, JSON or TOML)
        #[arg(short, long, env = "JSONMVC_ROUTES", default_value = DEFAULT_ROUTES_PATH)]
        config: PathBuf,

        /// Request verb
        #[arg(short, long, default_value = "GET")]
        method: String,

        /// Path relative to the base path, e.g. /view/planet/3
        path: String,
    },
    /// Dispatch one request through echo actions and print the response
    Dispatch {
        /// Route declaration file (YAML, JSON or TOML)
        #[arg(short, long, env = "JSONMVC_ROUTES", default_value = DEFAULT_ROUTES_PATH)]
        config: PathBuf,

        /// Application base path the request path is resolved under
        #[arg(short, long, env = "JSONMVC_BASE_PATH", default_value = "")]
        base_path: String,

        /// URL-encoded query string passed as parameters
        #[arg(short, long)]
        query: Option<String>,

        /// Request verb
        #[arg(short, long, default_value = "GET")]
        method: String,

        /// Full request path, including the base path
        path: String,
    },
}

/// Parse the process arguments and run the selected command against stdout.
///
/// # Errors
///
/// Returns an error if the route file cannot be loaded or compiled, or if a
/// `resolve` finds no matching route.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}

/// Run `cli`, writing human-readable output to `out`.
///
/// # Errors
///
/// Same as [`run_cli`].
pub fn execute(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Routes { config } => {
            let table = build_table(config)?;
            write!(out, "{}", table.dump_routes())?;
        }
        Commands::Check { config } => {
            let table = build_table(config)?;
            writeln!(out, "OK: {} routes in {}", table.len(), config.display())?;
        }
        Commands::Resolve {
            config,
            method,
            path,
        } => {
            let table = build_table(config)?;
            let route = table.resolve(method, path)?;
            writeln!(
                out,
                "{} {} -> {} (pattern {}, regex {})",
                method,
                path,
                route.handler_id,
                route.path_pattern,
                route.matcher().as_str()
            )?;
        }
        Commands::Dispatch {
            config,
            base_path,
            query,
            method,
            path,
        } => {
            let entries = load_routes(config)?;
            let table = RouteTable::build(entries.clone())?;
            let mut actions = ActionRegistry::new();
            register_echo_actions(&mut actions, &table);

            let dispatcher = Dispatcher::new(entries, actions);
            let parameters = parameters_from_query(query.as_deref().unwrap_or(""));
            let response = dispatcher.dispatch(method, path, base_path, parameters);
            writeln!(out, "status: {}", response.status)?;
            writeln!(out, "request_id: {}", response.request_id)?;
            writeln!(out, "{}", response.body)?;
        }
    }
    Ok(())
}

fn build_table(config: &Path) -> anyhow::Result<RouteTable> {
    let entries = load_routes(config)
        .with_context(|| format!("Failed to load routes from {}", config.display()))?;
    let table = RouteTable::build(entries)?;
    Ok(table)
}
