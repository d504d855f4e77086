use clap::{Parser, Subcommand};
use gv_graph::Graph;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;
mod render;
mod view;

use error::{CliError, CliResult};
use render::OutputFormat;
use view::ViewConfig;

#[derive(Parser)]
#[command(name = "gv-cli")]
#[command(about = "GraphView CLI - inspect edge lists and their enabled subgraphs", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the graph described by an edge list
    Show {
        /// Path to the edge-list file (one `from -> to` per line)
        edge_list: PathBuf,
        /// YAML view file with vertices to disable/enable
        #[arg(long)]
        view: Option<PathBuf>,
        /// Vertex to disable (repeatable)
        #[arg(long, value_name = "NAME")]
        disable: Vec<String>,
        /// Vertex to enable, applied after --disable (repeatable)
        #[arg(long, value_name = "NAME")]
        enable: Vec<String>,
        /// Print only the enabled subgraph
        #[arg(long)]
        enabled_only: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Report vertex/edge counts and lines that are not edges
    Check {
        /// Path to the edge-list file
        edge_list: PathBuf,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    match cli.command {
        Commands::Show {
            edge_list,
            view,
            disable,
            enable,
            enabled_only,
            format,
        } => {
            let flags = ViewConfig {
                disabled: disable,
                enabled: enable,
                enabled_only,
            };
            cmd_show(&edge_list, view.as_deref(), flags, format)
        }
        Commands::Check { edge_list } => cmd_check(&edge_list),
    }
}

fn read_edge_list(path: &Path) -> CliResult<String> {
    info!(path = %path.display(), "reading edge list");
    std::fs::read_to_string(path).map_err(|source| CliError::EdgeListRead {
        path: path.to_path_buf(),
        source,
    })
}

fn cmd_show(
    edge_list: &Path,
    view_path: Option<&Path>,
    flags: ViewConfig,
    format: OutputFormat,
) -> CliResult<()> {
    let mut graph = Graph::from_text(&read_edge_list(edge_list)?);

    let view = match view_path {
        Some(path) => ViewConfig::load(path)?.merge(flags),
        None => flags,
    };
    view.apply(&mut graph);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if view.enabled_only {
        render::write_enabled(&mut out, &graph, format)?;
    } else {
        render::write_full(&mut out, &graph, format)?;
    }
    out.flush()?;
    Ok(())
}

fn cmd_check(edge_list: &Path) -> CliResult<()> {
    let text = read_edge_list(edge_list)?;
    let mut graph = Graph::new();
    let report = graph.parse_from_text_with_report(&text);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Checking edge list: {}", edge_list.display())?;
    render::write_check_report(&mut out, &graph, &report)?;
    out.flush()?;
    Ok(())
}
