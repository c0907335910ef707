use std::time::Instant;

use clap::Parser;

use nodeviz_cli::{DEFAULT_CONFIG_TEMPLATE, FileConfig, NodevizOptions, run_main};
use nodeviz_core::Result;

#[derive(Parser, Debug)]
#[command(
    name = "nodeviz",
    about = "nodeviz: flat node/edge records in, rendered SVG graph out",
    version
)]
pub struct Cli {
    /// File containing node records (name|path|synopsis|url)
    #[arg(long = "nodes", value_name = "FILE", default_value = "nodes.txt")]
    nodes: String,

    /// File containing edge records (from,to[,relation,color,style])
    #[arg(long = "edges", value_name = "FILE", default_value = "edges.txt")]
    edges: String,

    /// File to write the SVG output
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = "graph.svg"
    )]
    output: String,

    /// Name of the graph, used verbatim as the graph identifier
    #[arg(long = "name", value_name = "NAME")]
    name: Option<String>,

    /// Background color of the graph
    #[arg(long = "bgcolor", value_name = "COLOR")]
    bgcolor: Option<String>,

    /// Font name for the graph
    #[arg(long = "fontname", value_name = "FONT")]
    fontname: Option<String>,

    /// TOML configuration file with a [graph] section
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<String>,

    /// File to write the DOT document for debugging
    #[arg(long = "dot", value_name = "FILE")]
    dot: Option<String>,

    /// Print a default configuration file to stdout and exit
    #[arg(long = "genconfig", default_value_t = false)]
    genconfig: bool,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    if args.genconfig {
        print!("{DEFAULT_CONFIG_TEMPLATE}");
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => FileConfig::from_path(path)?,
        None => FileConfig::default(),
    };

    // Explicit flags win over config file values.
    let opts = NodevizOptions {
        nodes_file: args.nodes,
        edges_file: args.edges,
        graph_name: args
            .name
            .or(config.graph.name)
            .unwrap_or_else(|| "MyGraph".to_string()),
        background_color: args.bgcolor.or(config.graph.background_color),
        font_name: args.fontname.or(config.graph.font_name),
        dot_file: args.dot,
    };

    match run_main(&opts) {
        Ok(svg) => {
            std::fs::write(&args.output, &svg)?;
            tracing::info!(path = %args.output, bytes = svg.len(), "svg written");
            println!("Wrote graph SVG to {}", args.output);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            std::process::exit(1);
        }
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
