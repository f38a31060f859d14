//! CLI binary for kgraph: load a graph manifest and query it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kgraph_core::ancestors::NO_COMMON_ANCESTOR;
use kgraph_core::config::KgConfig;
use kgraph_core::knowledge::KnowledgeGraph;
use kgraph_core::manifest::GraphManifest;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kgraph", about = "Directed knowledge graph queries")]
struct Cli {
    /// Graph manifest (TOML with `entities` and `[[relations]]`)
    #[arg(short, long, global = true, default_value = "graph.toml")]
    graph: PathBuf,

    /// Directory holding `.kgraph/config.toml` (defaults to current directory)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Print list results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every vertex and its outgoing edges
    Show,

    /// Show entity and relation counts
    Info,

    /// List registered entities in registration order
    Entities,

    /// List direct successors of an entity
    Neighbors {
        entity: String,
    },

    /// Breadth-first visit order
    Bfs {
        entity: String,
    },

    /// Depth-first visit order
    Dfs {
        entity: String,
    },

    /// Check for a direct relation between two entities
    Reachable {
        from: String,
        to: String,
    },

    /// Check whether `to` can be reached from `from` through any chain
    Path {
        from: String,
        to: String,
    },

    /// Entities within a number of hops
    Related {
        entity: String,

        /// Maximum hops (defaults to config `related_depth`)
        #[arg(long)]
        depth: Option<usize>,
    },

    /// Nearest common ancestor of two entities
    Ancestor {
        first: String,
        second: String,
    },
}

fn get_project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.project {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let project_root = get_project_root(&cli)?;
    let config = KgConfig::load(&project_root)?;
    let manifest = GraphManifest::load(&cli.graph)?;
    let kg = manifest.build(&config)?;
    tracing::info!(
        entities = kg.get_all_entities().len(),
        graph = %cli.graph.display(),
        "graph loaded"
    );

    match cli.command {
        Commands::Show => {
            print!("{kg}");
            Ok(())
        }
        Commands::Info => cmd_info(&kg),
        Commands::Entities => print_list(kg.get_all_entities(), cli.json),
        Commands::Neighbors { entity } => print_list(&kg.get_neighbors(&entity)?, cli.json),
        Commands::Bfs { entity } => {
            println!("{}", kg.bfs(&entity)?);
            Ok(())
        }
        Commands::Dfs { entity } => {
            println!("{}", kg.dfs(&entity)?);
            Ok(())
        }
        Commands::Reachable { from, to } => {
            println!("{}", kg.is_reachable(&from, &to)?);
            Ok(())
        }
        Commands::Path { from, to } => {
            println!("{}", kg.has_path(&from, &to)?);
            Ok(())
        }
        Commands::Related { entity, depth } => {
            let depth = depth.unwrap_or(config.knowledge.related_depth);
            print_list(&kg.get_related_entities(&entity, depth)?, cli.json)
        }
        Commands::Ancestor { first, second } => {
            let found = kg.find_common_ancestors(&first, &second)?;
            println!("{}", found.as_deref().unwrap_or(NO_COMMON_ANCESTOR));
            Ok(())
        }
    }
}

fn print_list(items: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(items)?);
    } else {
        for item in items {
            println!("{item}");
        }
    }
    Ok(())
}

fn cmd_info(kg: &KnowledgeGraph) -> Result<()> {
    let graph = kg.graph();
    println!("Entities: {}", kg.get_all_entities().len());
    println!("Relations: {}", graph.edges().len());

    let mut roots = Vec::new();
    for entity in kg.get_all_entities() {
        if graph.in_degree(entity)? == 0 {
            roots.push(entity.as_str());
        }
    }
    if !roots.is_empty() {
        println!("Roots: {}", roots.join(", "));
    }
    Ok(())
}
