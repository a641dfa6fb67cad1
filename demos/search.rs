//! Runs one of the searches on a sample graph and prints what it left on
//! the vertices.
//!
//! Usage:
//!   cargo run --example search -- dijkstra --source 0
//!   cargo run --example search -- a-star --source 4 --target 0 --heuristic manhattan
//!   GRAPHSEARCH_LOG=graphsearch=trace cargo run --example search -- ida-star --large
//!
//! The default graph is the nine-vertex graph of CLRS figure 23.5 laid out
//! on a grid; `--large` swaps in the generated 510-vertex graph.

use std::process;

use clap::{Parser, ValueEnum};
use graphsearch::{
    generate_large_graph::generate_large_graph,
    prelude::*,
    sample_graph::sample_graph,
    tracing_support::{dump_span_timings, init_tracing},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    Dijkstra,
    Prim,
    Greedy,
    AStar,
    IdaStar,
    Iddfs,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicKind {
    Euclidean,
    Manhattan,
    Minkowski,
    Hamming,
}

/// Run a graph search and print the resulting costs and path
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search to run
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Start vertex
    #[arg(short, long, default_value_t = 0)]
    source: usize,

    /// Goal vertex, for the searches that take one
    #[arg(short, long, default_value_t = 4)]
    target: usize,

    /// Deepest bound tried by IDA* and IDDFS
    #[arg(long, default_value_t = 8)]
    max_depth: u32,

    /// Distance estimate for the heuristic searches
    #[arg(long, value_enum, default_value = "euclidean")]
    heuristic: HeuristicKind,

    /// Exponent used with `--heuristic minkowski`
    #[arg(long, default_value_t = 3.0)]
    p: f64,

    /// Search the generated large graph instead of the small sample
    #[arg(long)]
    large: bool,

    /// Print accumulated span timings when done
    #[arg(long)]
    timings: bool,
}

fn large_graph() -> Result<UndirectedGraph<f64>> {
    let mut graph = UndirectedGraph::new();
    generate_large_graph(
        &mut graph,
        |i| vec![(i % 23) as f64, (i / 23) as f64],
        |i| (i % 9) as f64 + 1.0,
    )?;
    Ok(graph)
}

fn run_search(graph: &mut UndirectedGraph<f64>, args: &Args) -> Result<Option<bool>> {
    let (source, target) = (VertexId(args.source), VertexId(args.target));
    let distance = match args.heuristic {
        HeuristicKind::Euclidean => Distance::Euclidean,
        HeuristicKind::Manhattan => Distance::Manhattan,
        HeuristicKind::Minkowski => Distance::Minkowski(args.p),
        HeuristicKind::Hamming => Distance::Hamming,
    };
    let found = match args.algorithm {
        Algorithm::Bfs => {
            bfs(graph, source)?;
            None
        }
        Algorithm::Dfs => {
            dfs(graph, source)?;
            None
        }
        Algorithm::Dijkstra => {
            dijkstra(graph, source)?;
            None
        }
        Algorithm::Prim => {
            prim(graph, source)?;
            None
        }
        Algorithm::Ucs => Some(ucs(graph, source, target)?),
        Algorithm::Greedy => Some(greedy_best_first(graph, source, target, &distance)?),
        Algorithm::AStar => Some(a_star(graph, source, target, &distance)?),
        Algorithm::IdaStar => Some(ida_star(graph, source, target, args.max_depth, &distance)?),
        Algorithm::Iddfs => Some(iddfs(graph, source, target, args.max_depth)?),
    };
    Ok(found)
}

fn print_vertices(graph: &UndirectedGraph<f64>, algorithm: Algorithm) {
    println!("vertex  cost      pred  extra");
    for vertex in graph.vertices() {
        let cost = match vertex.current_cost() {
            VertexCost::Known(cost) => format!("{cost}"),
            VertexCost::Unknown => "-".to_string(),
        };
        let pred = vertex
            .predecessor()
            .and_then(|edge| graph.edge(edge).ok())
            .and_then(|edge| edge.other_end(vertex.id()))
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        let extra = match algorithm {
            Algorithm::Dfs => format!(
                "{}/{}",
                vertex.arrival_time().map_or(-1, i64::from),
                vertex.departure_time().map_or(-1, i64::from)
            ),
            Algorithm::Greedy | Algorithm::AStar | Algorithm::IdaStar => {
                format!("h={:.3}", vertex.heuristic_cost())
            }
            _ => format!("{:?}", vertex.label()),
        };
        println!("{:<7} {:<9} {:<5} {}", vertex.id(), cost, pred, extra);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut graph = if args.large {
        large_graph()?
    } else {
        sample_graph()?
    };
    eprintln!(
        "Searching {} vertices, {} edges with {:?}",
        graph.num_vertices(),
        graph.num_edges(),
        args.algorithm
    );

    let found = run_search(&mut graph, args)?;
    print_vertices(&graph, args.algorithm);

    match found {
        Some(true) => {
            let target = VertexId(args.target);
            let path = graph.path_to(target)?;
            let hops: Vec<String> = path.vertices().iter().map(ToString::to_string).collect();
            println!("\npath: {}", hops.join(" -> "));
            println!("cost: {}", path.total_cost(&graph)?);
        }
        Some(false) => println!("\nno path from {} to {}", args.source, args.target),
        None => {}
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing();

    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
    if args.timings {
        dump_span_timings();
    }
}
