//! Builds a graph of short words, joining two words when they differ in one
//! letter or are anagrams of each other, and prints some of its properties.
//!
//! ```text
//! cargo run --example word_graph -- --from AIM --to OAT
//! ```

use clap::Parser;
use smallgraph::{prelude::*, tracing_support};

const DEFAULT_WORDS: &[&str] = &[
    "AIM", "ARM", "ARC", "ART", "ACT", "RAT", "OAT", "CAT", "OAR", "TAR", "CAR",
];

#[derive(Parser, Debug)]
#[command(about = "Explore the word graph")]
struct Args {
    /// Words to use instead of the built-in list.
    #[arg(long, num_args = 1..)]
    words: Vec<String>,

    /// Start of the printed shortest path.
    #[arg(long, default_value = "AIM")]
    from: String,

    /// End of the printed shortest path.
    #[arg(long, default_value = "OAT")]
    to: String,

    /// Print accumulated span timings on exit.
    #[arg(long)]
    timings: bool,
}

fn one_letter_off(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.chars().zip(b.chars()).filter(|(x, y)| x != y).count() == 1
}

fn anagrams(a: &str, b: &str) -> bool {
    let mut a: Vec<char> = a.chars().collect();
    let mut b: Vec<char> = b.chars().collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

fn position(words: &[String], word: &str) -> Result<usize, String> {
    words
        .iter()
        .position(|w| w.eq_ignore_ascii_case(word))
        .ok_or_else(|| format!("{word} is not in the word list"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    tracing_support::init_tracing();

    let words: Vec<String> = if args.words.is_empty() {
        DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
    } else {
        args.words.iter().map(|w| w.to_uppercase()).collect()
    };

    // Vertices are word indices; labels are kept on the side.
    let mut graph = Graph::with_order("words", Directedness::Undirected, words.len())?;
    for (i, a) in words.iter().enumerate() {
        for (j, b) in words.iter().enumerate().skip(i + 1) {
            if a != b && (one_letter_off(a, b) || anagrams(a, b)) {
                graph.add_edge(i, j)?;
            }
        }
    }
    let label = |v: &Vertex| match v.id() {
        VertexId::Int(i) => words[*i as usize].clone(),
        other => other.to_string(),
    };

    println!("order: {}, size: {}", graph.order(), graph.size());

    let diameter = graph.diameter();
    match &diameter.endpoints {
        Some((u, v)) => println!(
            "diameter: {} ({} to {})",
            diameter.distance,
            label(u),
            label(v)
        ),
        None => println!("diameter: 0"),
    }

    #[cfg(feature = "pathfinding")]
    for component in connected_components(&graph) {
        let members: Vec<_> = component.iter().map(&label).collect();
        println!("component: {}", members.join(" "));
    }

    let (from, to) = (position(&words, &args.from)?, position(&words, &args.to)?);
    let path = shortest_path(&graph, from, to, None)?;
    if path.is_empty() {
        println!("no path from {} to {}", args.from, args.to);
    } else {
        let steps: Vec<_> = path.vertices().iter().map(&label).collect();
        println!("path: {}", steps.join(" -> "));
    }

    let cycle = Graph::from_edges(
        "C5",
        Directedness::Undirected,
        [('a', 'b'), ('b', 'c'), ('c', 'd'), ('d', 'e'), ('e', 'a')],
    )?;
    let report = IsomorphismChecker::new().check(&cycle, &cycle.complement())?;
    if report.isomorphic {
        println!("the 5-cycle and its complement are isomorphic");
    } else {
        println!("the 5-cycle and its complement are not isomorphic");
    }

    if args.timings {
        tracing_support::dump_span_timings();
    }
    Ok(())
}
