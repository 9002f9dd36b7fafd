//! Search scheme visualizer CLI
//!
//! Usage:
//!   scheme-viz [OPTIONS] [FILE]
//!
//! Reads a scheme descriptor from a file or stdin and writes an SVG
//! rendering of its backtracking trees to stdout. Can also generate
//! well-known schemes and report their properties without rendering.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use scheme_viz::scheme::{
    generate, generator_names, is_complete, is_non_redundant, is_valid, node_count,
    weighted_node_count,
};
use scheme_viz::{layout_scheme, parse, render_svg, StyleConfig};

#[derive(Parser)]
#[command(name = "scheme-viz")]
#[command(about = "Visualize the backtracking trees of approximate-matching search schemes")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Target sequence length the scheme is expanded to
    #[arg(short = 'n', long, default_value_t = 10)]
    length: usize,

    /// Alphabet size
    #[arg(short, long, default_value_t = 4)]
    sigma: usize,

    /// Enumerate insertions and deletions as well as substitutions
    #[arg(short, long)]
    edit: bool,

    /// Style file overriding layout spacing and SVG options (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generate a named scheme instead of reading one
    #[arg(short, long, value_name = "NAME")]
    generate: Option<String>,

    /// Minimum error budget for --generate
    #[arg(long, default_value_t = 0)]
    min_errors: usize,

    /// Maximum error budget for --generate
    #[arg(long, default_value_t = 2)]
    max_errors: usize,

    /// List available scheme generators
    #[arg(long)]
    list_generators: bool,

    /// Check validity, completeness, and non-redundancy instead of rendering
    #[arg(long)]
    check: bool,

    /// Print the number of enumerated nodes instead of rendering
    #[arg(long)]
    node_count: bool,

    /// Print the expected number of visited nodes for --text-length
    #[arg(long)]
    weighted_node_count: bool,

    /// Text length used by --weighted-node-count
    #[arg(long, default_value_t = 1_000_000_000)]
    text_length: u64,
}

fn main() {
    let cli = Cli::parse();

    if cli.list_generators {
        for name in generator_names() {
            println!("{name}");
        }
        return;
    }

    if let Some(name) = &cli.generate {
        match generate(name, cli.min_errors, cli.max_errors) {
            Ok(scheme) => print!("{scheme}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let style = match &cli.config {
        Some(path) => match StyleConfig::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading style file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => StyleConfig::default(),
    };

    let filename = cli
        .input
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {e}");
                    std::process::exit(1);
                }
            }
        }
    };

    let scheme = match parse(&source) {
        Ok(scheme) => scheme,
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };

    if cli.check {
        let min = scheme.min_errors();
        let max = scheme.max_errors();
        println!("valid: {}", is_valid(&scheme));
        println!("complete: {}", is_complete(&scheme, min, max));
        println!("non-redundant: {}", is_non_redundant(&scheme, min, max));
        return;
    }

    if cli.node_count {
        match node_count(&scheme, cli.length, cli.sigma, cli.edit) {
            Ok(count) => println!("{count}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if cli.weighted_node_count {
        let text_length = cli.text_length as f64;
        match weighted_node_count(&scheme, cli.length, cli.sigma, cli.edit, text_length) {
            Ok(count) => println!("{count}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    match layout_scheme(&scheme, cli.length, cli.sigma, cli.edit, &style.layout) {
        Ok(layout) => println!("{}", render_svg(&layout, &style.svg)),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"scheme-viz - Visualize approximate-matching search schemes

USAGE:
    scheme-viz [OPTIONS] [FILE]
    scheme-viz --generate pigeon --max-errors 2 | scheme-viz -n 12

INPUT FORMAT:
    One search per line, three whitespace-separated digit strings:
    block order, cumulative lower bounds, cumulative upper bounds.
    Lines starting with '#' are comments.

        # pi    L    U
        012 000 022
        210 000 012

OPTIONS:
    -n, --length <N>        Sequence length to expand to (default 10)
    -s, --sigma <N>         Alphabet size (default 4)
    -e, --edit              Include insertions and deletions
    -c, --config <FILE>     Style file (TOML)
    -g, --generate <NAME>   Emit a generated scheme instead of reading one
    --min-errors <N>        Error budget lower bound for --generate
    --max-errors <N>        Error budget upper bound for --generate
    --list-generators       List available generators
    --check                 Report validity, completeness, non-redundancy
    --node-count            Print enumerated node count
    --weighted-node-count   Print expected visited nodes for --text-length
    -h, --help              Print help

QUICK START:
    scheme-viz --generate pigeon --max-errors 2 | scheme-viz > scheme.svg"#
    );
}
