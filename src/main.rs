use std::{env::args, fs, process::exit};

use golgen::{next_generation, Generation};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = args().nth(1).unwrap_or_else(|| {
        eprintln!("usage: golgen <seed-path> [generations]");
        exit(1);
    });
    let generations: u64 = match args().nth(2) {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            eprintln!("[error] generation count must be an integer, got {arg:?}");
            exit(1);
        }),
        None => 1,
    };

    let content = fs::read_to_string(&path).unwrap_or_else(|err| {
        eprintln!("[error] cannot read {path}: {err}");
        exit(1);
    });
    let mut generation: Generation = content.parse().unwrap_or_else(|err| {
        eprintln!("[error] invalid seed pattern: {err}");
        exit(1);
    });
    info!(path = %path, cells = generation.len(), "loaded seed pattern");

    for _ in 0..generations {
        generation = next_generation(&generation);
    }
    info!(generations, cells = generation.len(), "stepped simulation");

    println!("{generation}");
}
