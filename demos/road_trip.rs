use std::env;

use towngraph::loader;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set `RUST_LOG=towngraph=debug` to see graph mutations.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/demos/towns.txt").to_owned());
    let atlas = loader::load_file(&path)?;

    println!("Towns: {}", atlas.all_towns().join(", "));
    println!("Roads: {}", atlas.all_roads().join(", "));

    for (from, to) in [("Frederick", "Annapolis"), ("Leesburg", "Baltimore")] {
        let route = atlas.route(from, to)?;

        match route.distance() {
            Some(distance) => {
                println!("\n{from} to {to}, {distance} mi:");
                for line in route.to_lines() {
                    println!("  {line}");
                }
            }
            None => println!("\n{to} is not reachable from {from}"),
        }
    }

    Ok(())
}
