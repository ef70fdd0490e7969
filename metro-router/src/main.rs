use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use metro_router::lines::{NetworkSpec, ankara};
use metro_router::network::Network;
use metro_router::planner::{Planner, SearchConfig};

/// Environment variable naming a JSON network description.
const NETWORK_ENV: &str = "METRO_NETWORK";

/// Queries run when no origin/destination pairs are given.
const DEMO_QUERIES: &[(&str, &str)] = &[
    ("Batıkent", "Kızılay"),
    ("Eryaman 5", "Ümitköy"),
    ("Dikimevi", "Gazino"),
    ("Sincan", "Çayyolu"),
];

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let network = match load_network() {
        Ok(network) => network,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() % 2 != 0 {
        eprintln!("usage: metro-router [ORIGIN DESTINATION]...");
        return ExitCode::FAILURE;
    }
    let queries: Vec<(&str, &str)> = if args.is_empty() {
        DEMO_QUERIES.to_vec()
    } else {
        args.chunks(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
            .collect()
    };

    let config = SearchConfig::default();
    let planner = Planner::new(&network, &config);

    println!("{}", "-".repeat(100));
    for (start, goal) in queries {
        print_query(&planner, start, goal);
        println!("{}", "-".repeat(100));
    }

    ExitCode::SUCCESS
}

/// Network from `$METRO_NETWORK`, or the built-in Ankara network.
fn load_network() -> Result<Network, String> {
    let spec = match std::env::var_os(NETWORK_ENV) {
        Some(path) => NetworkSpec::load(&path)
            .map_err(|e| format!("Failed to load network description: {e}"))?,
        None => ankara(),
    };
    spec.build()
        .map_err(|e| format!("Failed to build network: {e}"))
}

fn print_query(planner: &Planner<'_>, start: &str, goal: &str) {
    println!("From: {start}");
    println!("To:   {goal}");

    match planner.least_transfers(start, goal) {
        Ok(route) => println!(
            "Fewest transfers: {} | transfers: {}",
            join(&route.stops),
            route.transfers()
        ),
        Err(e) => eprintln!("Fewest transfers: {e}"),
    }

    match planner.fastest(start, goal) {
        Ok(route) => println!(
            "Fastest:          {} | time: {} min | fare: {}",
            join(&route.stops),
            route.duration().num_minutes(),
            route.fare
        ),
        Err(e) => eprintln!("Fastest: {e}"),
    }
}

fn join(stops: &[metro_router::domain::Station]) -> String {
    stops
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}
