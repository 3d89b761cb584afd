use clap::Parser;
use radiusmap::server;
use radiusmap::service_area::{Gazetteer, ServiceAreaResolver};
use std::path::PathBuf;

/// Radiusmap — service-area resolution for home-service businesses.
///
/// Finds every known city within a radius of a center city (same state
/// only), grouped by county, nearest county first.
///
/// Examples:
///   radiusmap Springfield --state IL
///   radiusmap --city "Fort Worth" --state TX --radius 25
///   radiusmap --city Nixa --state MO --dataset cities.json
///   radiusmap --serve --port 8080
#[derive(Parser)]
#[command(name = "radiusmap", version, about, long_about = None)]
struct Cli {
    /// City name (positional). Example: radiusmap Springfield --state IL
    #[arg(index = 1)]
    city_positional: Option<String>,

    /// City name (named). Example: --city "Fort Worth"
    #[arg(long)]
    city: Option<String>,

    /// 2-letter state code. Example: --state IL
    #[arg(long, short = 's')]
    state: Option<String>,

    /// Service radius in miles.
    #[arg(long, short = 'r', default_value_t = 30.0)]
    radius: f64,

    /// Path to a JSON gazetteer (array of {city, state, county, lat, lng}).
    /// Defaults to the built-in dataset.
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Run the HTTP API server instead of a one-shot resolution.
    #[arg(long)]
    serve: bool,

    /// Server bind host.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server bind port.
    #[arg(long, short = 'p', default_value_t = 8080)]
    port: u16,
}

fn main() {
    let cli = Cli::parse();

    // ── Load the gazetteer ──────────────────────────────────────

    let gazetteer = match &cli.dataset {
        Some(path) => Gazetteer::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => Gazetteer::builtin(),
    };
    let resolver = ServiceAreaResolver::new(gazetteer);

    // ── Server mode ─────────────────────────────────────────────

    if cli.serve {
        let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("Error: Cannot start async runtime: {}", e);
            std::process::exit(1);
        });
        runtime.block_on(server::start(resolver, &cli.host, cli.port));
        return;
    }

    // ── One-shot resolution ─────────────────────────────────────

    let city = cli
        .city
        .as_deref()
        .or(cli.city_positional.as_deref())
        .unwrap_or_else(|| {
            usage_and_exit("No city specified.");
        });
    let state = cli.state.as_deref().unwrap_or_else(|| {
        usage_and_exit("No state specified.");
    });

    let resolution = resolver.resolve(city, state, cli.radius).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    // Human summary to stderr, JSON to stdout.
    eprintln!(
        "  \u{1F4CD} {}, {} ({:.4}, {:.4})",
        resolution.center_city.trim(),
        state.trim().to_uppercase(),
        resolution.center_coords.lat,
        resolution.center_coords.lng,
    );
    eprintln!(
        "  \u{1F9ED} {} mile radius: {} cities in {} counties",
        cli.radius,
        resolution.cities_found,
        resolution.service_areas.len(),
    );
    for group in &resolution.service_areas {
        eprintln!("    {}: {}", group.county, group.cities.join(", "));
    }

    println!("{}", serde_json::to_string_pretty(&resolution).unwrap());
}

fn usage_and_exit(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  radiusmap Springfield --state IL");
    eprintln!("  radiusmap --city \"Fort Worth\" --state TX --radius 25");
    eprintln!("  radiusmap --city Nixa --state MO --dataset cities.json");
    eprintln!("  radiusmap --serve --port 8080");
    std::process::exit(1);
}
