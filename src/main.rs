use std::path::PathBuf;

use clap::Parser;
use dotenv::dotenv;
use log::info;

use geopoints::{Config, CostPolicy, MemoryStore, PointId, Router};

/// Finds a route between two points of a points/lines dataset
/// and prints it as JSON.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Identifier of the starting point.
    from: i64,
    /// Identifier of the goal point.
    to: i64,

    /// Dataset to load. Falls back to `GEOPOINTS_DATA`.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// `by_distance` or `by_score`. Falls back to `GEOPOINTS_POLICY`.
    #[arg(short, long)]
    policy: Option<CostPolicy>,

    /// Cap on positions reached per search.
    #[arg(long)]
    node_limit: Option<usize>,

    /// Multiplier applied to planar distance.
    #[arg(long)]
    scale: Option<f64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing `.env` file is not an error.
    dotenv().ok();

    #[cfg(feature = "tracing")]
    geopoints::util::trace::initialize_tracer();
    #[cfg(not(feature = "tracing"))]
    env_logger::init();

    let args = Args::parse();
    let mut config = Config::from_env().map_err(geopoints::Error::from)?;

    if let Some(data) = args.data {
        config.data = Some(data);
    }
    if let Some(policy) = args.policy {
        config.policy = policy;
    }
    if let Some(limit) = args.node_limit {
        config.node_limit = Some(limit);
    }
    if let Some(scale) = args.scale {
        config = config
            .with_distance_scale(scale)
            .map_err(geopoints::Error::from)?;
    }

    let data = config
        .data
        .clone()
        .ok_or("no dataset given, pass --data or set GEOPOINTS_DATA")?;

    let store = MemoryStore::from_path(&data).map_err(geopoints::Error::from)?;
    info!("Loaded {} points from {}", store.size(), data.display());

    let router = Router::from_config(store, &config).map_err(geopoints::Error::from)?;
    let route = router
        .route(PointId::new(args.from), PointId::new(args.to), config.policy)
        .map_err(geopoints::Error::from)?;

    println!("{}", serde_json::to_string_pretty(&route)?);
    Ok(())
}
