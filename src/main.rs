use anyhow::{Context, Result};
use clap::Parser;
use neurite_core::init_logging;
use neurite_lib::model::config::HostConfig;
use neurite_lib::model::world::World;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of generations to run
    #[arg(short, long, default_value_t = 100)]
    generations: u64,

    /// RNG seed, overrides the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the first entity's network as JSON when the run ends
    #[arg(long)]
    dump: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = HostConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }

    let mut world = World::new(config)?;
    for _ in 0..args.generations {
        let summary = world.run_generation()?;
        tracing::info!(
            generation = summary.generation,
            survivors = summary.survivors,
            population = summary.population,
            neurons = summary.neurons,
            connections = summary.connections,
            "Generation"
        );
    }

    tracing::info!(
        ticks = world.metrics.tick_count(),
        neurons_walked = world.metrics.neurons_walked(),
        connections_refreshed = world.metrics.connections_refreshed(),
        elapsed_ms = world.metrics.elapsed().as_millis() as u64,
        "Run finished"
    );

    if let Some(path) = args.dump {
        match world.entities.first() {
            Some(entity) => {
                let json = serde_json::to_string_pretty(&entity.agent.snapshot())?;
                std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::info!(id = %entity.id, path = %path.display(), "Network dumped");
            }
            None => tracing::warn!("Population is empty, nothing to dump"),
        }
    }

    Ok(())
}
