use anyhow::{Context, Result};
use conesim::{SimConfig, Simulation};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = SimConfig::default();
    let sim = Simulation::run(&config).context("Simulation failed")?;
    sim.log_summary();

    let files = sim
        .plot(&config.plot_dir)
        .with_context(|| format!("Failed to render plots into {}", config.plot_dir.display()))?;
    info!(count = files.len(), dir = %config.plot_dir.display(), "plots written");
    Ok(())
}
