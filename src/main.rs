use anyhow::Result;
use clap::Parser;
use circuit_glow::links::LinkStrategy;
use circuit_glow::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "circuit-glow")]
#[command(about = "Drifting points linked by glowing lines")]
#[command(version)]
struct Cli {
    /// Config file path (defaults to the user config dir)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Number of points
    #[arg(short, long)]
    points: Option<usize>,

    /// Seed for a reproducible layout
    #[arg(long)]
    seed: Option<u64>,

    /// Find close pairs with a spatial grid instead of checking every pair
    #[arg(long)]
    grid: bool,

    /// Start fullscreen
    #[arg(long)]
    fullscreen: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("circuit_glow=debug,wgpu=warn")
        } else {
            EnvFilter::new("circuit_glow=info,wgpu=error")
        }
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = Config::load(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);
    info!(?config, "Loaded configuration");

    circuit_glow::app::run(config)?;
    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(points) = cli.points {
        config.points.count = points;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.grid {
        config.links.strategy = LinkStrategy::Grid;
    }
    if cli.fullscreen {
        config.window.fullscreen = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config() {
        let cli = Cli::parse_from(["circuit-glow", "--points", "500", "--seed", "3", "--grid"]);
        let mut config = Config::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config.points.count, 500);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.links.strategy, LinkStrategy::Grid);
        assert!(!config.window.fullscreen);
    }

    #[test]
    fn no_flags_leave_config_alone() {
        let cli = Cli::parse_from(["circuit-glow"]);
        let mut config = Config::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config, Config::default());
    }
}
