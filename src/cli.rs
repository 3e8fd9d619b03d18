// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "portfolio-scene")]
#[command(about = "Animated portfolio page over a procedural 3D backdrop", long_about = None)]
pub struct Cli {
    /// Render the backdrop only, without the page overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Seed for the particle fields; omit for a fresh layout each run
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file overriding scene and timing defaults
    #[arg(long, env = "PORTFOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start on the revealed page
    #[arg(long = "skip-preloader", default_value = "false")]
    pub skip_preloader: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["portfolio-scene"]);
        assert!(!cli.no_ui);
        assert!(!cli.skip_preloader);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "portfolio-scene",
            "--no-ui",
            "--seed",
            "42",
            "--config",
            "scene.json",
            "--skip-preloader",
        ]);
        assert!(cli.no_ui);
        assert!(cli.skip_preloader);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.config, Some(PathBuf::from("scene.json")));
    }
}
