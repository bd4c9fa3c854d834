use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sl", about = concat!("[/] slate v", env!("CARGO_PKG_VERSION"), " - a clean slate every session"), version)]
pub struct Cli {
    /// Read colors and UI settings from this TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start with a few sample items on the board
    #[arg(long)]
    pub sample: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config_and_sample_flags() {
        let cli = Cli::parse_from(["sl", "--config", "/tmp/slate.toml", "--sample"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/slate.toml")));
        assert!(cli.sample);
    }

    #[test]
    fn defaults_to_no_config() {
        let cli = Cli::parse_from(["sl"]);
        assert!(cli.config.is_none());
        assert!(!cli.sample);
    }
}
