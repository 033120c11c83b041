use clap::Parser;

/// Provision `data/images` next to the executable and drop a placeholder file in it.
#[derive(Parser, Debug)]
#[command(name = "imgdir", version, about = "Prepare the image data directory")]
pub struct Cli {
    /// Report what would be created without touching the filesystem.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_a_real_run() {
        let cli = Cli::try_parse_from(["imgdir"]).unwrap();
        assert!(!cli.dry_run);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn counts_verbosity_and_dry_run() {
        let cli = Cli::try_parse_from(["imgdir", "-vv", "--dry-run"]).unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_path_arguments() {
        assert!(Cli::try_parse_from(["imgdir", "/tmp/elsewhere"]).is_err());
    }
}
