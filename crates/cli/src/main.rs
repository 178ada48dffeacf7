use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rental_kernel::Settings;

#[derive(Debug, Parser)]
#[command(
    name = "rental",
    about = "Interactive video rental catalog."
)]
struct Cli {
    /// Directory holding base.toml and <env>.toml
    #[arg(long, value_name = "PATH")]
    config_dir: Option<PathBuf>,

    /// Start with an empty catalog instead of the demo inventory
    #[arg(long)]
    no_seed: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings =
        Settings::load_from(cli.config_dir).with_context(|| "failed to load rental settings")?;
    if cli.no_seed {
        settings.catalog.seed = false;
    }

    rental_telemetry::init(&settings.telemetry).with_context(|| "failed to initialize telemetry")?;

    tracing::info!(
        env = ?settings.environment,
        seed = settings.catalog.seed,
        "rental bootstrap complete"
    );

    let mut catalog = rental_app::bootstrap(&settings.catalog);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    rental_console::run(&mut catalog, stdin.lock(), stdout.lock())
        .with_context(|| "console session failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_seed_flag_parses() {
        let cli = Cli::try_parse_from(["rental", "--no-seed", "--config-dir", "conf"]).unwrap();
        assert!(cli.no_seed);
        assert_eq!(cli.config_dir, Some(PathBuf::from("conf")));
    }
}
