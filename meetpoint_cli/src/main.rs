use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{
    catalog::CatalogArgs,
    recommend::{CampusArgs, SubwayArgs},
};

mod catalog;
mod networks;
mod recommend;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a meeting point on campus
    #[command(visible_alias = "c")]
    Campus {
        #[command(flatten)]
        args: CampusArgs,
    },
    /// Recommend a meeting station off campus
    #[command(visible_alias = "s")]
    Subway {
        #[command(flatten)]
        args: SubwayArgs,
    },
    /// List campus locations
    Locations {
        #[command(flatten)]
        args: CatalogArgs,
    },
    /// List subway stations and their lines
    Stations {
        #[command(flatten)]
        args: CatalogArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Campus { args } => recommend::run_campus(args)?,
        Commands::Subway { args } => recommend::run_subway(args)?,
        Commands::Locations { args } => catalog::run_locations(args)?,
        Commands::Stations { args } => catalog::run_stations(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subway_costs() {
        let cli = Cli::try_parse_from([
            "meetpoint",
            "subway",
            "--seller",
            "회기",
            "--buyer",
            "안암",
            "--penalty-cost",
            "7",
        ])
        .unwrap();

        let Commands::Subway { args } = cli.command else {
            panic!("expected the subway command");
        };
        assert_eq!(args.seller, "회기");
        assert_eq!(args.buyer, "안암");
        assert_eq!(args.penalty_cost, Some(7));
        assert_eq!(args.transfer_cost, None);
        assert!(!args.json);
    }

    #[test]
    fn test_seller_is_required() {
        assert!(Cli::try_parse_from(["meetpoint", "campus", "--buyer", "A"]).is_err());
    }
}
