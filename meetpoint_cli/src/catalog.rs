use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;

use crate::networks::{campus_recommender, subway_recommender};

#[derive(Args)]
pub struct CatalogArgs {
    /// Network JSON file to list instead of the built-in one
    #[arg(short, long)]
    network: Option<PathBuf>,

    /// Print the listing as JSON
    #[arg(long)]
    json: bool,
}

pub fn run_locations(args: CatalogArgs) -> anyhow::Result<()> {
    let recommender = campus_recommender(args.network.as_deref())?;
    let locations = recommender.campus().locations();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&locations)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Code", "Label"]);
    for location in locations {
        table.add_row(vec![location.code, location.label]);
    }
    println!("{table}");

    Ok(())
}

pub fn run_stations(args: CatalogArgs) -> anyhow::Result<()> {
    let recommender = subway_recommender(args.network.as_deref())?;
    let stations = recommender.network().stations();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stations)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Station", "Lines"]);
    for station in stations {
        table.add_row(vec![station.name, station.lines.join(", ")]);
    }
    println!("{table}");

    Ok(())
}
