use std::path::PathBuf;

use clap::Args;
use meetpoint_core::{Recommendation, weighting::Weight};
use tracing::info;

use crate::networks::{campus_recommender, subway_recommender};

#[derive(Args)]
pub struct CampusArgs {
    /// Building code of the seller's default location
    #[arg(short, long)]
    seller: String,

    /// Building code chosen by the buyer
    #[arg(short, long)]
    buyer: String,

    /// Campus map JSON file to use instead of the built-in one
    #[arg(short, long)]
    network: Option<PathBuf>,

    /// Print the recommendation as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct SubwayArgs {
    /// Station of the seller
    #[arg(short, long)]
    pub(crate) seller: String,

    /// Station of the buyer
    #[arg(short, long)]
    pub(crate) buyer: String,

    /// Subway network JSON file to use instead of the built-in one
    #[arg(short, long)]
    pub(crate) network: Option<PathBuf>,

    /// Cost of a walking transfer between stations that share no line
    #[arg(long)]
    pub(crate) transfer_cost: Option<Weight>,

    /// Cost of riding a penalized line between two stations
    #[arg(long)]
    pub(crate) penalty_cost: Option<Weight>,

    /// Print the recommendation as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub fn run_campus(args: CampusArgs) -> anyhow::Result<()> {
    let recommender = campus_recommender(args.network.as_deref())?;

    info!("Recommending campus meeting point {} -> {}", args.seller, args.buyer);
    let recommendation = recommender.recommend(&args.seller, &args.buyer);

    print(&recommendation, args.json)
}

pub fn run_subway(args: SubwayArgs) -> anyhow::Result<()> {
    let mut recommender = subway_recommender(args.network.as_deref())?;

    if args.transfer_cost.is_some() || args.penalty_cost.is_some() {
        let transfer_cost = args.transfer_cost.unwrap_or(recommender.transfer_cost());
        let penalty_cost = args.penalty_cost.unwrap_or(recommender.penalty_cost());
        recommender = std::borrow::Cow::Owned(
            recommender
                .into_owned()
                .with_costs(transfer_cost, penalty_cost),
        );
    }

    info!("Recommending subway meeting point {} -> {}", args.seller, args.buyer);
    let recommendation = recommender.recommend(&args.seller, &args.buyer);

    print(&recommendation, args.json)
}

fn print(recommendation: &Recommendation, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(recommendation)?);
        return Ok(());
    }

    match recommendation {
        Recommendation::Found(meeting_point) => {
            println!(
                "Meet at {} ({})",
                meeting_point.midpoint_label, meeting_point.midpoint
            );
            println!("Path: {}", meeting_point.path.join(" -> "));
            println!("Cost: {}", meeting_point.weight);
        }
        Recommendation::NotFound { reason } => {
            println!("Cannot recommend a meeting point: {reason}");
        }
    }

    Ok(())
}
