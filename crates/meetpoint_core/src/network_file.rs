//! JSON descriptions of campus maps and subway networks, used in place of
//! the built-in tables.

use std::{fs::File, io::BufReader, io::Read, path::Path};

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    campus::{CampusGraph, CampusLocation, CampusRecommender},
    error::NetworkError,
    subway::{SubwayNetworkBuilder, SubwayRecommender},
    weighting::Weight,
};

fn open(path: &Path) -> Result<BufReader<File>, NetworkError> {
    let file = File::open(path).map_err(|source| NetworkError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusNetworkFile {
    pub locations: Vec<CampusLocation>,
    pub edges: Vec<(String, String)>,
}

impl CampusNetworkFile {
    pub fn from_path(path: &Path) -> Result<Self, NetworkError> {
        let file = Self::from_reader(open(path)?)?;
        info!(path = %path.display(), "loaded campus network file");
        Ok(file)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, NetworkError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn build(&self) -> Result<CampusRecommender, NetworkError> {
        let mut codes = FxHashSet::default();
        for location in &self.locations {
            if !codes.insert(location.code.as_str()) {
                return Err(NetworkError::DuplicateLocation(location.code.clone()));
            }
        }

        let campus = CampusGraph::from_tables(
            self.locations
                .iter()
                .map(|location| (location.code.as_str(), location.label.as_str())),
            self.edges.iter().map(|(a, b)| (a.as_str(), b.as_str())),
        );

        Ok(CampusRecommender::new(campus))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LineDefinition {
    pub name: String,
    pub stations: Vec<String>,
}

/// Station orderings are used exactly as written, including repeats.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubwayNetworkFile {
    pub lines: Vec<LineDefinition>,
    #[serde(default)]
    pub penalized_lines: Vec<String>,
    #[serde(default)]
    pub transfers: Vec<(String, String)>,
    pub transfer_cost: Option<Weight>,
    pub penalty_cost: Option<Weight>,
}

impl SubwayNetworkFile {
    pub fn from_path(path: &Path) -> Result<Self, NetworkError> {
        let file = Self::from_reader(open(path)?)?;
        info!(path = %path.display(), lines = file.lines.len(), "loaded subway network file");
        Ok(file)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, NetworkError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn build(&self) -> Result<SubwayRecommender, NetworkError> {
        let mut builder = SubwayNetworkBuilder::default();

        for line in &self.lines {
            if line.stations.is_empty() {
                return Err(NetworkError::EmptyLine(line.name.clone()));
            }
            builder.add_line(&line.name, &line.stations);
        }

        for line in &self.penalized_lines {
            if !self.lines.iter().any(|definition| &definition.name == line) {
                return Err(NetworkError::UnknownPenalizedLine(line.clone()));
            }
            builder.penalize_line(line);
        }

        for (a, b) in &self.transfers {
            builder.add_transfer(a, b);
        }

        let mut recommender = SubwayRecommender::new(builder.build());
        if self.transfer_cost.is_some() || self.penalty_cost.is_some() {
            let transfer_cost = self.transfer_cost.unwrap_or(recommender.transfer_cost());
            let penalty_cost = self.penalty_cost.unwrap_or(recommender.penalty_cost());
            recommender = recommender.with_costs(transfer_cost, penalty_cost);
        }

        Ok(recommender)
    }
}
