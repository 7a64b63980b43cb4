use std::{borrow::Cow, path::Path};

use meetpoint_core::{
    campus::{self, CampusRecommender},
    network_file::{CampusNetworkFile, SubwayNetworkFile},
    subway::{self, SubwayRecommender},
};

pub fn campus_recommender(
    network: Option<&Path>,
) -> anyhow::Result<Cow<'static, CampusRecommender>> {
    match network {
        Some(path) => Ok(Cow::Owned(CampusNetworkFile::from_path(path)?.build()?)),
        None => Ok(Cow::Borrowed(campus::built_in_recommender())),
    }
}

pub fn subway_recommender(
    network: Option<&Path>,
) -> anyhow::Result<Cow<'static, SubwayRecommender>> {
    match network {
        Some(path) => Ok(Cow::Owned(SubwayNetworkFile::from_path(path)?.build()?)),
        None => Ok(Cow::Borrowed(subway::built_in_recommender())),
    }
}
