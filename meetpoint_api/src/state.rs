use std::borrow::Cow;

use meetpoint_core::{
    campus::{self, CampusRecommender},
    network_file::{CampusNetworkFile, SubwayNetworkFile},
    subway::{self, SubwayRecommender},
};

use crate::config::Config;

pub struct AppState {
    pub campus: Cow<'static, CampusRecommender>,
    pub subway: Cow<'static, SubwayRecommender>,
}

impl AppState {
    pub fn load(config: &Config) -> anyhow::Result<Self> {
        let campus = match &config.campus_network {
            Some(path) => Cow::Owned(CampusNetworkFile::from_path(path)?.build()?),
            None => Cow::Borrowed(campus::built_in_recommender()),
        };

        let subway = match &config.subway_network {
            Some(path) => Cow::Owned(SubwayNetworkFile::from_path(path)?.build()?),
            None => Cow::Borrowed(subway::built_in_recommender()),
        };

        Ok(AppState { campus, subway })
    }
}
