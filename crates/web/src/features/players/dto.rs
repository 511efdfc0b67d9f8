use osu_api::GameMode;
use serde::Deserialize;
use tracker::RecentPlayFilter;
use utoipa::IntoParams;
use validator::Validate;

use crate::error::WebError;

#[derive(Debug, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct RecentPlayQuery {
    /// Only consider plays on this beatmap
    #[validate(length(min = 1, max = 16))]
    pub beatmap_id: Option<String>,
    /// Only consider full-combo plays: true, false, 1 or 0
    pub perfect: Option<String>,
}

impl RecentPlayQuery {
    pub fn filter(&self) -> Result<RecentPlayFilter, WebError> {
        let perfect_only = match self.perfect.as_deref().map(str::trim) {
            None | Some("") => false,
            Some(flag) if flag == "1" || flag.eq_ignore_ascii_case("true") => true,
            Some(flag) if flag == "0" || flag.eq_ignore_ascii_case("false") => false,
            Some(other) => {
                return Err(WebError::BadRequest(format!(
                    "perfect must be true, false, 1 or 0, got '{}'",
                    other
                )));
            }
        };

        Ok(RecentPlayFilter {
            beatmap_id: self.beatmap_id.clone(),
            perfect_only,
        })
    }
}

#[derive(Debug, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct BestScoresQuery {
    /// Game mode: osu, taiko, catch, mania or 0-3. Defaults to osu
    pub mode: Option<String>,
    /// Number of scores, 1-100. 0 or absent means 10
    #[validate(range(min = 0, max = 100))]
    pub limit: Option<i32>,
}

impl BestScoresQuery {
    pub fn mode(&self) -> Result<Option<GameMode>, WebError> {
        self.mode
            .as_deref()
            .map(|mode| mode.parse::<GameMode>().map_err(|e| WebError::BadRequest(e.to_string())))
            .transpose()
    }

    pub fn limit(&self) -> i32 {
        self.limit.unwrap_or(0)
    }
}
