use grflex::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EstimateDto {
    #[serde(flatten)]
    pub estimate: Estimate,
    pub has_input: bool,
    pub activator_rule: String,
    pub matting_recommendation: String,
}

impl EstimateDto {
    pub fn from(estimate: Estimate, estimator: &Estimator) -> Self {
        Self {
            has_input: !estimate.is_empty(),
            activator_rule: estimator.activator_rule(estimate.season),
            matting_recommendation: estimator.matting_recommendation(&estimate),
            estimate,
        }
    }
}
