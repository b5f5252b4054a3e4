use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the top-matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TopMatchesQuery {
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}
