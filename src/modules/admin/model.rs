use serde::{Deserialize, Serialize};

/// Service facts only administrators may read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminOverview {
    pub service: String,
    pub version: String,
    /// Role tags callers may carry.
    pub roles: Vec<String>,
    /// Role tags routes may require; the empty tag means no requirement.
    pub required_roles: Vec<String>,
}
