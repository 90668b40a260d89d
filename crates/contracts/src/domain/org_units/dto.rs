use serde::{Deserialize, Serialize};

/// Query for the departments selectable under a direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentsRequest {
    /// `None` means "all directions"
    #[serde(default)]
    pub direction: Option<String>,
}

/// Departments offered for the current direction selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentsResponse {
    pub departments: Vec<String>,
}
