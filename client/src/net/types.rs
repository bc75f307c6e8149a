//! Wire DTOs for the inspection-management backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Optional fields default
//! rather than fail so older records missing newer columns still render.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Aggregate dashboard counters and activity feed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub transformer_count: Option<u32>,
    #[serde(default)]
    pub inspection_count: Option<u32>,
    #[serde(default)]
    pub pending_count: Option<u32>,
    #[serde(default)]
    pub in_progress_count: Option<u32>,
    #[serde(default)]
    pub completed_count: Option<u32>,
    /// Overall health score as a display percentage (0–100).
    #[serde(default)]
    pub health_score: Option<u32>,
    #[serde(default)]
    pub recent_activity: Vec<String>,
}

/// One inspection record as listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub id: String,
    pub branch: String,
    pub transformer_no: String,
    /// `YYYY-MM-DD`.
    pub date_of_inspection: String,
    /// `YYYY-MM-DD`, if scheduled.
    #[serde(default)]
    pub maintenance_date: Option<String>,
    /// `HH:MM:SS`.
    #[serde(default)]
    pub time: Option<String>,
    /// Workflow status: `pending`, `in_progress`, or `completed`.
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "pending".to_owned()
}

/// Payload for creating an inspection record.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInspection {
    pub branch: String,
    pub transformer_no: String,
    pub date_of_inspection: String,
    pub maintenance_date: String,
    /// `HH:MM` or `HH:MM:SS`; normalized before transmission.
    pub time: String,
}

/// A manually drawn annotation on the thermal image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// An anomaly reported by the detection pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
    pub label: String,
    /// Detection confidence as a display percentage (0–100).
    #[serde(default)]
    pub confidence: Option<u32>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Full detail payload for the inspection page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionDetail {
    #[serde(flatten)]
    pub inspection: Inspection,
    #[serde(default)]
    pub baseline_image_url: Option<String>,
    #[serde(default)]
    pub thermal_image_url: Option<String>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub anomalies: Vec<Anomaly>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}
