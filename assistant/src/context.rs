//! Context builders — render structured dashboard/inspection snapshots into
//! the compact text block injected alongside the system prompt.
//!
//! DESIGN
//! ======
//! Rendering is a pure function of the snapshot: fixed field order, one line
//! per set field, unset fields omitted entirely (no placeholder lines). The
//! caller supplies final display values — no rounding or unit conversion
//! happens here.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

/// Sentinel returned when no recognized field is set, so the completion
/// request always carries non-empty context.
pub const NO_CONTEXT_FALLBACK: &str = "no context available";

/// Only the first N recent-activity entries are rendered.
const RECENT_ACTIVITY_LIMIT: usize = 3;

// =============================================================================
// DASHBOARD CONTEXT
// =============================================================================

/// Read-only snapshot of dashboard-level data supplied by the calling
/// surface. Every field is optional; the builder never persists it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardContext {
    pub current_view: Option<String>,
    pub transformer_count: Option<u32>,
    pub inspection_count: Option<u32>,
    pub pending_count: Option<u32>,
    pub in_progress_count: Option<u32>,
    pub completed_count: Option<u32>,
    /// Health score as a final display percentage (0–100).
    pub health_score: Option<u32>,
    pub recent_activity: Vec<String>,
}

impl DashboardContext {
    /// Render the snapshot as newline-joined lines in fixed order:
    /// view label, counts, health score, then recent activity (first 3).
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        if let Some(view) = &self.current_view {
            lines.push(format!("Current View: {view}"));
        }
        if let Some(count) = self.transformer_count {
            lines.push(format!("Total Transformers: {count}"));
        }
        if let Some(count) = self.inspection_count {
            lines.push(format!("Total Inspections: {count}"));
        }
        if let Some(count) = self.pending_count {
            lines.push(format!("Pending Inspections: {count}"));
        }
        if let Some(count) = self.in_progress_count {
            lines.push(format!("In Progress: {count}"));
        }
        if let Some(count) = self.completed_count {
            lines.push(format!("Completed: {count}"));
        }
        if let Some(score) = self.health_score {
            lines.push(format!("System Health Score: {score}%"));
        }
        if !self.recent_activity.is_empty() {
            lines.push("Recent Activity:".to_owned());
            for (index, entry) in self
                .recent_activity
                .iter()
                .take(RECENT_ACTIVITY_LIMIT)
                .enumerate()
            {
                lines.push(format!("{}. {entry}", index + 1));
            }
        }
        finish(lines)
    }
}

// =============================================================================
// INSPECTION CONTEXT
// =============================================================================

/// A drawn annotation carried into the context block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContextAnnotation {
    pub label: String,
    pub description: Option<String>,
}

/// An AI-detected anomaly carried into the context block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContextAnomaly {
    pub label: String,
    /// Detection confidence as a final display percentage (0–100).
    pub confidence: Option<u32>,
    pub detail: Option<String>,
}

/// Read-only snapshot of a single inspection supplied by the calling
/// surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InspectionContext {
    pub transformer_no: Option<String>,
    pub branch: Option<String>,
    pub inspection_date: Option<String>,
    pub status: Option<String>,
    pub has_baseline_image: Option<bool>,
    pub has_thermal_image: Option<bool>,
    pub annotations: Vec<ContextAnnotation>,
    pub anomalies: Vec<ContextAnomaly>,
    pub annotation_count: Option<u32>,
    pub anomaly_count: Option<u32>,
    pub summary: Option<String>,
    pub recommendations: Vec<String>,
}

impl InspectionContext {
    /// Render the snapshot as newline-joined lines in fixed order:
    /// identity/location fields, media-presence flags, annotation list,
    /// AI-detected findings, aggregate counts, summary, recommendations.
    /// Annotation and anomaly lists render in full, 1-based enumerated,
    /// each optionally followed by an indented detail line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        if let Some(transformer_no) = &self.transformer_no {
            lines.push(format!("Transformer No: {transformer_no}"));
        }
        if let Some(branch) = &self.branch {
            lines.push(format!("Branch: {branch}"));
        }
        if let Some(date) = &self.inspection_date {
            lines.push(format!("Inspection Date: {date}"));
        }
        if let Some(status) = &self.status {
            lines.push(format!("Status: {status}"));
        }
        if let Some(present) = self.has_baseline_image {
            lines.push(format!("Baseline Image: {}", availability(present)));
        }
        if let Some(present) = self.has_thermal_image {
            lines.push(format!("Thermal Image: {}", availability(present)));
        }
        if !self.annotations.is_empty() {
            lines.push("Annotations:".to_owned());
            for (index, annotation) in self.annotations.iter().enumerate() {
                lines.push(format!("{}. {}", index + 1, annotation.label));
                if let Some(description) = &annotation.description {
                    lines.push(format!("   {description}"));
                }
            }
        }
        if !self.anomalies.is_empty() {
            lines.push("Detected Anomalies:".to_owned());
            for (index, anomaly) in self.anomalies.iter().enumerate() {
                match anomaly.confidence {
                    Some(confidence) => {
                        lines.push(format!("{}. {} ({confidence}% confidence)", index + 1, anomaly.label));
                    }
                    None => lines.push(format!("{}. {}", index + 1, anomaly.label)),
                }
                if let Some(detail) = &anomaly.detail {
                    lines.push(format!("   {detail}"));
                }
            }
        }
        if let Some(count) = self.annotation_count {
            lines.push(format!("Annotation Count: {count}"));
        }
        if let Some(count) = self.anomaly_count {
            lines.push(format!("Anomaly Count: {count}"));
        }
        if let Some(summary) = &self.summary {
            lines.push(format!("Summary: {summary}"));
        }
        if !self.recommendations.is_empty() {
            lines.push("Recommendations:".to_owned());
            for (index, recommendation) in self.recommendations.iter().enumerate() {
                lines.push(format!("{}. {recommendation}", index + 1));
            }
        }
        finish(lines)
    }
}

fn availability(present: bool) -> &'static str {
    if present { "available" } else { "not uploaded" }
}

fn finish(lines: Vec<String>) -> String {
    if lines.is_empty() {
        NO_CONTEXT_FALLBACK.to_owned()
    } else {
        lines.join("\n")
    }
}
