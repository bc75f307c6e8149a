//! Workflow-status badge for inspection records.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

/// Map a backend status value to its display label and badge modifier
/// class. Unknown values pass through verbatim so new backend states still
/// render something sensible.
#[must_use]
pub fn status_display(status: &str) -> (String, &'static str) {
    match status {
        "pending" => ("Pending".to_owned(), "badge--pending"),
        "in_progress" => ("In Progress".to_owned(), "badge--progress"),
        "completed" => ("Completed".to_owned(), "badge--completed"),
        other => (other.to_owned(), "badge--unknown"),
    }
}

/// Colored pill showing an inspection's workflow status.
#[component]
pub fn StatusBadge(status: String) -> impl IntoView {
    let (label, modifier) = status_display(&status);
    view! { <span class=format!("badge {modifier}")>{label}</span> }
}
