use super::*;

#[test]
fn context_carries_counts_and_marks_the_view() {
    let stats = DashboardStats {
        transformer_count: Some(12),
        inspection_count: Some(40),
        pending_count: Some(5),
        in_progress_count: Some(3),
        completed_count: Some(32),
        health_score: Some(87),
        recent_activity: vec!["Inspection created".to_owned()],
    };
    let context = dashboard_context_from(&stats);
    assert_eq!(context.current_view.as_deref(), Some("Dashboard"));
    assert_eq!(context.transformer_count, Some(12));
    assert_eq!(context.health_score, Some(87));
    assert_eq!(context.recent_activity.len(), 1);
}

#[test]
fn sparse_stats_render_sparse_context() {
    let stats = DashboardStats { transformer_count: Some(12), health_score: Some(87), ..DashboardStats::default() };
    let block = dashboard_context_from(&stats).render();
    assert_eq!(block, "Current View: Dashboard\nTotal Transformers: 12\nSystem Health Score: 87%");
}
