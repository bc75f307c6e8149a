use super::*;

#[test]
fn known_statuses_map_to_display_labels() {
    assert_eq!(status_display("pending"), ("Pending".to_owned(), "badge--pending"));
    assert_eq!(status_display("in_progress"), ("In Progress".to_owned(), "badge--progress"));
    assert_eq!(status_display("completed"), ("Completed".to_owned(), "badge--completed"));
}

#[test]
fn unknown_status_passes_through() {
    let (label, modifier) = status_display("archived");
    assert_eq!(label, "archived");
    assert_eq!(modifier, "badge--unknown");
}
