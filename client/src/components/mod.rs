//! Reusable UI components.

pub mod chat_widget;
pub mod inspection_modal;
pub mod navbar;
pub mod overview_panel;
pub mod status_badge;
