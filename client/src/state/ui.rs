//! Local UI chrome state.
//!
//! Keeps transient presentation concerns out of domain state so rendering
//! controls can evolve independently of backend data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for theme and chrome toggles.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
