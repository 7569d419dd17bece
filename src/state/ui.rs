#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the navigation drawer and dark mode.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub nav_open: bool,
}
