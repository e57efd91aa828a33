// src/config/state.rs
use super::options::AppOptions;
use crate::engine::view::FilterSelection;

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// Current dropdown values (scheduling owner, execution owner)
    pub filters: FilterSelection,

    /// First row shown in the SSA table
    pub table_offset: usize,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
