pub mod chart_service;
pub mod filter_editor;
pub mod filter_service;
pub mod format_service;
pub mod list_service;
