use chrono::{DateTime, Utc};

use crate::models::filter::{DateRangePreset, FilterState, TransactionCategory};
use crate::models::transaction::TransactionStatus;
use crate::services::format_service::format_picker_date;

/// Editable draft of the filters while the filter panel is open.
///
/// Starts as a copy of the applied filters; nothing reaches the caller
/// until `apply` or `clear`.
#[derive(Debug, Clone)]
pub struct FilterEditor {
    current: FilterState,
    draft: FilterState,
}

impl FilterEditor {
    pub fn new(current: &FilterState) -> Self {
        Self {
            current: current.clone(),
            draft: current.clone(),
        }
    }

    pub fn draft(&self) -> &FilterState {
        &self.draft
    }

    pub fn select_preset(&mut self, preset: DateRangePreset, now: DateTime<Utc>) {
        self.draft.select_preset(preset, now);
    }

    /// Pick a start date by hand. The range label is left untouched.
    pub fn set_start_date(&mut self, date: DateTime<Utc>) {
        self.draft.start_date = Some(date);
    }

    /// Pick an end date by hand. The range label is left untouched.
    pub fn set_end_date(&mut self, date: DateTime<Utc>) {
        self.draft.end_date = Some(date);
    }

    pub fn toggle_type(&mut self, category: TransactionCategory) {
        self.draft.toggle_type(category);
    }

    pub fn toggle_status(&mut self, status: TransactionStatus) {
        self.draft.toggle_status(status);
    }

    /// Start date as shown in the picker field.
    pub fn start_date_display(&self) -> String {
        self.draft
            .start_date
            .map(format_picker_date)
            .unwrap_or_else(|| "Start Date".to_string())
    }

    /// End date as shown in the picker field.
    pub fn end_date_display(&self) -> String {
        self.draft
            .end_date
            .map(format_picker_date)
            .unwrap_or_else(|| "End Date".to_string())
    }

    /// Nothing to apply while the draft equals the applied filters.
    pub fn is_apply_disabled(&self) -> bool {
        self.draft == self.current
    }

    pub fn apply(self) -> FilterState {
        self.draft
    }

    /// Reset to the default "All Time" state.
    pub fn clear(self) -> FilterState {
        FilterState::default()
    }
}
