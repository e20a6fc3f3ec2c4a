use chrono::{DateTime, Datelike, Duration, Months, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::transaction::TransactionStatus;

/// Sentinel `date_range` label meaning "no date constraint".
pub const ALL_TIME: &str = "All Time";

/// User-facing transaction category offered by the filter editor.
///
/// Each category maps onto one or more raw `type` / `metadata.type`
/// values; see `services::filter_service::CATEGORY_RULES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionCategory {
    #[serde(rename = "Store Transactions")]
    StoreTransactions,
    #[serde(rename = "Get Tipped")]
    GetTipped,
    Withdrawals,
    Chargebacks,
    Cashbacks,
    #[serde(rename = "Refer & Earn")]
    ReferAndEarn,
}

impl TransactionCategory {
    /// Every category, in display order.
    pub const ALL: [TransactionCategory; 6] = [
        TransactionCategory::StoreTransactions,
        TransactionCategory::GetTipped,
        TransactionCategory::Withdrawals,
        TransactionCategory::Chargebacks,
        TransactionCategory::Cashbacks,
        TransactionCategory::ReferAndEarn,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransactionCategory::StoreTransactions => "Store Transactions",
            TransactionCategory::GetTipped => "Get Tipped",
            TransactionCategory::Withdrawals => "Withdrawals",
            TransactionCategory::Chargebacks => "Chargebacks",
            TransactionCategory::Cashbacks => "Cashbacks",
            TransactionCategory::ReferAndEarn => "Refer & Earn",
        }
    }

    /// Exact, case-sensitive lookup by display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Named date windows offered as one-click presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateRangePreset {
    AllTime,
    Today,
    Last7Days,
    ThisMonth,
    Last3Months,
}

impl DateRangePreset {
    /// Presets shown as chips in the filter editor (All Time is reached via Clear).
    pub const CHIPS: [DateRangePreset; 4] = [
        DateRangePreset::Today,
        DateRangePreset::Last7Days,
        DateRangePreset::ThisMonth,
        DateRangePreset::Last3Months,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DateRangePreset::AllTime => ALL_TIME,
            DateRangePreset::Today => "Today",
            DateRangePreset::Last7Days => "Last 7 days",
            DateRangePreset::ThisMonth => "This month",
            DateRangePreset::Last3Months => "Last 3 months",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        [DateRangePreset::AllTime]
            .into_iter()
            .chain(Self::CHIPS)
            .find(|p| p.label() == label)
    }

    /// Raw `(start, end)` instants for this preset relative to `now`.
    ///
    /// Time of day is left as-is; the filter engine widens both bounds to
    /// whole days. `AllTime` has no bounds.
    pub fn bounds(&self, now: DateTime<Utc>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = match self {
            DateRangePreset::AllTime => return None,
            DateRangePreset::Today => now,
            DateRangePreset::Last7Days => now - Duration::days(7),
            DateRangePreset::ThisMonth => now.with_day(1).unwrap_or(now),
            DateRangePreset::Last3Months => now.checked_sub_months(Months::new(3)).unwrap_or(now),
        };
        Some((start, now))
    }
}

impl std::fmt::Display for DateRangePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Criteria narrowing the visible transaction set.
///
/// Owned by the caller, passed by reference into the filter engine and
/// replaced wholesale on apply / clear. An empty `transaction_type` or
/// `transaction_status` list places no constraint on that dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Either `ALL_TIME` or a preset / custom label
    pub date_range: String,

    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,

    /// Selected categories, in the order they were picked
    #[serde(default)]
    pub transaction_type: Vec<TransactionCategory>,

    /// Selected statuses, in the order they were picked
    #[serde(default)]
    pub transaction_status: Vec<TransactionStatus>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            date_range: ALL_TIME.to_string(),
            start_date: None,
            end_date: None,
            transaction_type: Vec::new(),
            transaction_status: Vec::new(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A state restricted to the given preset window, everything else empty.
    pub fn for_preset(preset: DateRangePreset, now: DateTime<Utc>) -> Self {
        let mut state = Self::default();
        state.select_preset(preset, now);
        state
    }

    /// Switch to a preset, replacing both bounds.
    pub fn select_preset(&mut self, preset: DateRangePreset, now: DateTime<Utc>) {
        self.date_range = preset.label().to_string();
        match preset.bounds(now) {
            Some((start, end)) => {
                self.start_date = Some(start);
                self.end_date = Some(end);
            }
            None => {
                self.start_date = None;
                self.end_date = None;
            }
        }
    }

    /// Add the category if absent, remove it if present.
    pub fn toggle_type(&mut self, category: TransactionCategory) {
        if let Some(pos) = self.transaction_type.iter().position(|c| *c == category) {
            self.transaction_type.remove(pos);
        } else {
            self.transaction_type.push(category);
        }
    }

    /// Add the status if absent, remove it if present.
    pub fn toggle_status(&mut self, status: TransactionStatus) {
        if let Some(pos) = self.transaction_status.iter().position(|s| *s == status) {
            self.transaction_status.remove(pos);
        } else {
            self.transaction_status.push(status);
        }
    }

    /// Inclusive `[start of day, end of day]` window, or `None` unless both
    /// bounds are set.
    pub fn date_window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let (start, end) = (self.start_date?, self.end_date?);
        let day_start = start.date_naive().and_time(NaiveTime::MIN).and_utc();
        let day_end = end
            .date_naive()
            .and_hms_milli_opt(23, 59, 59, 999)?
            .and_utc();
        Some((day_start, day_end))
    }

    pub fn has_date_window(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_some()
    }

    pub fn is_all_time(&self) -> bool {
        self.date_range == ALL_TIME
    }

    /// Badge count: one for a non-"All Time" range plus one per selected
    /// type and status.
    pub fn active_filter_count(&self) -> usize {
        let range = usize::from(!self.is_all_time());
        range + self.transaction_type.len() + self.transaction_status.len()
    }

    /// Lowercase label used in "Your transactions for ...".
    pub fn date_range_label(&self) -> String {
        if self.is_all_time() {
            "all time".to_string()
        } else {
            self.date_range.to_lowercase()
        }
    }

    pub fn type_summary(&self) -> String {
        if self.transaction_type.is_empty() {
            return "Select Transaction Type".to_string();
        }
        self.transaction_type
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn status_summary(&self) -> String {
        if self.transaction_status.is_empty() {
            return "Select Transaction Status".to_string();
        }
        self.transaction_status
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
