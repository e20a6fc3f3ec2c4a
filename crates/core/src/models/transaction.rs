use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Settlement status of a transaction, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Successful,
    Pending,
    Failed,
}

impl TransactionStatus {
    /// Every status, in the order the filter editor lists them.
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Successful,
        TransactionStatus::Pending,
        TransactionStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Successful => "successful",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        }
    }

    /// Exact, case-sensitive lookup of a wire value.
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional details attached to store / tip transactions.
///
/// Every field may be missing from the API response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionMetadata {
    /// Name of the customer or counterparty
    #[serde(default)]
    pub name: Option<String>,

    /// Fine-grained category, e.g. "digital_product", "webinar", "coffee"
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub product_name: Option<String>,

    /// Units sold; a JSON number, so fractional values are accepted
    #[serde(default)]
    pub quantity: Option<f64>,

    #[serde(default)]
    pub country: Option<String>,
}

/// A single financial event as returned by `/transactions`.
///
/// Records are never mutated once fetched. `amount` and `date` are always
/// present; everything else reads as empty when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Non-negative amount in USD
    pub amount: f64,

    #[serde(default)]
    pub metadata: Option<TransactionMetadata>,

    #[serde(default)]
    pub payment_reference: Option<String>,

    /// Closed set: a value outside it fails deserialization of the record,
    /// and with it the whole `/transactions` array.
    #[serde(default)]
    pub status: Option<TransactionStatus>,

    /// Raw ISO-8601 timestamp exactly as received
    pub date: String,

    /// Coarse category, e.g. "withdrawal", "chargeback", "cashback", "referral"
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl Transaction {
    pub fn new(amount: f64, status: TransactionStatus, date: impl Into<String>) -> Self {
        Self {
            amount,
            metadata: None,
            payment_reference: None,
            status: Some(status),
            date: date.into(),
            kind: None,
        }
    }

    /// Set the coarse `type` field.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Attach metadata.
    pub fn with_metadata(mut self, metadata: TransactionMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// The `type` field, or `""` when absent.
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }

    /// `metadata.type`, or `""` when metadata or the field is absent.
    pub fn metadata_kind(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.kind.as_deref())
            .unwrap_or("")
    }

    /// `metadata.name`, or `""` when absent.
    pub fn metadata_name(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.name.as_deref())
            .unwrap_or("")
    }

    /// `metadata.product_name`, or `""` when absent.
    pub fn product_name(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.product_name.as_deref())
            .unwrap_or("")
    }

    /// The parsed instant of `date`, or `None` if it is not a recognised
    /// timestamp.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date)
    }

    pub fn is_withdrawal(&self) -> bool {
        self.kind() == "withdrawal"
    }
}

/// Parse a wire timestamp into a UTC instant.
///
/// Accepts RFC 3339 (`2024-01-15T10:00:00Z`, with or without offset and
/// fractional seconds), a bare local date-time (`2024-01-15T10:00:00`) read as
/// UTC, and a bare calendar date (`2024-01-15`) read as UTC midnight.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
