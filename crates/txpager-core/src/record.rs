//! Transaction records and the traits the pagination engine needs from items

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Items that carry a stable identifier
pub trait Identified {
    fn id(&self) -> &str;
}

/// Items that carry a sort key in epoch milliseconds
pub trait Timestamped {
    fn timestamp(&self) -> i64;
}

/// A single financial transaction
///
/// Amounts are integer subunits (cents), negative for expenses. Deserializing
/// goes through [`Record::new`], so a `Record` is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordFields")]
pub struct Record {
    id: String,
    amount: i64,
    payee: String,
    timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    memo: Option<String>,
}

#[derive(Deserialize)]
struct RecordFields {
    id: String,
    amount: i64,
    payee: String,
    timestamp: i64,
    #[serde(default)]
    memo: Option<String>,
}

impl TryFrom<RecordFields> for Record {
    type Error = CoreError;

    fn try_from(fields: RecordFields) -> Result<Self, Self::Error> {
        Record::new(fields.id, fields.amount, fields.payee, fields.timestamp, fields.memo)
    }
}

impl Record {
    /// Build a validated record
    pub fn new(
        id: impl Into<String>,
        amount: i64,
        payee: impl Into<String>,
        timestamp: i64,
        memo: Option<String>,
    ) -> CoreResult<Self> {
        let id = id.into();
        let payee = payee.into();

        if id.trim().is_empty() {
            return Err(CoreError::validation("id", "Transaction ID cannot be empty"));
        }
        if payee.trim().is_empty() {
            return Err(CoreError::validation("payee", "Payee cannot be empty"));
        }
        if timestamp <= 0 {
            return Err(CoreError::validation("timestamp", "Invalid timestamp"));
        }

        Ok(Self { id, amount, payee, timestamp, memo })
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn payee(&self) -> &str {
        &self.payee
    }

    pub fn memo(&self) -> Option<&str> {
        self.memo.as_deref()
    }

    /// Expenses are stored as negative amounts
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }
}

impl Identified for Record {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Timestamped for Record {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

/// Raw form input for a new transaction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordDraft {
    pub payee: String,
    /// Main currency units, e.g. "-12.50"
    pub amount: String,
    /// Epoch millis, "YYYY-MM-DD HH:MM" or "YYYY-MM-DD" (UTC)
    pub timestamp: String,
    #[serde(default)]
    pub memo: Option<String>,
}

impl RecordDraft {
    /// Parse the draft and validate it as a record with the given id
    pub fn into_record(self, id: impl Into<String>) -> CoreResult<Record> {
        let amount = txpager_utils::parse_main_units(&self.amount)
            .ok_or_else(|| CoreError::validation("amount", "Amount must be a valid number"))?;
        let timestamp = parse_timestamp(&self.timestamp)?;
        let memo = self.memo.filter(|m| !m.trim().is_empty());

        Record::new(id, amount, self.payee, timestamp, memo)
    }
}

fn parse_timestamp(input: &str) -> CoreResult<i64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CoreError::validation("timestamp", "Timestamp is required"));
    }

    if let Ok(millis) = input.parse::<i64>() {
        return Ok(millis);
    }

    let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| {
            CoreError::validation("timestamp", format!("Unrecognized date '{}', expected YYYY-MM-DD HH:MM", input))
        })?;

    Ok(Utc.from_utc_datetime(&naive).timestamp_millis())
}
