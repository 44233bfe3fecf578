//! JSON views handed to clients

use chrono::DateTime;
use serde::Serialize;
use txpager_config::CurrencyConfig;
use txpager_core::{Identified, Page, Pagination, Record, Timestamped};
use txpager_utils::format_subunits;

/// A record with display helpers for the list
#[derive(Debug, Clone, Serialize)]
pub struct RecordView {
    pub id: String,
    pub payee: String,
    pub amount: i64,
    /// e.g. "-1 234.56 USD"
    pub amount_display: String,
    pub is_expense: bool,
    pub timestamp: i64,
    /// UTC, e.g. "2024-01-15 10:30"
    pub date_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl RecordView {
    pub fn new(record: &Record, currency: &CurrencyConfig) -> Self {
        let amount = format_subunits(
            record.amount(),
            &currency.thousands_separator,
            &currency.decimal_separator,
        );
        Self {
            id: record.id().to_string(),
            payee: record.payee().to_string(),
            amount: record.amount(),
            amount_display: format!("{} {}", amount, currency.code),
            is_expense: record.is_negative(),
            timestamp: record.timestamp(),
            date_display: format_timestamp(record.timestamp()),
            memo: record.memo().map(str::to_string),
        }
    }
}

/// Render epoch millis as `YYYY-MM-DD HH:MM` in UTC
pub fn format_timestamp(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => millis.to_string(),
    }
}

/// One-based bounds of the visible rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Showing {
    pub from: usize,
    pub to: usize,
}

/// The current page as clients render it
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub items: Vec<RecordView>,
    pub pagination: Pagination,
    pub showing: Option<Showing>,
}

impl PageView {
    pub fn new(page: &Page<Record>, currency: &CurrencyConfig) -> Self {
        Self {
            items: page.items.iter().map(|r| RecordView::new(r, currency)).collect(),
            pagination: page.pagination,
            showing: page
                .pagination
                .display_range()
                .map(|(from, to)| Showing { from, to }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use txpager_core::paginate;

    #[test]
    fn test_record_view_formats_amount() {
        let record = Record::new("r1", -123456, "Landlord", 1, None).unwrap();
        let view = RecordView::new(&record, &CurrencyConfig::default());
        assert_eq!(view.amount_display, "-1 234.56 USD");
        assert!(view.is_expense);
        assert_eq!(view.date_display, "1970-01-01 00:00");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(1_705_314_600_000), "2024-01-15 10:30");
        assert_eq!(format_timestamp(1_705_314_659_999), "2024-01-15 10:30");
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
    }

    #[test]
    fn test_page_view_showing_range() {
        let records: Vec<Record> = (0..25)
            .map(|i| Record::new(format!("r{}", i), 100, "P", 1 + i as i64, None).unwrap())
            .collect();
        let page = paginate(&records, 3, 10).unwrap();
        let view = PageView::new(&page, &CurrencyConfig::default());
        assert_eq!(view.showing, Some(Showing { from: 21, to: 25 }));

        let empty = paginate::<Record>(&[], 1, 10).unwrap();
        assert_eq!(PageView::new(&empty, &CurrencyConfig::default()).showing, None);
    }
}
