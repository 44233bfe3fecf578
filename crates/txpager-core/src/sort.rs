//! Canonical ordering applied before any pagination or lookup

use txpager_config::SortDirection;

use crate::error::{CoreError, CoreResult};
use crate::record::Timestamped;

/// Return a copy of `items` ordered by timestamp
///
/// The sort is stable, so records sharing a timestamp keep their input order.
pub fn sort_by_timestamp<T: Timestamped + Clone>(items: &[T], direction: SortDirection) -> Vec<T> {
    let mut sorted = items.to_vec();
    match direction {
        SortDirection::Asc => sorted.sort_by_key(|item| item.timestamp()),
        SortDirection::Desc => sorted.sort_by(|a, b| b.timestamp().cmp(&a.timestamp())),
    }
    sorted
}

/// Parse a user-supplied direction such as `"asc"` or `"Descending"`
pub fn parse_direction(value: &str) -> CoreResult<SortDirection> {
    value.parse().map_err(|_| CoreError::InvalidSortDirection {
        value: value.to_string(),
    })
}

/// Parse a direction, falling back to newest-first on bad input
pub fn direction_or_default(value: Option<&str>) -> SortDirection {
    match value {
        None => SortDirection::default(),
        Some(raw) => parse_direction(raw).unwrap_or_else(|err| {
            log::warn!("{}, using '{}'", err, SortDirection::default());
            SortDirection::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str, i64);

    impl Timestamped for Item {
        fn timestamp(&self) -> i64 {
            self.1
        }
    }

    #[test]
    fn test_sort_descending_is_newest_first() {
        let items = vec![Item("a", 1), Item("b", 3), Item("c", 2)];
        let sorted = sort_by_timestamp(&items, SortDirection::Desc);
        let ids: Vec<_> = sorted.iter().map(|i| i.0).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        // input untouched
        assert_eq!(items[0], Item("a", 1));
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let items = vec![Item("a", 5), Item("b", 9), Item("c", 5), Item("d", 5)];

        let asc: Vec<_> = sort_by_timestamp(&items, SortDirection::Asc).iter().map(|i| i.0).collect();
        assert_eq!(asc, vec!["a", "c", "d", "b"]);

        let desc: Vec<_> = sort_by_timestamp(&items, SortDirection::Desc).iter().map(|i| i.0).collect();
        assert_eq!(desc, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!(parse_direction("asc").unwrap(), SortDirection::Asc);
        assert_eq!(parse_direction(" DESCENDING ").unwrap(), SortDirection::Desc);
        assert!(matches!(
            parse_direction("sideways"),
            Err(CoreError::InvalidSortDirection { .. })
        ));
    }

    #[test]
    fn test_direction_or_default() {
        assert_eq!(direction_or_default(None), SortDirection::Desc);
        assert_eq!(direction_or_default(Some("asc")), SortDirection::Asc);
        assert_eq!(direction_or_default(Some("up")), SortDirection::Desc);
    }
}
