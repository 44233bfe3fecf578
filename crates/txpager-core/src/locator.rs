//! Find which page an item currently sits on

use crate::error::{CoreError, CoreResult};
use crate::record::Identified;

/// How to recognise the item being looked for
pub enum Matcher<'a, T> {
    /// Compare against [`Identified::id`]
    Id(&'a str),
    Predicate(&'a dyn Fn(&T) -> bool),
}

impl<'a, T: Identified> Matcher<'a, T> {
    fn matches(&self, item: &T) -> bool {
        match self {
            Matcher::Id(id) => item.id() == *id,
            Matcher::Predicate(test) => test(item),
        }
    }
}

/// One-based page holding the first item accepted by `matcher`
///
/// Falls back to page 1 when nothing matches.
pub fn locate<T: Identified>(ordered: &[T], matcher: Matcher<'_, T>, items_per_page: usize) -> CoreResult<usize> {
    if items_per_page == 0 {
        return Err(CoreError::InvalidPagination {
            message: "Items per page must be greater than 0".to_string(),
        });
    }

    Ok(ordered
        .iter()
        .position(|item| matcher.matches(item))
        .map(|index| index / items_per_page + 1)
        .unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::paginate;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        group: usize,
    }

    impl Identified for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item { id: format!("tx-{}", i), group: i % 7 })
            .collect()
    }

    #[test]
    fn test_locate_item_on_page_seven() {
        let ordered = items(65);
        let page = locate(&ordered, Matcher::Id("tx-62"), 10).unwrap();
        assert_eq!(page, 7);

        let view = paginate(&ordered, page, 10).unwrap();
        assert!(view.items.contains(&ordered[62]));
    }

    #[test]
    fn test_locate_missing_returns_first_page() {
        let ordered = items(30);
        assert_eq!(locate(&ordered, Matcher::Id("nope"), 10).unwrap(), 1);
        assert_eq!(locate::<Item>(&[], Matcher::Id("tx-0"), 10).unwrap(), 1);
    }

    #[test]
    fn test_predicate_uses_first_match() {
        let ordered = items(40);
        let in_group_six = |item: &Item| item.group == 6;
        // matches at 6, 13, 20, ...; index 6 is on page 2
        assert_eq!(locate(&ordered, Matcher::Predicate(&in_group_six), 5).unwrap(), 2);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let ordered = items(3);
        assert!(matches!(
            locate(&ordered, Matcher::Id("tx-1"), 0),
            Err(CoreError::InvalidPagination { .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_locate_then_paginate_contains_item(total in 1usize..200, per in 1usize..25) {
            let ordered = items(total);
            for item in &ordered {
                let page = locate(&ordered, Matcher::Id(&item.id), per).unwrap();
                let view = paginate(&ordered, page, per).unwrap();
                prop_assert!(view.items.contains(item));
            }
        }
    }
}
