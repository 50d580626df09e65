//! Filter predicates and sort orders for the catalog.

use std::cmp::Ordering;

use super::{Acquisition, Item};
use crate::price::parse_price;

/// Conjunction of optional criteria; the default matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemFilter {
    pub acquired: Option<Acquisition>,
    pub country: Option<String>,
    /// Matched against each comma-separated colour, case-insensitively.
    pub color: Option<String>,
    /// Free text over name, story, and colour.
    pub query: String,
}

impl ItemFilter {
    pub fn is_empty(&self) -> bool {
        self.acquired.is_none()
            && self.country.is_none()
            && self.color.is_none()
            && self.query.trim().is_empty()
    }

    pub fn matches(&self, item: &Item) -> bool {
        if let Some(acquired) = self.acquired {
            if item.acquired != acquired {
                return false;
            }
        }
        if let Some(ref country) = self.country {
            if !item.country.trim().eq_ignore_ascii_case(country.trim()) {
                return false;
            }
        }
        if let Some(ref color) = self.color {
            let wanted = color.trim();
            if !item.colors().any(|c| c.eq_ignore_ascii_case(wanted)) {
                return false;
            }
        }
        let query = self.query.trim().to_lowercase();
        if !query.is_empty() {
            let hit = [&item.name, &item.story, &item.color]
                .iter()
                .any(|field| field.to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Catalog position.
    #[default]
    Catalog,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Catalog,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Catalog => "Catalog",
            Self::NameAsc => "Name A-Z",
            Self::NameDesc => "Name Z-A",
            Self::PriceAsc => "Price low-high",
            Self::PriceDesc => "Price high-low",
        }
    }

    /// Stable sort; ties and unnamed/unpriced items fall back to id order,
    /// and unnamed or unpriced items always go last.
    pub fn apply(self, items: &mut [&Item]) {
        match self {
            Self::Catalog => items.sort_by_key(|i| i.id),
            Self::NameAsc | Self::NameDesc => {
                let desc = self == Self::NameDesc;
                items.sort_by(|a, b| {
                    by_missing_last(named(a), named(b), |x, y| {
                        let ord = x.to_lowercase().cmp(&y.to_lowercase());
                        if desc { ord.reverse() } else { ord }
                    })
                    .then(a.id.cmp(&b.id))
                });
            }
            Self::PriceAsc | Self::PriceDesc => {
                let desc = self == Self::PriceDesc;
                items.sort_by(|a, b| {
                    by_missing_last(usd(a), usd(b), |x, y| {
                        let ord = x.total_cmp(&y);
                        if desc { ord.reverse() } else { ord }
                    })
                    .then(a.id.cmp(&b.id))
                });
            }
        }
    }
}

fn named(item: &Item) -> Option<&str> {
    let name = item.name.trim();
    (!name.is_empty()).then_some(name)
}

fn usd(item: &Item) -> Option<f64> {
    parse_price(&item.price).ok().map(|p| p.usd_value())
}

fn by_missing_last<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids(items: &[&Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_default_filter_matches_all() {
        let catalog = Catalog::builtin();
        let all = catalog.select(&ItemFilter::default(), SortOrder::Catalog);
        assert_eq!(all.len(), catalog.len());
        assert!(ItemFilter::default().is_empty());
    }

    #[test]
    fn test_filter_by_acquisition() {
        let catalog = Catalog::builtin();
        let filter = ItemFilter {
            acquired: Some(Acquisition::Gifted),
            ..Default::default()
        };
        assert_eq!(ids(&catalog.select(&filter, SortOrder::Catalog)), vec![6, 9, 11, 14, 15]);
    }

    #[test]
    fn test_filter_by_color_token() {
        let catalog = Catalog::builtin();
        let filter = ItemFilter {
            color: Some("green".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&catalog.select(&filter, SortOrder::Catalog)), vec![8, 10, 14, 15]);
    }

    #[test]
    fn test_filters_combine() {
        let catalog = Catalog::builtin();
        let filter = ItemFilter {
            acquired: Some(Acquisition::Bought),
            country: Some("japan".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&catalog.select(&filter, SortOrder::Catalog)), vec![4, 7]);
    }

    #[test]
    fn test_query_searches_story() {
        let catalog = Catalog::builtin();
        let filter = ItemFilter {
            query: "  CHAI ".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&catalog.select(&filter, SortOrder::Catalog)), vec![15]);
    }

    #[test]
    fn test_price_sort_puts_unpriced_last() {
        let catalog = Catalog::builtin();
        let sorted = catalog.select(&ItemFilter::default(), SortOrder::PriceAsc);
        // Rs.280 ≈ $3.36 is the cheapest
        assert_eq!(sorted[0].id, 13);
        assert_eq!(sorted[14].id, 14); // €72 ≈ $77.76
        assert!(sorted[15..].iter().all(|i| i.price.is_empty()));
        assert_eq!(sorted[15].id, 16);
    }

    #[test]
    fn test_price_desc() {
        let catalog = Catalog::builtin();
        let sorted = catalog.select(&ItemFilter::default(), SortOrder::PriceDesc);
        assert_eq!(sorted[0].id, 14);
        assert_eq!(sorted.last().unwrap().id, 50);
    }

    #[test]
    fn test_name_sort() {
        let catalog = Catalog::builtin();
        let sorted = catalog.select(&ItemFilter::default(), SortOrder::NameAsc);
        assert_eq!(sorted[0].name, "Adidas Gazelle sneakers");
        assert!(sorted[15..].iter().all(|i| i.name.is_empty()));
        let desc = catalog.select(&ItemFilter::default(), SortOrder::NameDesc);
        assert_eq!(desc[0].name, "Matcha cap");
    }
}
