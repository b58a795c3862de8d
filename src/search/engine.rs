use super::types::{SearchFilters, SortKey};
use crate::models::Property;

/// Filters `properties` by every present criterion and orders the survivors
/// by `sort`. The sort is stable, so ties keep their input order.
pub fn search<'a>(
    properties: &'a [Property],
    filters: &SearchFilters,
    sort: SortKey,
) -> Vec<&'a Property> {
    let mut results: Vec<&Property> = properties.iter().filter(|p| filters.matches(p)).collect();
    results.sort_by(|a, b| sort.compare(a, b));
    results
}

/// Same as [`search`], restricted to the ids in `saved_ids`.
pub fn search_saved<'a>(
    properties: &'a [Property],
    saved_ids: &[String],
    filters: &SearchFilters,
    sort: SortKey,
) -> Vec<&'a Property> {
    let mut results: Vec<&Property> = properties
        .iter()
        .filter(|p| saved_ids.iter().any(|id| *id == p.id))
        .filter(|p| filters.matches(p))
        .collect();
    results.sort_by(|a, b| sort.compare(a, b));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PropertyStatus, PropertyType};
    use crate::store::seed;

    fn ids(results: &[&Property]) -> Vec<String> {
        results.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_results_are_a_subset_of_input() {
        let properties = seed::properties();
        let filters = SearchFilters {
            location: Some("ny".to_string()),
            min_area: Some(1000),
            ..Default::default()
        };
        for property in search(&properties, &filters, SortKey::AreaSmall) {
            assert!(properties.contains(property));
        }
    }

    #[test]
    fn test_empty_filters_return_everything() {
        let properties = seed::properties();
        let results = search(&properties, &SearchFilters::default(), SortKey::Newest);
        assert_eq!(ids(&results), vec!["1", "2", "3", "4", "5", "6", "7", "8"]);

        let results = search(&properties, &SearchFilters::default(), SortKey::AreaLarge);
        assert_eq!(ids(&results), vec!["8", "1", "3", "7", "5", "2", "4", "6"]);
    }

    #[test]
    fn test_min_price_is_inclusive_lower_bound() {
        let properties = seed::properties();
        let filters = SearchFilters {
            min_price: Some(1_000_000),
            ..Default::default()
        };
        let results = search(&properties, &filters, SortKey::PriceLow);
        assert_eq!(ids(&results), vec!["1", "8", "7"]);
        assert!(results.iter().all(|p| p.price >= 1_000_000));

        let excluded = properties.iter().filter(|p| p.price < 1_000_000).count();
        assert_eq!(excluded + results.len(), properties.len());
    }

    #[test]
    fn test_bedrooms_is_a_minimum_not_exact() {
        let properties = seed::properties();
        let filters = SearchFilters {
            bedrooms: Some(3),
            ..Default::default()
        };
        let results = search(&properties, &filters, SortKey::Newest);
        assert_eq!(ids(&results), vec!["1", "3", "5", "7", "8"]);
        assert!(results.iter().all(|p| p.bedrooms >= 3));
        assert!(results.iter().any(|p| p.bedrooms > 3));
    }

    #[test]
    fn test_price_low_reversed_is_price_high() {
        let properties = seed::properties();
        let filters = SearchFilters::default();
        let mut ascending = search(&properties, &filters, SortKey::PriceLow);
        ascending.reverse();
        let descending = search(&properties, &filters, SortKey::PriceHigh);
        assert_eq!(ids(&ascending), ids(&descending));
    }

    #[test]
    fn test_location_is_case_insensitive() {
        let properties = seed::properties();
        for needle in ["Austin", "austin", "AUSTIN", "ust"] {
            let filters = SearchFilters {
                location: Some(needle.to_string()),
                ..Default::default()
            };
            assert_eq!(ids(&search(&properties, &filters, SortKey::Newest)), vec!["3"]);
        }
    }

    #[test]
    fn test_location_or_across_fields_and_with_others() {
        let properties = seed::properties();
        // "NY" hits the state of 2, 7 and 8
        let filters = SearchFilters {
            location: Some("NY".to_string()),
            status: Some(PropertyStatus::ForSale),
            ..Default::default()
        };
        assert_eq!(ids(&search(&properties, &filters, SortKey::PriceHigh)), vec!["7", "8"]);
    }

    #[test]
    fn test_house_for_sale_newest_first() {
        let properties = seed::properties();
        let filters = SearchFilters {
            property_type: Some(PropertyType::House),
            status: Some(PropertyStatus::ForSale),
            ..Default::default()
        };
        let results = search(&properties, &filters, SortKey::Newest);
        assert_eq!(ids(&results), vec!["1", "3", "8"]);
    }

    #[test]
    fn test_price_and_area_windows() {
        let properties = seed::properties();
        let filters = SearchFilters {
            min_price: Some(1_800),
            max_price: Some(3_500),
            min_area: Some(600),
            max_area: Some(900),
            ..Default::default()
        };
        let results = search(&properties, &filters, SortKey::AreaLarge);
        assert_eq!(ids(&results), vec!["4", "6"]);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let mut properties = seed::properties();
        let mut twin = properties[2].clone();
        twin.id = "3b".to_string();
        properties.insert(0, twin);

        let filters = SearchFilters {
            max_price: Some(750_000),
            ..Default::default()
        };
        let results = search(&properties, &filters, SortKey::PriceHigh);
        assert_eq!(ids(&results), vec!["3b", "3", "2", "4", "6"]);
    }

    #[test]
    fn test_search_saved_prefilters_by_id() {
        let properties = seed::properties();
        let saved = vec!["1".to_string(), "3".to_string(), "7".to_string()];

        let all_saved = search_saved(&properties, &saved, &SearchFilters::default(), SortKey::PriceHigh);
        assert_eq!(ids(&all_saved), vec!["7", "1", "3"]);

        let filters = SearchFilters {
            property_type: Some(PropertyType::House),
            ..Default::default()
        };
        let houses = search_saved(&properties, &saved, &filters, SortKey::Newest);
        assert_eq!(ids(&houses), vec!["1", "3"]);

        assert!(search_saved(&properties, &[], &SearchFilters::default(), SortKey::Newest).is_empty());
    }
}
