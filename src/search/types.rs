use crate::models::{Property, PropertyStatus, PropertyType};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// Criteria from the search panel. Every field is optional; absent or
/// malformed fields place no constraint on the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Case-insensitive substring of city, state or street address
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub property_type: Option<PropertyType>,
    #[serde(deserialize_with = "lenient")]
    pub status: Option<PropertyStatus>,
    #[serde(deserialize_with = "lenient")]
    pub min_price: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub max_price: Option<u64>,
    /// Minimum number of bedrooms
    #[serde(deserialize_with = "lenient")]
    pub bedrooms: Option<u32>,
    /// Minimum number of bathrooms
    #[serde(deserialize_with = "lenient")]
    pub bathrooms: Option<u32>,
    /// Minimum size in square feet
    #[serde(deserialize_with = "lenient")]
    pub min_area: Option<u32>,
    /// Maximum size in square feet
    #[serde(deserialize_with = "lenient")]
    pub max_area: Option<u32>,
}

// Form inputs arrive as text, so "500000" is read as a number. Anything that
// still does not fit the field becomes None instead of failing the whole set.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match serde_json::from_value::<T>(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(_) => match &value {
            Value::String(raw) => serde_json::from_str::<T>(raw.trim()).ok(),
            _ => None,
        },
    };
    Ok(parsed)
}

impl SearchFilters {
    /// True when the property satisfies every present criterion.
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(needle) = self.location_needle() {
            let location = &property.location;
            let hit = [&location.city, &location.state, &location.address]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if let Some(property_type) = self.property_type {
            if property.property_type != property_type {
                return false;
            }
        }
        if let Some(status) = self.status {
            if property.status != status {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if property.price < min {
                return false;
            }
        }
        if let Some(max) = nonzero(self.max_price) {
            if property.price > max {
                return false;
            }
        }
        if let Some(min) = self.bedrooms {
            if property.bedrooms < min {
                return false;
            }
        }
        if let Some(min) = self.bathrooms {
            if property.bathrooms < min {
                return false;
            }
        }
        if let Some(min) = self.min_area {
            if property.area < min {
                return false;
            }
        }
        if let Some(max) = nonzero(self.max_area) {
            if property.area > max {
                return false;
            }
        }
        true
    }

    /// Number of criteria currently set, as shown on the filter badge.
    pub fn active_count(&self) -> usize {
        [
            self.location_needle().is_some(),
            self.property_type.is_some(),
            self.status.is_some(),
            self.min_price.is_some(),
            nonzero(self.max_price).is_some(),
            self.bedrooms.is_some(),
            self.bathrooms.is_some(),
            self.min_area.is_some(),
            nonzero(self.max_area).is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn location_needle(&self) -> Option<String> {
        self.location
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

// A zero upper bound means the field was left blank.
fn nonzero<T: Default + PartialEq>(bound: Option<T>) -> Option<T> {
    bound.filter(|v| *v != T::default())
}

/// Ordering applied to the result list
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    AreaLarge,
    AreaSmall,
}

text_enum!(SortKey, "sort key", {
    Newest => "newest",
    PriceLow => "price-low",
    PriceHigh => "price-high",
    AreaLarge => "area-large",
    AreaSmall => "area-small",
});

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::AreaLarge => "Area: Largest First",
            SortKey::AreaSmall => "Area: Smallest First",
        }
    }

    pub fn compare(&self, a: &Property, b: &Property) -> Ordering {
        match self {
            SortKey::Newest => b.created_at.cmp(&a.created_at),
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            SortKey::AreaLarge => b.area.cmp(&a.area),
            SortKey::AreaSmall => a.area.cmp(&b.area),
        }
    }
}
