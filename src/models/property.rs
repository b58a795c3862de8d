use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of real estate being listed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
    Land,
}

text_enum!(PropertyType, "property type", {
    House => "house",
    Apartment => "apartment",
    Condo => "condo",
    Townhouse => "townhouse",
    Land => "land",
});

/// Market status of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyStatus {
    ForSale,
    ForRent,
    Sold,
    Rented,
}

text_enum!(PropertyStatus, "property status", {
    ForSale => "for-sale",
    ForRent => "for-rent",
    Sold => "sold",
    Rented => "rented",
});

impl PropertyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyStatus::ForSale => "For Sale",
            PropertyStatus::ForRent => "For Rent",
            PropertyStatus::Sold => "Sold",
            PropertyStatus::Rented => "Rented",
        }
    }

    /// Still on the market (for sale or for rent).
    pub fn is_active(&self) -> bool {
        matches!(self, PropertyStatus::ForSale | PropertyStatus::ForRent)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Location information for a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub coordinates: Coordinates,
}

/// Listing agent details embedded in every property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Whole dollars; monthly rent for `for-rent` listings.
    pub price: u64,
    pub location: Location,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Square feet
    pub area: u32,
    pub year_built: u16,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub agent: AgentSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub featured: bool,
}

impl Property {
    /// Price as shown on cards: `$1,250,000`, or `$3,500/month` for rentals.
    pub fn display_price(&self) -> String {
        let amount = format!("${}", group_thousands(self.price));
        if self.status == PropertyStatus::ForRent {
            format!("{}/month", amount)
        } else {
            amount
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
