//! Demo listings, accounts and inquiries the marketplace starts with.

use crate::models::{
    AgentSummary, Coordinates, Inquiry, InquiryStatus, Location, Property, PropertyStatus,
    PropertyType, Role, User,
};
use chrono::{DateTime, Utc};

const PHOTO_VILLA: &str = "https://images.pexels.com/photos/106399/pexels-photo-106399.jpeg";
const PHOTO_FACADE: &str = "https://images.pexels.com/photos/1918291/pexels-photo-1918291.jpeg";
const PHOTO_LIVING: &str = "https://images.pexels.com/photos/2102587/pexels-photo-2102587.jpeg";
const PHOTO_INTERIOR: &str = "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg";

const AVATAR_A: &str = "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg";
const AVATAR_B: &str = "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg";
const AVATAR_C: &str = "https://images.pexels.com/photos/3763188/pexels-photo-3763188.jpeg";

fn at(timestamp: &str) -> DateTime<Utc> {
    timestamp
        .parse()
        .expect("seed timestamps are valid RFC 3339")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn agent(id: &str) -> AgentSummary {
    let (name, email, phone, avatar) = match id {
        "agent1" => ("Sarah Johnson", "sarah@realestate.com", "+1 (555) 123-4567", AVATAR_A),
        "agent2" => ("Michael Chen", "michael@realestate.com", "+1 (555) 987-6543", AVATAR_B),
        _ => ("Emily Rodriguez", "emily@realestate.com", "+1 (555) 456-7890", AVATAR_C),
    };
    AgentSummary {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        avatar: avatar.to_string(),
    }
}

fn location(address: &str, city: &str, state: &str, zip_code: &str, lat: f64, lng: f64) -> Location {
    Location {
        address: address.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: zip_code.to_string(),
        coordinates: Coordinates { lat, lng },
    }
}

/// The eight seeded listings, newest first.
pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".to_string(),
            title: "Modern Luxury Villa".to_string(),
            description: "Stunning modern villa with panoramic city views. Features include a gourmet kitchen, spacious living areas, and a private pool. Perfect for entertaining.".to_string(),
            price: 1_250_000,
            location: location("123 Highland Drive", "Beverly Hills", "CA", "90210", 34.0736, -118.4004),
            property_type: PropertyType::House,
            status: PropertyStatus::ForSale,
            bedrooms: 5,
            bathrooms: 4,
            area: 4500,
            year_built: 2020,
            features: strings(&["Pool", "Garage", "Garden", "Security System", "Smart Home", "Fireplace"]),
            images: strings(&[PHOTO_VILLA, PHOTO_FACADE, PHOTO_LIVING, PHOTO_INTERIOR]),
            agent: agent("agent1"),
            created_at: at("2024-01-15T10:00:00Z"),
            updated_at: at("2024-01-15T10:00:00Z"),
            featured: true,
        },
        Property {
            id: "2".to_string(),
            title: "Downtown Luxury Apartment".to_string(),
            description: "Sophisticated downtown apartment with floor-to-ceiling windows and premium finishes. Walking distance to restaurants and shopping.".to_string(),
            price: 3_500,
            location: location("456 Metropolitan Ave", "New York", "NY", "10001", 40.7505, -73.9934),
            property_type: PropertyType::Apartment,
            status: PropertyStatus::ForRent,
            bedrooms: 2,
            bathrooms: 2,
            area: 1200,
            year_built: 2018,
            features: strings(&["Gym", "Concierge", "Rooftop Terrace", "In-unit Laundry", "Dishwasher"]),
            images: strings(&[PHOTO_INTERIOR, PHOTO_LIVING, PHOTO_FACADE]),
            agent: agent("agent2"),
            created_at: at("2024-01-14T14:30:00Z"),
            updated_at: at("2024-01-14T14:30:00Z"),
            featured: true,
        },
        Property {
            id: "3".to_string(),
            title: "Charming Family Home".to_string(),
            description: "Beautiful family home in quiet neighborhood with large backyard and updated kitchen. Great schools nearby.".to_string(),
            price: 750_000,
            location: location("789 Oak Street", "Austin", "TX", "78701", 30.2672, -97.7431),
            property_type: PropertyType::House,
            status: PropertyStatus::ForSale,
            bedrooms: 4,
            bathrooms: 3,
            area: 2800,
            year_built: 2015,
            features: strings(&["Garden", "Garage", "Updated Kitchen", "Hardwood Floors", "Central AC"]),
            images: strings(&[PHOTO_VILLA, PHOTO_FACADE, PHOTO_LIVING]),
            agent: agent("agent1"),
            created_at: at("2024-01-13T09:00:00Z"),
            updated_at: at("2024-01-13T09:00:00Z"),
            featured: false,
        },
        Property {
            id: "4".to_string(),
            title: "Modern Condo with View".to_string(),
            description: "Sleek modern condo with stunning water views. Open floor plan with premium appliances and private balcony.".to_string(),
            price: 2_800,
            location: location("321 Waterfront Blvd", "Miami", "FL", "33101", 25.7617, -80.1918),
            property_type: PropertyType::Condo,
            status: PropertyStatus::ForRent,
            bedrooms: 1,
            bathrooms: 1,
            area: 900,
            year_built: 2019,
            features: strings(&["Water View", "Balcony", "Gym", "Pool", "Valet Parking"]),
            images: strings(&[PHOTO_INTERIOR, PHOTO_LIVING]),
            agent: agent("agent3"),
            created_at: at("2024-01-12T16:45:00Z"),
            updated_at: at("2024-01-12T16:45:00Z"),
            featured: true,
        },
        Property {
            id: "5".to_string(),
            title: "Spacious Townhouse".to_string(),
            description: "Three-story townhouse with modern amenities and private garage. Perfect for growing families.".to_string(),
            price: 850_000,
            location: location("654 Maple Lane", "Seattle", "WA", "98101", 47.6062, -122.3321),
            property_type: PropertyType::Townhouse,
            status: PropertyStatus::ForSale,
            bedrooms: 3,
            bathrooms: 3,
            area: 2200,
            year_built: 2017,
            features: strings(&["Garage", "Patio", "Modern Kitchen", "Walk-in Closets", "Laundry Room"]),
            images: strings(&[PHOTO_VILLA, PHOTO_FACADE]),
            agent: agent("agent2"),
            created_at: at("2024-01-11T11:20:00Z"),
            updated_at: at("2024-01-11T11:20:00Z"),
            featured: false,
        },
        Property {
            id: "6".to_string(),
            title: "Cozy Studio Apartment".to_string(),
            description: "Perfect starter home in vibrant neighborhood. Recently renovated with modern fixtures and appliances.".to_string(),
            price: 1_800,
            location: location("987 College Ave", "Boston", "MA", "02101", 42.3601, -71.0589),
            property_type: PropertyType::Apartment,
            status: PropertyStatus::ForRent,
            // studio
            bedrooms: 0,
            bathrooms: 1,
            area: 600,
            year_built: 2016,
            features: strings(&["Recently Renovated", "Natural Light", "Hardwood Floors", "Near Transit"]),
            images: strings(&[PHOTO_INTERIOR]),
            agent: agent("agent3"),
            created_at: at("2024-01-10T13:15:00Z"),
            updated_at: at("2024-01-10T13:15:00Z"),
            featured: false,
        },
        Property {
            id: "7".to_string(),
            title: "Luxury Penthouse Suite".to_string(),
            description: "Exclusive penthouse with 360-degree city views, private elevator, and rooftop terrace. The epitome of luxury living.".to_string(),
            price: 2_500_000,
            location: location("100 Park Avenue", "New York", "NY", "10017", 40.7505, -73.9934),
            property_type: PropertyType::Condo,
            status: PropertyStatus::ForSale,
            bedrooms: 3,
            bathrooms: 3,
            area: 2500,
            year_built: 2021,
            features: strings(&["Private Elevator", "Rooftop Terrace", "City Views", "Concierge", "Wine Cellar", "Smart Home"]),
            images: strings(&[PHOTO_INTERIOR, PHOTO_LIVING, PHOTO_FACADE]),
            agent: agent("agent1"),
            created_at: at("2024-01-09T08:30:00Z"),
            updated_at: at("2024-01-09T08:30:00Z"),
            featured: true,
        },
        Property {
            id: "8".to_string(),
            title: "Suburban Family Estate".to_string(),
            description: "Magnificent estate home on 2 acres with pool, tennis court, and guest house. Perfect for entertaining.".to_string(),
            price: 1_850_000,
            location: location("456 Estate Drive", "Westchester", "NY", "10601", 41.1220, -73.7949),
            property_type: PropertyType::House,
            status: PropertyStatus::ForSale,
            bedrooms: 6,
            bathrooms: 5,
            area: 6500,
            year_built: 2018,
            features: strings(&["Pool", "Tennis Court", "Guest House", "Wine Cellar", "Home Theater", "Gym"]),
            images: strings(&[PHOTO_VILLA, PHOTO_FACADE, PHOTO_LIVING]),
            agent: agent("agent2"),
            created_at: at("2024-01-08T15:20:00Z"),
            updated_at: at("2024-01-08T15:20:00Z"),
            featured: true,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn account(
    id: &str,
    name: &str,
    email: &str,
    phone: Option<&str>,
    avatar: &str,
    role: Role,
    saved: &[&str],
    created_at: &str,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.map(str::to_string),
        avatar: Some(avatar.to_string()),
        role,
        saved_properties: strings(saved),
        inquiries: Vec::new(),
        created_at: at(created_at),
    }
}

pub fn users() -> Vec<User> {
    let mut john = account(
        "user1",
        "John Smith",
        "john@example.com",
        Some("+1 (555) 111-2222"),
        AVATAR_B,
        Role::Client,
        &["1", "3", "7"],
        "2024-01-01T00:00:00Z",
    );
    john.inquiries.push(Inquiry {
        id: "inq1".to_string(),
        property_id: "1".to_string(),
        user_id: "user1".to_string(),
        message: "I'm interested in scheduling a viewing for this property.".to_string(),
        status: InquiryStatus::Pending,
        created_at: at("2024-01-15T15:30:00Z"),
        response: None,
        responded_at: None,
    });

    vec![
        john,
        account("admin1", "Admin User", "admin@realestate.com", None, AVATAR_A, Role::Admin, &[], "2024-01-01T00:00:00Z"),
        account("user2", "Jane Doe", "jane@example.com", Some("+1 (555) 222-3333"), AVATAR_C, Role::Client, &["2", "4"], "2024-01-02T00:00:00Z"),
        account("agent1", "Sarah Johnson", "sarah@realestate.com", Some("+1 (555) 123-4567"), AVATAR_A, Role::Agent, &[], "2024-01-01T00:00:00Z"),
        account("agent2", "Michael Chen", "michael@realestate.com", Some("+1 (555) 987-6543"), AVATAR_B, Role::Agent, &[], "2024-01-01T00:00:00Z"),
        account("agent3", "Emily Rodriguez", "emily@realestate.com", Some("+1 (555) 456-7890"), AVATAR_C, Role::Agent, &[], "2024-01-01T00:00:00Z"),
        account("agent4", "Agent User", "agent@realestate.com", Some("+1 (555) 999-8888"), AVATAR_B, Role::Agent, &[], "2024-01-01T00:00:00Z"),
    ]
}

fn inquiry(
    id: &str,
    property_id: &str,
    user_id: &str,
    message: &str,
    status: InquiryStatus,
    created_at: &str,
    response: Option<(&str, &str)>,
) -> Inquiry {
    Inquiry {
        id: id.to_string(),
        property_id: property_id.to_string(),
        user_id: user_id.to_string(),
        message: message.to_string(),
        status,
        created_at: at(created_at),
        response: response.map(|(text, _)| text.to_string()),
        responded_at: response.map(|(_, when)| at(when)),
    }
}

pub fn inquiries() -> Vec<Inquiry> {
    vec![
        inquiry(
            "inq1",
            "1",
            "user1",
            "I'm interested in scheduling a viewing for this property. When would be a good time?",
            InquiryStatus::Pending,
            "2024-01-15T15:30:00Z",
            None,
        ),
        inquiry(
            "inq2",
            "2",
            "user1",
            "Is this apartment still available? I'd like to know more about the lease terms.",
            InquiryStatus::Responded,
            "2024-01-14T10:20:00Z",
            Some((
                "Yes, the apartment is still available. The lease terms are flexible. Please call us to discuss.",
                "2024-01-14T14:30:00Z",
            )),
        ),
        inquiry(
            "inq3",
            "3",
            "user2",
            "What are the school districts for this property? I have two children.",
            InquiryStatus::Responded,
            "2024-01-13T09:15:00Z",
            Some((
                "This property is in the excellent Austin ISD. The elementary school is rated 9/10.",
                "2024-01-13T11:45:00Z",
            )),
        ),
        inquiry(
            "inq4",
            "4",
            "user2",
            "Can I schedule a virtual tour of this condo?",
            InquiryStatus::Pending,
            "2024-01-12T14:20:00Z",
            None,
        ),
        inquiry(
            "inq5",
            "7",
            "user1",
            "I'm very interested in this penthouse. Can we arrange a private showing?",
            InquiryStatus::Closed,
            "2024-01-10T16:30:00Z",
            Some((
                "Thank you for your interest. We've scheduled a private showing for next week.",
                "2024-01-10T18:00:00Z",
            )),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let properties = properties();
        let mut ids: Vec<&str> = properties.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);

        let users = users();
        let mut emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
        emails.sort();
        emails.dedup();
        assert_eq!(emails.len(), 7);
    }

    #[test]
    fn test_inquiries_reference_seeded_records() {
        let properties = properties();
        let users = users();
        for inquiry in inquiries() {
            assert!(properties.iter().any(|p| p.id == inquiry.property_id));
            assert!(users.iter().any(|u| u.id == inquiry.user_id));
            assert_eq!(inquiry.response.is_some(), inquiry.responded_at.is_some());
        }
    }
}
