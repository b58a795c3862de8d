//! Free-text search boxes on the saved, inquiry and admin pages.
//!
//! An empty term matches everything.

use crate::models::{Inquiry, InquiryStatus, Property, PropertyStatus, User};

fn contains_ci(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(&term.to_lowercase())
}

fn find_property<'a>(properties: &'a [Property], id: &str) -> Option<&'a Property> {
    properties.iter().find(|p| p.id == id)
}

/// Saved-properties page: title, city or state.
pub fn saved_listing_matches(property: &Property, term: &str) -> bool {
    term.is_empty()
        || contains_ci(&property.title, term)
        || contains_ci(&property.location.city, term)
        || contains_ci(&property.location.state, term)
}

/// Admin listings tab: title or city, plus an optional status.
pub fn admin_listings<'a>(
    properties: &'a [Property],
    term: &str,
    status: Option<PropertyStatus>,
) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|p| {
            term.is_empty() || contains_ci(&p.title, term) || contains_ci(&p.location.city, term)
        })
        .filter(|p| status.map_or(true, |s| p.status == s))
        .collect()
}

/// Admin users tab: name or email.
pub fn admin_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    users
        .iter()
        .filter(|u| term.is_empty() || contains_ci(&u.name, term) || contains_ci(&u.email, term))
        .collect()
}

/// Admin inquiries tab: title of the property or name of the sender.
/// Inquiries whose property and sender are both unknown only show up for an
/// empty term.
pub fn admin_inquiries<'a>(
    inquiries: &'a [Inquiry],
    properties: &[Property],
    users: &[User],
    term: &str,
    status: Option<InquiryStatus>,
) -> Vec<&'a Inquiry> {
    inquiries
        .iter()
        .filter(|inquiry| {
            if term.is_empty() {
                return true;
            }
            let by_title = find_property(properties, &inquiry.property_id)
                .is_some_and(|p| contains_ci(&p.title, term));
            let by_sender = users
                .iter()
                .find(|u| u.id == inquiry.user_id)
                .is_some_and(|u| contains_ci(&u.name, term));
            by_title || by_sender
        })
        .filter(|inquiry| status.map_or(true, |s| inquiry.status == s))
        .collect()
}

/// A client's own inquiries: property title, property city or message text,
/// newest first.
pub fn client_inquiries<'a>(
    inquiries: &'a [Inquiry],
    properties: &[Property],
    term: &str,
    status: Option<InquiryStatus>,
) -> Vec<&'a Inquiry> {
    let mut results: Vec<&Inquiry> = inquiries
        .iter()
        .filter(|inquiry| {
            if term.is_empty() || contains_ci(&inquiry.message, term) {
                return true;
            }
            find_property(properties, &inquiry.property_id).is_some_and(|p| {
                contains_ci(&p.title, term) || contains_ci(&p.location.city, term)
            })
        })
        .filter(|inquiry| status.map_or(true, |s| inquiry.status == s))
        .collect();
    results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn test_saved_listing_matches() {
        let properties = seed::properties();
        assert!(saved_listing_matches(&properties[0], "villa"));
        assert!(saved_listing_matches(&properties[0], "beverly"));
        assert!(saved_listing_matches(&properties[0], "ca"));
        assert!(!saved_listing_matches(&properties[0], "highland"));
        assert!(saved_listing_matches(&properties[0], ""));
    }

    #[test]
    fn test_admin_listings_by_city_and_status() {
        let properties = seed::properties();
        let hits = admin_listings(&properties, "new york", None);
        assert_eq!(hits.len(), 2);

        let hits = admin_listings(&properties, "new york", Some(PropertyStatus::ForRent));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");

        assert!(admin_listings(&properties, "", Some(PropertyStatus::Sold)).is_empty());
    }

    #[test]
    fn test_admin_users_by_email() {
        let users = seed::users();
        let hits = admin_users(&users, "REALESTATE.COM");
        assert_eq!(hits.len(), 5);
    }

    #[test]
    fn test_admin_inquiries_by_sender_or_title() {
        let properties = seed::properties();
        let users = seed::users();
        let inquiries = seed::inquiries();

        let by_sender = admin_inquiries(&inquiries, &properties, &users, "jane", None);
        let ids: Vec<&str> = by_sender.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["inq3", "inq4"]);

        let by_title = admin_inquiries(&inquiries, &properties, &users, "penthouse", None);
        assert_eq!(by_title.len(), 1);

        let pending = admin_inquiries(&inquiries, &properties, &users, "", Some(InquiryStatus::Pending));
        assert_eq!(pending.len(), 2);
    }

    #[test]
    fn test_client_inquiries_newest_first() {
        let properties = seed::properties();
        let inquiries: Vec<Inquiry> = seed::inquiries()
            .into_iter()
            .filter(|i| i.user_id == "user1")
            .collect();

        let all = client_inquiries(&inquiries, &properties, "", None);
        let ids: Vec<&str> = all.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["inq1", "inq2", "inq5"]);

        let by_message = client_inquiries(&inquiries, &properties, "lease", None);
        assert_eq!(by_message.len(), 1);
        assert_eq!(by_message[0].id, "inq2");

        let by_city = client_inquiries(&inquiries, &properties, "beverly", None);
        assert_eq!(by_city[0].id, "inq1");

        let closed = client_inquiries(&inquiries, &properties, "", Some(InquiryStatus::Closed));
        assert_eq!(closed.len(), 1);
    }
}
