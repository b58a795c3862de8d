//! Client dashboard and admin overview.

use crate::models::{DashboardStats, Inquiry, InquiryStatus, Property, PropertyStatus, Role, User};
use crate::store::{InquiryRepository, PropertyRepository, UserRepository};
use anyhow::Result;

/// Listings shown in the admin "featured" preview
pub const FEATURED_PREVIEW_LEN: usize = 5;

/// What a signed-in user sees on their dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct ClientDashboard {
    pub saved: Vec<Property>,
    /// Newest first
    pub inquiries: Vec<Inquiry>,
    pub pending_inquiries: usize,
}

impl ClientDashboard {
    pub async fn load<S>(store: &S, user: &User) -> Result<Self>
    where
        S: PropertyRepository + InquiryRepository + ?Sized,
    {
        let saved: Vec<Property> = store
            .list_properties()
            .await?
            .into_iter()
            .filter(|p| user.has_saved(&p.id))
            .collect();

        let mut inquiries = store.inquiries_by_user(&user.id).await?;
        inquiries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let pending_inquiries = inquiries
            .iter()
            .filter(|i| i.status == InquiryStatus::Pending)
            .count();

        Ok(Self {
            saved,
            inquiries,
            pending_inquiries,
        })
    }

    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }

    pub fn total_inquiries(&self) -> usize {
        self.inquiries.len()
    }
}

/// Per-status inquiry counts for the inquiries page header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InquiryCounts {
    pub total: usize,
    pub pending: usize,
    pub responded: usize,
    pub closed: usize,
}

impl InquiryCounts {
    pub fn tally(inquiries: &[Inquiry]) -> Self {
        inquiries.iter().fold(Self::default(), |mut counts, inquiry| {
            counts.total += 1;
            match inquiry.status {
                InquiryStatus::Pending => counts.pending += 1,
                InquiryStatus::Responded => counts.responded += 1,
                InquiryStatus::Closed => counts.closed += 1,
            }
            counts
        })
    }
}

pub fn stats(properties: &[Property], users: &[User], inquiries: &[Inquiry]) -> DashboardStats {
    DashboardStats {
        total_properties: properties.len(),
        active_listings: properties.iter().filter(|p| p.status.is_active()).count(),
        sold_properties: properties
            .iter()
            .filter(|p| p.status == PropertyStatus::Sold)
            .count(),
        sold_or_rented: properties.iter().filter(|p| !p.status.is_active()).count(),
        total_clients: users.iter().filter(|u| u.role == Role::Client).count(),
        total_inquiries: inquiries.len(),
        pending_inquiries: inquiries
            .iter()
            .filter(|i| i.status == InquiryStatus::Pending)
            .count(),
        total_revenue: properties
            .iter()
            .filter(|p| p.status == PropertyStatus::Sold)
            .map(|p| p.price)
            .sum(),
    }
}

/// Everything the admin panel reads, loaded once
#[derive(Debug, Clone)]
pub struct AdminSnapshot {
    pub properties: Vec<Property>,
    pub users: Vec<User>,
    pub inquiries: Vec<Inquiry>,
}

impl AdminSnapshot {
    pub async fn load<S>(store: &S) -> Result<Self>
    where
        S: PropertyRepository + UserRepository + InquiryRepository + ?Sized,
    {
        Ok(Self {
            properties: store.list_properties().await?,
            users: store.list_users().await?,
            inquiries: store.list_inquiries().await?,
        })
    }

    pub fn stats(&self) -> DashboardStats {
        stats(&self.properties, &self.users, &self.inquiries)
    }

    pub fn featured_preview(&self) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| p.featured)
            .take(FEATURED_PREVIEW_LEN)
            .collect()
    }

    /// Newest inquiries first, for the overview tab
    pub fn recent_inquiries(&self, limit: usize) -> Vec<&Inquiry> {
        let mut recent: Vec<&Inquiry> = self.inquiries.iter().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limit);
        recent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{seed, MemoryStore};

    #[tokio::test]
    async fn test_client_dashboard_for_john() {
        let store = MemoryStore::seeded();
        let john = store.find_user("user1").await.unwrap().unwrap();

        let dashboard = ClientDashboard::load(&store, &john).await.unwrap();
        let saved: Vec<&str> = dashboard.saved.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(saved, vec!["1", "3", "7"]);
        assert_eq!(dashboard.saved_count(), 3);
        assert_eq!(dashboard.total_inquiries(), 3);
        assert_eq!(dashboard.pending_inquiries, 1);
        assert_eq!(dashboard.inquiries[0].id, "inq1");
    }

    #[tokio::test]
    async fn test_admin_snapshot() {
        let store = MemoryStore::seeded();
        let snapshot = AdminSnapshot::load(&store).await.unwrap();

        let stats = snapshot.stats();
        assert_eq!(stats.total_properties, 8);
        assert_eq!(stats.active_listings, 8);
        assert_eq!(stats.sold_properties, 0);
        assert_eq!(stats.sold_or_rented, 0);
        assert_eq!(stats.total_clients, 2);
        assert_eq!(stats.total_inquiries, 5);
        assert_eq!(stats.pending_inquiries, 2);
        assert_eq!(stats.total_revenue, 0);

        assert_eq!(snapshot.featured_preview().len(), 5);
        let recent: Vec<&str> = snapshot.recent_inquiries(2).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(recent, vec!["inq1", "inq2"]);
    }

    #[test]
    fn test_revenue_counts_sold_only() {
        let mut properties = seed::properties();
        properties[0].status = PropertyStatus::Sold;
        properties[1].status = PropertyStatus::Rented;

        let stats = stats(&properties, &[], &[]);
        assert_eq!(stats.sold_properties, 1);
        assert_eq!(stats.sold_or_rented, 2);
        assert_eq!(stats.active_listings, 6);
        assert_eq!(stats.total_revenue, 1_250_000);
    }

    #[test]
    fn test_inquiry_counts() {
        let counts = InquiryCounts::tally(&seed::inquiries());
        assert_eq!(
            counts,
            InquiryCounts {
                total: 5,
                pending: 2,
                responded: 2,
                closed: 1,
            }
        );
    }
}
