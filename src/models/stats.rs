use serde::{Deserialize, Serialize};

/// Headline numbers for the admin overview
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_properties: usize,
    pub active_listings: usize,
    pub sold_properties: usize,
    pub sold_or_rented: usize,
    pub total_clients: usize,
    pub total_inquiries: usize,
    pub pending_inquiries: usize,
    /// Sum of prices over sold listings
    pub total_revenue: u64,
}
