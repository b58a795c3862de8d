use crate::models::{Inquiry, Property, User};
use anyhow::Result;
use async_trait::async_trait;

/// Read/insert access to property listings.
/// Lets a real database replace the seeded in-memory list without touching
/// search or view code.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// All listings in storage order
    async fn list_properties(&self) -> Result<Vec<Property>>;

    async fn find_property(&self, id: &str) -> Result<Option<Property>>;

    /// Fails if a listing with the same id already exists
    async fn insert_property(&self, property: Property) -> Result<()>;

    async fn featured_properties(&self) -> Result<Vec<Property>> {
        let mut properties = self.list_properties().await?;
        properties.retain(|p| p.featured);
        Ok(properties)
    }

    async fn properties_by_agent(&self, agent_id: &str) -> Result<Vec<Property>> {
        let mut properties = self.list_properties().await?;
        properties.retain(|p| p.agent.id == agent_id);
        Ok(properties)
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>>;

    async fn find_user(&self, id: &str) -> Result<Option<User>>;

    /// Exact, case-sensitive match like the credential lookup
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn insert_user(&self, user: User) -> Result<()>;
}

#[async_trait]
pub trait InquiryRepository: Send + Sync {
    async fn list_inquiries(&self) -> Result<Vec<Inquiry>>;

    async fn find_inquiry(&self, id: &str) -> Result<Option<Inquiry>>;

    async fn insert_inquiry(&self, inquiry: Inquiry) -> Result<()>;

    async fn inquiries_by_user(&self, user_id: &str) -> Result<Vec<Inquiry>> {
        let mut inquiries = self.list_inquiries().await?;
        inquiries.retain(|i| i.user_id == user_id);
        Ok(inquiries)
    }

    async fn inquiries_by_property(&self, property_id: &str) -> Result<Vec<Inquiry>> {
        let mut inquiries = self.list_inquiries().await?;
        inquiries.retain(|i| i.property_id == property_id);
        Ok(inquiries)
    }
}
