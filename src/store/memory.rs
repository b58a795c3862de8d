use crate::models::{Inquiry, Property, User};
use crate::store::seed;
use crate::store::traits::{InquiryRepository, PropertyRepository, UserRepository};
use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// Process-local store for properties, users and inquiries.
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    properties: RwLock<Vec<Property>>,
    users: RwLock<Vec<User>>,
    inquiries: RwLock<Vec<Inquiry>>,
}

impl MemoryStore {
    pub fn new(properties: Vec<Property>, users: Vec<User>, inquiries: Vec<Inquiry>) -> Self {
        Self {
            properties: RwLock::new(properties),
            users: RwLock::new(users),
            inquiries: RwLock::new(inquiries),
        }
    }

    /// Store preloaded with the demo listings, accounts and inquiries
    pub fn seeded() -> Self {
        Self::new(seed::properties(), seed::users(), seed::inquiries())
    }
}

#[async_trait]
impl PropertyRepository for MemoryStore {
    async fn list_properties(&self) -> Result<Vec<Property>> {
        Ok(self.properties.read().await.clone())
    }

    async fn find_property(&self, id: &str) -> Result<Option<Property>> {
        let properties = self.properties.read().await;
        Ok(properties.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_property(&self, property: Property) -> Result<()> {
        let mut properties = self.properties.write().await;
        if properties.iter().any(|p| p.id == property.id) {
            bail!("property {} already exists", property.id);
        }
        debug!("Inserting property {}", property.id);
        properties.push(property);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_user(&self, id: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, user: User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.id == user.id) {
            bail!("user {} already exists", user.id);
        }
        debug!("Inserting user {}", user.id);
        users.push(user);
        Ok(())
    }
}

#[async_trait]
impl InquiryRepository for MemoryStore {
    async fn list_inquiries(&self) -> Result<Vec<Inquiry>> {
        Ok(self.inquiries.read().await.clone())
    }

    async fn find_inquiry(&self, id: &str) -> Result<Option<Inquiry>> {
        let inquiries = self.inquiries.read().await;
        Ok(inquiries.iter().find(|i| i.id == id).cloned())
    }

    async fn insert_inquiry(&self, inquiry: Inquiry) -> Result<()> {
        let mut inquiries = self.inquiries.write().await;
        if inquiries.iter().any(|i| i.id == inquiry.id) {
            bail!("inquiry {} already exists", inquiry.id);
        }
        debug!("Inserting inquiry {}", inquiry.id);
        inquiries.push(inquiry);
        Ok(())
    }
}
