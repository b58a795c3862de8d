use crate::config::Latency;
use crate::error::{SubmissionError, ValidationError};
use crate::forms::{
    ContactForm, InquiryForm, ListingForm, NotificationSettings, PasswordChangeForm, ProfileForm,
};
use crate::models::{Inquiry, InquiryStatus, User};
use crate::store::{InquiryRepository, PropertyRepository};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

/// Acknowledgement of a simulated submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub reference: String,
    pub received_at: DateTime<Utc>,
    pub message: &'static str,
}

impl Receipt {
    fn new(prefix: &str, message: &'static str) -> Self {
        let received_at = Utc::now();
        Self {
            reference: format!("{}_{}", prefix, received_at.timestamp_millis()),
            received_at,
            message,
        }
    }
}

/// Form submissions. Nothing leaves the process: each one is validated,
/// logged, and acknowledged after a pause.
pub struct Submissions {
    properties: Arc<dyn PropertyRepository>,
    inquiries: Arc<dyn InquiryRepository>,
    latency: Latency,
}

impl Submissions {
    pub fn new(
        properties: Arc<dyn PropertyRepository>,
        inquiries: Arc<dyn InquiryRepository>,
        latency: Latency,
    ) -> Self {
        Self {
            properties,
            inquiries,
            latency,
        }
    }

    pub async fn submit_listing(&self, form: &ListingForm) -> Result<Receipt, SubmissionError> {
        form.validate()?;
        tokio::time::sleep(self.latency.submission).await;
        info!(
            title = %form.title,
            price = ?form.price,
            images = form.images.len(),
            features = form.features.len(),
            "Property data received"
        );
        Ok(Receipt::new("listing", "Property listed successfully"))
    }

    pub async fn submit_contact(&self, form: &ContactForm) -> Result<Receipt, SubmissionError> {
        form.validate()?;
        tokio::time::sleep(self.latency.submission).await;
        info!(
            name = %form.name,
            email = %form.email,
            subject = %form.subject,
            topic = ?form.inquiry_type,
            "Contact message received"
        );
        Ok(Receipt::new("contact", "Thank you! We'll get back to you within 24 hours"))
    }

    /// Sends an inquiry about a listing. When a user is signed in, the inquiry
    /// is also recorded against their account as pending.
    pub async fn submit_inquiry(
        &self,
        form: &InquiryForm,
        sender: Option<&User>,
    ) -> Result<Receipt, SubmissionError> {
        form.validate()?;
        if self.properties.find_property(&form.property_id).await?.is_none() {
            return Err(ValidationError::NotFound(form.property_id.clone()).into());
        }
        tokio::time::sleep(self.latency.submission).await;
        info!(
            property = %form.property_id,
            name = %form.name,
            email = %form.email,
            "Inquiry submitted"
        );

        let mut receipt = Receipt::new("inq", "Your inquiry has been sent to the agent");
        if let Some(user) = sender {
            let inquiry = Inquiry {
                id: self.next_inquiry_id(receipt.received_at).await?,
                property_id: form.property_id.clone(),
                user_id: user.id.clone(),
                message: form.message.trim().to_string(),
                status: InquiryStatus::Pending,
                created_at: receipt.received_at,
                response: None,
                responded_at: None,
            };
            receipt.reference = inquiry.id.clone();
            self.inquiries.insert_inquiry(inquiry).await?;
        }
        Ok(receipt)
    }

    pub async fn update_password(
        &self,
        form: &PasswordChangeForm,
    ) -> Result<Receipt, SubmissionError> {
        form.validate()?;
        tokio::time::sleep(self.latency.settings).await;
        info!("Password update received");
        Ok(Receipt::new("security", "Password updated successfully"))
    }

    /// Saves the profile and notification sections of the settings page.
    pub async fn update_profile(
        &self,
        profile: &ProfileForm,
        notifications: &NotificationSettings,
    ) -> Result<Receipt, SubmissionError> {
        profile.validate()?;
        tokio::time::sleep(self.latency.settings).await;
        info!(
            name = %profile.name,
            email = %profile.email,
            notifications = ?notifications.enabled(),
            "Profile update received"
        );
        Ok(Receipt::new("profile", "Profile updated successfully"))
    }

    async fn next_inquiry_id(&self, at: DateTime<Utc>) -> anyhow::Result<String> {
        let mut stamp = at.timestamp_millis();
        loop {
            let id = format!("inq_{}", stamp);
            if self.inquiries.find_inquiry(&id).await?.is_none() {
                return Ok(id);
            }
            stamp += 1;
        }
    }
}
