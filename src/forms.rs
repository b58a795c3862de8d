//! Client-side form validation for registration, listings, contact,
//! inquiries and account settings.

use crate::auth::NewAccount;
use crate::error::ValidationError;
use crate::models::{PropertyStatus, PropertyType, Role, User};
use serde::{Deserialize, Serialize};

/// Feature tags offered on the add-listing form
pub const PROPERTY_FEATURES: [&str; 28] = [
    "Pool",
    "Garage",
    "Garden",
    "Security System",
    "Smart Home",
    "Fireplace",
    "Gym",
    "Concierge",
    "Rooftop Terrace",
    "In-unit Laundry",
    "Dishwasher",
    "Water View",
    "Balcony",
    "Valet Parking",
    "Patio",
    "Modern Kitchen",
    "Walk-in Closets",
    "Laundry Room",
    "Recently Renovated",
    "Natural Light",
    "Hardwood Floors",
    "Near Transit",
    "Updated Kitchen",
    "Central AC",
    "Wine Cellar",
    "Home Theater",
    "Tennis Court",
    "Guest House",
];

pub const DEFAULT_INQUIRY_MESSAGE: &str =
    "I am interested in this property. Please contact me with more information.";

pub const MIN_PASSWORD_LEN: usize = 8;

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Outcome of each password rule, shown as a checklist while typing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCheck {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    /// Confirmation is non-empty and equal
    pub matches: bool,
}

impl PasswordCheck {
    pub fn evaluate(password: &str, confirm: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_PASSWORD_LEN,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
            matches: !password.is_empty() && password == confirm,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.length && self.uppercase && self.lowercase && self.number && self.matches
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub confirm_password: String,
    pub account_type: Option<Role>,
    pub agree_to_terms: bool,
}

impl RegistrationForm {
    pub fn password_check(&self) -> PasswordCheck {
        PasswordCheck::evaluate(&self.password, &self.confirm_password)
    }

    /// Checks run in the order the sign-up page reports them.
    pub fn validate(self) -> Result<NewAccount, ValidationError> {
        if !self.agree_to_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        require(&self.first_name, "first name")?;
        require(&self.last_name, "last name")?;
        require(&self.email, "email")?;
        require(&self.password, "password")?;

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        let check = self.password_check();
        if !check.is_satisfied() {
            return Err(ValidationError::WeakPassword(check));
        }

        let role = match self.account_type.unwrap_or(Role::Client) {
            Role::Admin => return Err(ValidationError::InvalidAccountType),
            role @ (Role::Client | Role::Agent) => role,
        };

        Ok(NewAccount {
            name: format!("{} {}", self.first_name.trim(), self.last_name.trim()),
            email: self.email.trim().to_string(),
            phone: optional(self.phone),
            role,
        })
    }
}

/// Add-listing form as typed in; numeric fields stay optional until checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingForm {
    pub title: String,
    pub description: String,
    pub price: Option<u64>,
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area: Option<u32>,
    pub year_built: Option<u16>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
}

impl ListingForm {
    /// Adds an image URL; blank or already-added URLs are ignored.
    pub fn add_image(&mut self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() || self.images.iter().any(|i| i == url) {
            return false;
        }
        self.images.push(url.to_string());
        true
    }

    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    /// Returns whether the feature is selected afterwards.
    pub fn toggle_feature(&mut self, feature: &str) -> bool {
        if self.features.iter().any(|f| f == feature) {
            self.features.retain(|f| f != feature);
            false
        } else {
            self.features.push(feature.to_string());
            true
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.title, "title")?;
        require(&self.description, "description")?;
        if self.price.filter(|p| *p > 0).is_none() {
            return Err(ValidationError::MissingField("price"));
        }
        if self.property_type.is_none() {
            return Err(ValidationError::MissingField("type"));
        }
        if self.status.is_none() {
            return Err(ValidationError::MissingField("status"));
        }
        if self.images.is_empty() {
            return Err(ValidationError::NoImages);
        }
        Ok(())
    }
}

/// Subject area picked on the contact page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactTopic {
    Buying,
    Selling,
    Renting,
    Investment,
    General,
}

text_enum!(ContactTopic, "inquiry type", {
    Buying => "buying",
    Selling => "selling",
    Renting => "renting",
    Investment => "investment",
    General => "general",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub inquiry_type: Option<ContactTopic>,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        require(&self.subject, "subject")?;
        require(&self.message, "message")
    }
}

/// Contact-agent form on a property page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryForm {
    pub property_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl InquiryForm {
    pub fn new(property_id: impl Into<String>) -> Self {
        Self {
            property_id: property_id.into(),
            name: String::new(),
            email: String::new(),
            phone: None,
            message: DEFAULT_INQUIRY_MESSAGE.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        require(&self.message, "message")
    }
}

/// Security settings form. The current password is not checked against
/// anything; there is no credential store to check it against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.new_password, "new password")?;
        if self.new_password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Profile section of the settings page, prefilled from the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    /// Avatar image URL
    pub avatar: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            bio: String::new(),
            avatar: user.avatar.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        require(&self.email, "email")
    }
}

/// One switch in the notifications section
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPreference {
    EmailNotifications,
    PushNotifications,
    MarketingEmails,
    PropertyUpdates,
    PriceAlerts,
    NewListings,
}

text_enum!(NotificationPreference, "notification preference", {
    EmailNotifications => "email-notifications",
    PushNotifications => "push-notifications",
    MarketingEmails => "marketing-emails",
    PropertyUpdates => "property-updates",
    PriceAlerts => "price-alerts",
    NewListings => "new-listings",
});

impl NotificationPreference {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationPreference::EmailNotifications => "Email Notifications",
            NotificationPreference::PushNotifications => "Push Notifications",
            NotificationPreference::MarketingEmails => "Marketing Emails",
            NotificationPreference::PropertyUpdates => "Property Updates",
            NotificationPreference::PriceAlerts => "Price Alerts",
            NotificationPreference::NewListings => "New Listings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub marketing_emails: bool,
    pub property_updates: bool,
    pub price_alerts: bool,
    pub new_listings: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            marketing_emails: false,
            property_updates: true,
            price_alerts: true,
            new_listings: false,
        }
    }
}

impl NotificationSettings {
    pub fn get(&self, preference: NotificationPreference) -> bool {
        match preference {
            NotificationPreference::EmailNotifications => self.email_notifications,
            NotificationPreference::PushNotifications => self.push_notifications,
            NotificationPreference::MarketingEmails => self.marketing_emails,
            NotificationPreference::PropertyUpdates => self.property_updates,
            NotificationPreference::PriceAlerts => self.price_alerts,
            NotificationPreference::NewListings => self.new_listings,
        }
    }

    pub fn set(&mut self, preference: NotificationPreference, enabled: bool) {
        let slot = match preference {
            NotificationPreference::EmailNotifications => &mut self.email_notifications,
            NotificationPreference::PushNotifications => &mut self.push_notifications,
            NotificationPreference::MarketingEmails => &mut self.marketing_emails,
            NotificationPreference::PropertyUpdates => &mut self.property_updates,
            NotificationPreference::PriceAlerts => &mut self.price_alerts,
            NotificationPreference::NewListings => &mut self.new_listings,
        };
        *slot = enabled;
    }

    /// Preferences currently switched on, in page order.
    pub fn enabled(&self) -> Vec<NotificationPreference> {
        NotificationPreference::ALL
            .iter()
            .copied()
            .filter(|p| self.get(*p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegistrationForm {
        RegistrationForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: " ada@example.com ".to_string(),
            phone: Some("  ".to_string()),
            password: "Secret123".to_string(),
            confirm_password: "Secret123".to_string(),
            account_type: Some(Role::Agent),
            agree_to_terms: true,
        }
    }

    #[test]
    fn test_password_rules() {
        let check = PasswordCheck::evaluate("Secret123", "Secret123");
        assert!(check.is_satisfied());

        let check = PasswordCheck::evaluate("secret123", "secret123");
        assert!(!check.uppercase);
        assert!(check.lowercase && check.number && check.length && check.matches);

        let check = PasswordCheck::evaluate("Sh0rt", "Sh0rt");
        assert!(!check.length);

        let check = PasswordCheck::evaluate("NoDigitsHere", "NoDigitsHere");
        assert!(!check.number);

        let check = PasswordCheck::evaluate("", "");
        assert!(!check.matches);
    }

    #[test]
    fn test_registration_builds_account() {
        let account = registration().validate().unwrap();
        assert_eq!(account.name, "Ada Lovelace");
        assert_eq!(account.email, "ada@example.com");
        assert_eq!(account.phone, None);
        assert_eq!(account.role, Role::Agent);
    }

    #[test]
    fn test_registration_failures_in_order() {
        let mut form = registration();
        form.agree_to_terms = false;
        form.password = "x".to_string();
        assert_eq!(form.validate(), Err(ValidationError::TermsNotAccepted));

        let mut form = registration();
        form.last_name = " ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingField("last name")));

        let mut form = registration();
        form.confirm_password = "Secret124".to_string();
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));

        let mut form = registration();
        form.password = "weakpass".to_string();
        form.confirm_password = "weakpass".to_string();
        assert!(matches!(form.validate(), Err(ValidationError::WeakPassword(c)) if !c.uppercase));

        let mut form = registration();
        form.account_type = Some(Role::Admin);
        assert_eq!(form.validate(), Err(ValidationError::InvalidAccountType));
    }

    #[test]
    fn test_registration_defaults_to_client() {
        let mut form = registration();
        form.account_type = None;
        assert_eq!(form.validate().unwrap().role, Role::Client);
    }

    #[test]
    fn test_listing_images_and_features() {
        let mut form = ListingForm::default();
        assert!(form.add_image("  https://example.com/a.jpg "));
        assert!(!form.add_image("https://example.com/a.jpg"));
        assert!(!form.add_image("   "));
        assert_eq!(form.images, vec!["https://example.com/a.jpg"]);
        assert_eq!(form.remove_image(3), None);
        assert_eq!(form.remove_image(0).as_deref(), Some("https://example.com/a.jpg"));

        assert!(form.toggle_feature("Pool"));
        assert!(form.toggle_feature("Garage"));
        assert!(!form.toggle_feature("Pool"));
        assert_eq!(form.features, vec!["Garage"]);
    }

    #[test]
    fn test_listing_validation() {
        let mut form = ListingForm {
            title: "Lake House".to_string(),
            description: "Quiet place by the water".to_string(),
            price: Some(420_000),
            property_type: Some(PropertyType::House),
            status: None,
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("status")));

        form.status = Some(PropertyStatus::ForSale);
        assert_eq!(form.validate(), Err(ValidationError::NoImages));

        form.add_image("https://example.com/lake.jpg");
        assert_eq!(form.validate(), Ok(()));

        form.price = Some(0);
        assert_eq!(form.validate(), Err(ValidationError::MissingField("price")));
    }

    #[test]
    fn test_contact_and_inquiry_forms() {
        let mut contact = ContactForm {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            subject: "Selling".to_string(),
            ..Default::default()
        };
        assert_eq!(contact.validate(), Err(ValidationError::MissingField("message")));
        contact.message = "Need a valuation".to_string();
        assert_eq!(contact.validate(), Ok(()));

        let mut inquiry = InquiryForm::new("3");
        assert_eq!(inquiry.message, DEFAULT_INQUIRY_MESSAGE);
        assert_eq!(inquiry.validate(), Err(ValidationError::MissingField("name")));
        inquiry.name = "Sam".to_string();
        inquiry.email = "sam@example.com".to_string();
        assert_eq!(inquiry.validate(), Ok(()));
    }

    #[test]
    fn test_password_change() {
        let mut form = PasswordChangeForm {
            current_password: "old".to_string(),
            new_password: "NewSecret1".to_string(),
            confirm_password: "NewSecret2".to_string(),
        };
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
        form.confirm_password = "NewSecret1".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_feature_catalogue_has_no_duplicates() {
        let mut features = PROPERTY_FEATURES.to_vec();
        features.sort();
        features.dedup();
        assert_eq!(features.len(), PROPERTY_FEATURES.len());
    }

    #[test]
    fn test_profile_form_prefills_from_user() {
        let users = crate::store::seed::users();
        let john = users.iter().find(|u| u.id == "user1").unwrap();
        let mut form = ProfileForm::from_user(john);
        assert_eq!(form.name, john.name);
        assert_eq!(form.email, john.email);
        assert_eq!(form.phone, john.phone.clone().unwrap_or_default());
        assert!(form.bio.is_empty());
        assert_eq!(form.validate(), Ok(()));

        form.email = " ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingField("email")));
    }

    #[test]
    fn test_notification_defaults_and_toggles() {
        let mut settings = NotificationSettings::default();
        assert_eq!(
            settings.enabled(),
            vec![
                NotificationPreference::EmailNotifications,
                NotificationPreference::PushNotifications,
                NotificationPreference::PropertyUpdates,
                NotificationPreference::PriceAlerts,
            ]
        );

        settings.set(NotificationPreference::NewListings, true);
        settings.set(NotificationPreference::EmailNotifications, false);
        assert!(settings.new_listings);
        assert!(!settings.get(NotificationPreference::EmailNotifications));

        let json = serde_json::to_value(settings).unwrap();
        assert_eq!(json["marketingEmails"], false);
        assert_eq!(json["newListings"], true);
        assert_eq!(
            "price-alerts".parse::<NotificationPreference>(),
            Ok(NotificationPreference::PriceAlerts)
        );
    }
}
