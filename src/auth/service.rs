use super::credentials;
use super::session::{Session, SessionStore};
use crate::config::Latency;
use crate::error::AuthError;
use crate::models::{Role, User};
use crate::store::UserRepository;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

/// Details of an account about to be created. Produced by
/// [`RegistrationForm::validate`](crate::forms::RegistrationForm::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
}

/// Demo authentication: fixed credentials, a user list, and the session they
/// establish.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    session: Session,
    latency: Latency,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionStore>,
        latency: Latency,
    ) -> Self {
        Self {
            users,
            session: Session::new(sessions),
            latency,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Signs in one of the demo accounts. On any failure the previous session
    /// is left as it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        tokio::time::sleep(self.latency.login).await;
        info!("Login attempt for {}", email);

        if credentials::verify(email, password).is_none() {
            warn!("Rejected credentials for {}", email);
            return Err(AuthError::InvalidCredentials);
        }

        let user = self
            .users
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(email.to_string()))?;

        self.session.establish(user.clone()).await?;
        info!("Signed in {} ({})", user.email, user.role);
        Ok(user)
    }

    /// Creates an account and signs it in.
    pub async fn register(&self, account: NewAccount) -> Result<User, AuthError> {
        tokio::time::sleep(self.latency.register).await;

        if self.users.find_user_by_email(&account.email).await?.is_some() {
            warn!("Registration refused, {} already exists", account.email);
            return Err(AuthError::DuplicateEmail(account.email));
        }

        let user = User {
            id: self.next_user_id().await?,
            name: account.name,
            email: account.email,
            phone: account.phone,
            avatar: None,
            role: account.role,
            saved_properties: Vec::new(),
            inquiries: Vec::new(),
            created_at: Utc::now(),
        };

        self.users.insert_user(user.clone()).await?;
        self.session.establish(user.clone()).await?;
        info!("Registered {} as {} ({})", user.email, user.id, user.role);
        Ok(user)
    }

    pub async fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(self.session.current_user().await?)
    }

    pub async fn logout(&self) -> Result<(), AuthError> {
        self.session.end().await?;
        info!("Signed out");
        Ok(())
    }

    pub async fn is_authenticated(&self) -> Result<bool, AuthError> {
        Ok(self.current_user().await?.is_some())
    }

    pub async fn has_role(&self, role: Role) -> Result<bool, AuthError> {
        Ok(self.current_user().await?.is_some_and(|u| u.role == role))
    }

    pub async fn can_access_admin(&self) -> Result<bool, AuthError> {
        self.has_role(Role::Admin).await
    }

    /// Guard for pages that need a signed-in user.
    pub async fn require_user(&self) -> Result<User, AuthError> {
        self.current_user().await?.ok_or(AuthError::NotAuthenticated)
    }

    /// Guard for the admin panel.
    pub async fn require_admin(&self) -> Result<User, AuthError> {
        let user = self.require_user().await?;
        match user.role {
            Role::Admin => Ok(user),
            Role::Client | Role::Agent => Err(AuthError::Forbidden(Role::Admin)),
        }
    }

    // `user_<unix millis>`, bumped until unused
    async fn next_user_id(&self) -> anyhow::Result<String> {
        let mut stamp = Utc::now().timestamp_millis();
        loop {
            let id = format!("user_{}", stamp);
            if self.users.find_user(&id).await?.is_none() {
                return Ok(id);
            }
            stamp += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemorySessionStore;
    use crate::store::MemoryStore;

    fn service() -> (AuthService, Arc<MemoryStore>, Arc<MemorySessionStore>) {
        let store = Arc::new(MemoryStore::seeded());
        let sessions = Arc::new(MemorySessionStore::new());
        let auth = AuthService::new(store.clone(), sessions.clone(), Latency::none());
        (auth, store, sessions)
    }

    fn jane() -> NewAccount {
        NewAccount {
            name: "Jane Roe".to_string(),
            email: "jane.roe@example.com".to_string(),
            phone: None,
            role: Role::Client,
        }
    }

    #[tokio::test]
    async fn test_login_admin() {
        let (auth, _, sessions) = service();
        let user = auth.login("admin@realestate.com", "password").await.unwrap();
        assert_eq!(user.id, "admin1");
        assert_eq!(user.role, Role::Admin);

        assert_eq!(auth.current_user().await.unwrap(), Some(user.clone()));
        assert_eq!(sessions.get().await.unwrap(), Some(user));
        assert!(auth.can_access_admin().await.unwrap());
    }

    #[tokio::test]
    async fn test_wrong_password_keeps_prior_session() {
        let (auth, _, _) = service();
        let john = auth.login("john@example.com", "password").await.unwrap();

        let err = auth.login("admin@realestate.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(auth.current_user().await.unwrap(), Some(john));
    }

    #[tokio::test]
    async fn test_wrong_password_without_session() {
        let (auth, _, _) = service();
        let err = auth.login("admin@realestate.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(!auth.is_authenticated().await.unwrap());
    }

    #[tokio::test]
    async fn test_credential_without_user_record() {
        let store = Arc::new(MemoryStore::new(Vec::new(), Vec::new(), Vec::new()));
        let auth = AuthService::new(store, Arc::new(MemorySessionStore::new()), Latency::none());
        let err = auth.login("john@example.com", "password").await.unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound(email) if email == "john@example.com"));
    }

    #[tokio::test]
    async fn test_register_creates_and_signs_in() {
        let (auth, store, _) = service();
        let user = auth.register(jane()).await.unwrap();

        assert!(user.id.starts_with("user_"));
        assert!(user.saved_properties.is_empty());
        assert!(user.inquiries.is_empty());
        assert_eq!(
            store.find_user_by_email("jane.roe@example.com").await.unwrap(),
            Some(user.clone())
        );
        assert_eq!(auth.current_user().await.unwrap(), Some(user));
        assert!(auth.has_role(Role::Client).await.unwrap());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let (auth, store, _) = service();
        let mut account = jane();
        account.email = "jane@example.com".to_string();

        let err = auth.register(account).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail(_)));
        assert_eq!(store.list_users().await.unwrap().len(), 7);
        assert!(auth.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_register_twice_gets_distinct_ids() {
        let (auth, _, _) = service();
        let first = auth.register(jane()).await.unwrap();
        let mut other = jane();
        other.email = "someone@example.com".to_string();
        let second = auth.register(other).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_logout_clears_both_layers() {
        let (auth, _, sessions) = service();
        auth.login("agent@realestate.com", "password").await.unwrap();
        assert!(auth.has_role(Role::Agent).await.unwrap());

        auth.logout().await.unwrap();
        assert!(auth.current_user().await.unwrap().is_none());
        assert!(sessions.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_guards() {
        let (auth, _, _) = service();
        assert!(matches!(auth.require_user().await, Err(AuthError::NotAuthenticated)));
        assert!(matches!(auth.require_admin().await, Err(AuthError::NotAuthenticated)));

        auth.login("john@example.com", "password").await.unwrap();
        assert_eq!(auth.require_user().await.unwrap().id, "user1");
        assert!(matches!(
            auth.require_admin().await,
            Err(AuthError::Forbidden(Role::Admin))
        ));

        auth.login("admin@realestate.com", "password").await.unwrap();
        assert_eq!(auth.require_admin().await.unwrap().id, "admin1");
    }

    #[tokio::test]
    async fn test_session_survives_new_service() {
        let store = Arc::new(MemoryStore::seeded());
        let sessions = Arc::new(MemorySessionStore::new());

        let first = AuthService::new(store.clone(), sessions.clone(), Latency::none());
        first.login("john@example.com", "password").await.unwrap();

        let second = AuthService::new(store, sessions, Latency::none());
        assert_eq!(second.current_user().await.unwrap().unwrap().id, "user1");
    }
}
