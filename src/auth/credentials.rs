use crate::models::Role;

/// A demo login accepted by the auth stub
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoCredential {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

/// Fixed demo accounts. Plain-text comparison only; this is not a real
/// credential store.
pub const DEMO_CREDENTIALS: [DemoCredential; 3] = [
    DemoCredential {
        email: "john@example.com",
        password: "password",
        role: Role::Client,
    },
    DemoCredential {
        email: "admin@realestate.com",
        password: "password",
        role: Role::Admin,
    },
    DemoCredential {
        email: "agent@realestate.com",
        password: "password",
        role: Role::Agent,
    },
];

pub fn verify(email: &str, password: &str) -> Option<&'static DemoCredential> {
    DEMO_CREDENTIALS
        .iter()
        .find(|cred| cred.email == email && cred.password == password)
}
