pub mod credentials;
pub mod service;
pub mod session;

pub use credentials::{DemoCredential, DEMO_CREDENTIALS};
pub use service::{AuthService, NewAccount};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
