//! Estate Market: listings, search, a demo auth layer and dashboards for a
//! real-estate marketplace backed by in-memory seed data.

/// Implements `as_str`, `Display`, `FromStr` and an `ALL` table for a
/// fieldless enum whose variants map one-to-one onto lowercase tokens.
macro_rules! text_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err($crate::error::ParseEnumError::new($kind, s)),
                }
            }
        }
    };
}

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod models;
pub mod search;
pub mod store;
pub mod submissions;

pub use auth::{AuthService, FileSessionStore, MemorySessionStore, SessionStore};
pub use config::{Latency, MarketConfig};
pub use error::{AuthError, ValidationError};
pub use models::{Inquiry, InquiryStatus, Property, PropertyStatus, PropertyType, Role, User};
pub use search::{search, search_saved, SearchFilters, SortKey};
pub use store::MemoryStore;
