mod inquiry;
mod property;
mod stats;
mod user;

pub use inquiry::{Inquiry, InquiryStatus};
pub use property::{AgentSummary, Coordinates, Location, Property, PropertyStatus, PropertyType};
pub use stats::DashboardStats;
pub use user::{Role, User};
