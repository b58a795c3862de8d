pub mod engine;
pub mod text;
pub mod types;

pub use engine::{search, search_saved};
pub use types::{SearchFilters, SortKey};
