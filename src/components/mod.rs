// Re-export components
mod button;
mod pagination;

pub use button::{Button, Size, Variant};
pub use pagination::{DEFAULT_WINDOW, Pagination, PaginationEvent, build_pages, clamp};
