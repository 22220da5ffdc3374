//! Presentational UI components over a shared design-token table.
//!
//! Each component is a pure function from props to a visual tree: no internal
//! state, no I/O. `Pagination` in particular never owns the current page —
//! the caller supplies it on every render and receives change notifications
//! through callbacks.

/// Ready-to-use components: `Button` and `Pagination`.
pub mod components;

/// The render-agnostic visual tree components produce.
pub mod render;

/// Visual styling values and the layered overlay merge.
pub mod style;

/// The design-token table (colors, spacing, radii, typography).
pub mod tokens;

pub mod prelude {
    pub use crate::components::{
        Button, DEFAULT_WINDOW, Pagination, PaginationEvent, Size, Variant, build_pages, clamp,
    };
    pub use crate::render::{Icon, Node, NodeKind};
    pub use crate::style::{Border, Color, Cursor, Visual};
    pub use crate::tokens::{TokenValue, Tokens, tokens};
}
