//! App State Components
//!
//! Groups renderer-side state into logical modules. Tracking state itself
//! lives in the core tracker.

mod emphasis;
mod layout;
mod sections;
mod viewport;

pub use emphasis::EmphasisState;
pub use layout::LayoutState;
pub use sections::{anchor_offset, layout_sections, Section};
pub use viewport::PixelScale;
