//! Outline model types for structured narrative representation.
//!
//! This module defines the intermediate representation that bridges
//! narrative parsing and rendering. Every type is plain owned data, so an
//! outline can be cached, sent across threads, or serialized as-is.

mod category;
mod line;
mod outline;
mod section;

pub use category::Category;
pub use line::ClassifiedLine;
pub use outline::{Outline, OutlineNode};
pub use section::Section;
