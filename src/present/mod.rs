//! Presentation mapping: section titles to categories, outlines to display blocks.

mod blocks;
mod category_map;

pub use blocks::{present, DisplayBlock, DisplayRow};
pub use category_map::CategoryMap;
