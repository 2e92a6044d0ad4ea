//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where components were drawn in the last render
//! pass, and `region_at()` tells which component is at a screen position.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
