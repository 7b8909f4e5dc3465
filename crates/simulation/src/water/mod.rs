//! Trapped-water calculation for a 1-D column profile.
//!
//! Water above a column is bounded by the shorter of the tallest column to
//! its left and the tallest column to its right. `compute_water` applies
//! that rule to the raw profile and, when nothing is trapped, retries with a
//! boundary tower of `sentinel_height` at each end so the visualisation has
//! something to show.
//!
//! Pure functions only. The Bevy resources that hold the current profile
//! and its latest result live in `crate::basin`.

pub mod calculator;

#[cfg(test)]
mod tests;

pub use calculator::{
    compute_water, compute_water_default, trapped_per_column, trapped_total, WaterResult,
};
