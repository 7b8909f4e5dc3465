//! Projection of a column profile onto drawable shapes.
//!
//! Coordinates are drawing units with the origin at the top-left corner and
//! y growing downwards, the same convention as SVG. Each grid cell is
//! `unit` wide; columns leave `column_gap` units free on their right.

pub mod projector;


pub use projector::{
    column_water_levels, project, project_water_only, SceneDescription, SceneLayout, Shape,
};
