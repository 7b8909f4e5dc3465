use serde::{Deserialize, Serialize};

use simulation::config::{BasinConfig, COLUMN_GAP, MIN_GRID_HEIGHT, UNIT_SIZE};
use simulation::HeightProfile;

use crate::palette::Paint;

// =============================================================================
// Shapes
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Rect {
        x: u64,
        y: u64,
        width: u64,
        height: u64,
        fill: Paint,
    },
    Line {
        x1: u64,
        y1: u64,
        x2: u64,
        y2: u64,
        stroke: Paint,
    },
}

impl Shape {
    pub fn paint(&self) -> Paint {
        match self {
            Shape::Rect { fill, .. } => *fill,
            Shape::Line { stroke, .. } => *stroke,
        }
    }
}

/// A canvas size plus the shapes to draw on it, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub width: u64,
    pub height: u64,
    pub shapes: Vec<Shape>,
}

impl SceneDescription {
    /// Shapes painted with `paint`.
    pub fn shapes_with(&self, paint: Paint) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(move |s| s.paint() == paint)
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Grid dimensions used by the projector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneLayout {
    pub unit: u32,
    pub column_gap: u32,
    pub min_grid_height: u32,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            unit: UNIT_SIZE,
            column_gap: COLUMN_GAP,
            min_grid_height: MIN_GRID_HEIGHT,
        }
    }
}

impl From<&BasinConfig> for SceneLayout {
    fn from(config: &BasinConfig) -> Self {
        Self {
            unit: config.unit,
            column_gap: config.column_gap,
            min_grid_height: config.min_grid_height,
        }
    }
}

impl SceneLayout {
    pub fn column_width(&self) -> u32 {
        self.unit.saturating_sub(self.column_gap)
    }

    /// Grid height in cells: the tallest column, but never below
    /// `min_grid_height`.
    pub fn grid_height(&self, heights: &HeightProfile) -> u32 {
        heights
            .max_height()
            .unwrap_or(0)
            .max(self.min_grid_height)
    }

    /// Full scene: columns (boundary towers highlighted), water and grid.
    pub fn project(&self, heights: &HeightProfile, boundaries_added: bool) -> SceneDescription {
        self.build(heights, Some(boundaries_added))
    }

    /// Water and grid only, no columns.
    pub fn project_water_only(&self, heights: &HeightProfile) -> SceneDescription {
        self.build(heights, None)
    }

    /// `columns` is `None` for the water-only variant, otherwise whether the
    /// first and last columns are boundary towers.
    fn build(&self, heights: &HeightProfile, columns: Option<bool>) -> SceneDescription {
        let unit = u64::from(self.unit);
        let column_width = u64::from(self.column_width());
        let max_height = u64::from(self.grid_height(heights));
        let n = heights.len() as u64;
        let width = n * unit;
        let height = (max_height + 1) * unit;

        let mut shapes = Vec::new();
        if heights.is_empty() {
            return SceneDescription {
                width,
                height,
                shapes,
            };
        }

        if let Some(boundaries_added) = columns {
            let last = heights.len() - 1;
            for (i, &h) in heights.iter().enumerate() {
                let h = u64::from(h);
                let is_boundary = boundaries_added && (i == 0 || i == last);
                shapes.push(Shape::Rect {
                    x: i as u64 * unit,
                    y: (max_height - h) * unit,
                    width: column_width,
                    height: h * unit,
                    fill: if is_boundary {
                        Paint::Boundary
                    } else {
                        Paint::Column
                    },
                });
            }
        }

        for (i, (&h, water)) in heights.iter().zip(column_water_levels(heights)).enumerate() {
            if water == 0 {
                continue;
            }
            let (h, water) = (u64::from(h), u64::from(water));
            shapes.push(Shape::Rect {
                x: i as u64 * unit,
                y: (max_height - h - water) * unit,
                width: column_width,
                height: water * unit,
                fill: Paint::Water,
            });
        }

        for row in 0..=max_height {
            shapes.push(Shape::Line {
                x1: 0,
                y1: row * unit,
                x2: width,
                y2: row * unit,
                stroke: Paint::Grid,
            });
        }
        for col in 0..=n {
            shapes.push(Shape::Line {
                x1: col * unit,
                y1: 0,
                x2: col * unit,
                y2: max_height * unit,
                stroke: Paint::Grid,
            });
        }

        SceneDescription {
            width,
            height,
            shapes,
        }
    }
}

/// `SceneLayout::default().project(..)`.
pub fn project(heights: &HeightProfile, boundaries_added: bool) -> SceneDescription {
    SceneLayout::default().project(heights, boundaries_added)
}

/// `SceneLayout::default().project_water_only(..)`.
pub fn project_water_only(heights: &HeightProfile) -> SceneDescription {
    SceneLayout::default().project_water_only(heights)
}

/// Water level above each column, for drawing.
///
/// Computed here from a suffix maximum and a running prefix maximum rather
/// than taken from the calculator, so the scene stands on its own; the two
/// must agree for every profile.
pub fn column_water_levels(heights: &[u32]) -> Vec<u32> {
    let mut suffix_max = heights.to_vec();
    for i in (0..suffix_max.len().saturating_sub(1)).rev() {
        suffix_max[i] = suffix_max[i].max(suffix_max[i + 1]);
    }

    let mut prefix_max = 0;
    heights
        .iter()
        .zip(suffix_max)
        .map(|(&h, right)| {
            prefix_max = prefix_max.max(h);
            prefix_max.min(right) - h
        })
        .collect()
}
