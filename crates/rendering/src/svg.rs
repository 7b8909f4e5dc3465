//! SVG and HTML text output for scenes.
//!
//! `render_svg` writes a single `<svg>` element. `render_page` lays out the
//! full scene, the water-only scene and the summary lines as an HTML
//! fragment, which is what the export writes to disk.

use simulation::summary::{diagnostics_lines, summary_message};
use simulation::{HeightProfile, WaterResult};

use crate::palette::{Paint, Palette};
use crate::scene::{SceneDescription, SceneLayout, Shape};

pub fn render_svg(scene: &SceneDescription, palette: &Palette) -> String {
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">\n",
        w = scene.width,
        h = scene.height
    );

    for shape in &scene.shapes {
        match *shape {
            Shape::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => {
                out.push_str(&format!(
                    "  <rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" {}/>\n",
                    fill_attrs(palette, fill)
                ));
            }
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
            } => {
                out.push_str(&format!(
                    "  <line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
                    palette.swatch(stroke).hex()
                ));
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn fill_attrs(palette: &Palette, paint: Paint) -> String {
    let swatch = palette.swatch(paint);
    if swatch.is_opaque() {
        format!("fill=\"{}\"", swatch.hex())
    } else {
        format!(
            "fill=\"{}\" fill-opacity=\"{}\"",
            swatch.hex(),
            swatch.opacity
        )
    }
}

/// Both scenes for `result`, the summary and the diagnostics, as HTML.
pub fn render_page(
    input: &HeightProfile,
    result: &WaterResult,
    layout: &SceneLayout,
    palette: &Palette,
) -> String {
    let heights = &result.display_profile;
    let main = layout.project(heights, result.boundaries_added);
    let water_only = layout.project_water_only(heights);
    let [input_line, display_line] = diagnostics_lines(input, result);

    format!(
        "<div class=\"svg-wrapper\">\n{}</div>\n<br>\n<div class=\"svg-wrapper\">\n{}</div>\n<p id=\"result\">{}</p>\n<p>{}</p>\n<p>{}</p>\n",
        render_svg(&main, palette),
        render_svg(&water_only, palette),
        summary_message(result),
        input_line,
        display_line
    )
}
