//! Export — snapshot JSON and SVG renderings of the canvas.

use crate::simulation::Simulation;
use crate::world::World;
use formica_core::environment::Environment;
use formica_core::error::Result;
use std::fmt::Write as _;
use std::path::Path;

/// Pixels per grid cell in SVG output.
const CELL_PX: f64 = 10.0;

/// Render every patch on the world's canvas as an SVG document.
///
/// Patch origins are in array coordinates (row 0 at the top), so they map
/// straight onto SVG's y-down axis.
pub fn render_svg(world: &World) -> String {
    let width = world.width() as f64 * CELL_PX;
    let height = world.height() as f64 * CELL_PX;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    );
    let _ = writeln!(svg, r#"  <rect width="{}" height="{}" fill="white"/>"#, width, height);

    for patch in world.canvas().patches() {
        let fill = if patch.fill {
            patch.face_color.to_hex()
        } else {
            "none".to_string()
        };
        let _ = writeln!(
            svg,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            patch.origin.x * CELL_PX,
            patch.origin.y * CELL_PX,
            patch.width * CELL_PX,
            patch.height * CELL_PX,
            fill,
            patch.edge_color.to_hex(),
            patch.linewidth
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write the SVG rendering of the world's canvas to a file.
pub fn save_svg(world: &World, path: &Path) -> Result<()> {
    std::fs::write(path, render_svg(world))?;
    Ok(())
}

/// Write a pretty-printed JSON snapshot of the simulation to a file.
pub fn save_snapshot(sim: &Simulation, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&sim.snapshot())?;
    std::fs::write(path, json)?;
    Ok(())
}
