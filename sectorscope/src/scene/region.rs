//! Filled region compilation.
//!
//! Sector files describe filled areas (runway surfaces, taxiways, aprons) as
//! many small named polygons, and consecutive polygons usually share a name.
//! Each contiguous run of same-named polygons becomes one drawable, which
//! cuts draw calls while keeping, say, one airport's runways together for
//! culling. Same-named runs elsewhere in the file stay separate.

use tracing::{debug, warn};

use super::StaticDrawable;
use crate::draw::{CommandBuffer, TrianglesDrawBuilder};
use crate::geo::Point2LL;
use crate::sector::Region;

/// Triangulation failure for a single polygon.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("failed to triangulate polygon: {0}")]
pub struct TriangulateError(String);

/// Triangulate a simple (possibly concave) polygon in lon/lat space.
pub fn triangulate(polygon: &[Point2LL]) -> Result<Vec<[Point2LL; 3]>, TriangulateError> {
    let coords: Vec<f64> = polygon
        .iter()
        .flat_map(|p| [p.lon as f64, p.lat as f64])
        .collect();

    let indices =
        earcutr::earcut(&coords, &[], 2).map_err(|e| TriangulateError(format!("{:?}", e)))?;

    Ok(indices
        .chunks_exact(3)
        .map(|tri| [polygon[tri[0]], polygon[tri[1]], polygon[tri[2]]])
        .collect())
}

/// Compile regions into drawables, merging contiguous same-name runs.
pub fn compile_regions(regions: &[Region]) -> Vec<StaticDrawable> {
    let mut compiled = Vec::new();
    let mut current_name: Option<&str> = None;
    let mut td = TrianglesDrawBuilder::new();

    for region in regions {
        if region.p.is_empty() {
            warn!(region = %region.name, "Zero vertices in region, skipping");
            continue;
        }

        if current_name != Some(region.name.as_str()) {
            if let Some(name) = current_name {
                flush(&mut compiled, name, &mut td);
            }
            current_name = Some(region.name.as_str());
        }

        let polygon: Vec<Point2LL> = region.p.iter().map(|ll| ll.to_point()).collect();
        match triangulate(&polygon) {
            Ok(triangles) => {
                for [v0, v1, v2] in triangles {
                    td.add_triangle(v0, v1, v2);
                }
            }
            Err(e) => warn!(region = %region.name, error = %e, "Skipping region"),
        }
    }

    if let Some(name) = current_name {
        flush(&mut compiled, name, &mut td);
    }

    debug!(
        polygons = regions.len(),
        drawables = compiled.len(),
        "Compiled regions"
    );
    compiled
}

/// Emit the accumulated triangles as one drawable, if there are any.
fn flush(compiled: &mut Vec<StaticDrawable>, name: &str, td: &mut TrianglesDrawBuilder) {
    if td.is_empty() {
        return;
    }
    let mut cb = CommandBuffer::new();
    td.generate_commands(&mut cb);
    compiled.push(StaticDrawable::new(name, cb, td.bounds()));
    td.reset();
}
