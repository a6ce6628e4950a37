//! Trail rendering - projects the trail scene into clip-space vertices

use crate::trail::{TrailPoint, TrailScene};
use super::shapes::{create_marker_vertices, create_segment_vertices, Vertex};

/// Colors for the trail
pub(crate) mod colors {
    pub const LINE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const MARKER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: wgpu::Color = wgpu::Color::BLACK;
}

/// Marker radius in clip units
const MARKER_RADIUS: f32 = 0.004;
const MARKER_SEGMENTS: u32 = 8;
const LINE_WIDTH: f32 = 0.0015;

/// Rotate and project scene points. Points outside the depth range of the
/// camera are dropped, like the GPU would clip them.
fn project_points(scene: &TrailScene, points: &[TrailPoint]) -> Vec<Option<(f32, f32)>> {
    points
        .iter()
        .map(|point| {
            let ndc = scene.camera().project(&scene.rotate(point));
            let visible = ndc.z.is_finite() && (-1.0..=1.0).contains(&ndc.z);
            visible.then_some((ndc.x, ndc.y))
        })
        .collect()
}

/// Build the full vertex list for the current trail (line first, markers on top)
pub fn build_trail_vertices(scene: &TrailScene) -> Vec<Vertex> {
    let line = project_points(scene, scene.line());
    let markers = project_points(scene, scene.markers());
    let aspect = scene.camera().aspect();
    let mut vertices = Vec::new();

    for pair in line.windows(2) {
        if let [Some(from), Some(to)] = pair {
            vertices.extend(create_segment_vertices(*from, *to, LINE_WIDTH, colors::LINE));
        }
    }

    for center in markers.iter().flatten() {
        vertices.extend(create_marker_vertices(
            *center,
            MARKER_RADIUS,
            aspect,
            colors::MARKER,
            MARKER_SEGMENTS,
        ));
    }

    vertices
}
