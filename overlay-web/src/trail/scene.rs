//! Trail scene - pointer positions turned into a 3D polyline with markers
//!
//! Every insertion rebuilds the line vertices and the marker set from the
//! buffer. No diffing: the previous markers are dropped wholesale.

use nalgebra::Point3;

use super::buffer::{TrailBuffer, TrailPoint};
use super::camera::{Camera, Viewport};

pub struct TrailScene {
    buffer: TrailBuffer,
    camera: Camera,
    viewport: Viewport,

    /// Scene rotation around the vertical axis (radians)
    rotation_y: f32,

    /// Vertex positions of the connecting line, oldest first
    line: Vec<TrailPoint>,

    /// One marker per buffered point
    markers: Vec<TrailPoint>,
}

impl TrailScene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            buffer: TrailBuffer::new(),
            camera: Camera::new(viewport.aspect()),
            viewport,
            rotation_y: 0.0,
            line: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Convert a screen position plus depth into a world point and append it
    pub fn add_point(&mut self, screen_x: f32, screen_y: f32, depth_offset: f32) -> TrailPoint {
        let ndc = self.viewport.to_ndc(screen_x, screen_y, depth_offset);
        let world = self.camera.unproject(&ndc);

        self.buffer.push(world);
        self.rebuild_markers();
        self.rebuild_line();

        world
    }

    fn rebuild_markers(&mut self) {
        self.markers.clear();
        self.markers.extend(self.buffer.iter().copied());
    }

    fn rebuild_line(&mut self) {
        self.line.clear();
        self.line.extend(self.buffer.iter().copied());
    }

    /// Consecutive point pairs of the line; empty until two points exist
    pub fn segments(&self) -> impl Iterator<Item = (&TrailPoint, &TrailPoint)> + '_ {
        self.line.iter().zip(self.line.iter().skip(1))
    }

    pub fn line(&self) -> &[TrailPoint] {
        &self.line
    }

    pub fn markers(&self) -> &[TrailPoint] {
        &self.markers
    }

    pub fn buffer(&self) -> &TrailBuffer {
        &self.buffer
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn set_camera_distance(&mut self, distance: f32) {
        self.camera.set_distance(distance);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Track a resized window: new viewport and camera aspect
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn set_rotation_y(&mut self, radians: f32) {
        self.rotation_y = radians;
    }

    /// Apply the scene rotation to a world point
    pub fn rotate(&self, point: &TrailPoint) -> Point3<f32> {
        let (sin, cos) = self.rotation_y.sin_cos();
        Point3::new(
            point.x * cos + point.z * sin,
            point.y,
            -point.x * sin + point.z * cos,
        )
    }
}
