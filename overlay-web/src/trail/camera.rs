//! Perspective camera looking down -Z
//!
//! Mirrors the usual WebGL camera conventions: NDC z in [-1, 1], camera
//! placed at (0, 0, distance) with no rotation of its own. The scene rotates
//! instead (see `TrailScene::rotation_y`).

use nalgebra::{Perspective3, Point3, Vector3};

use crate::constants::{CAMERA_BASE_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};

/// Size of the drawing surface in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Map a client-space pixel position plus depth into NDC
    pub fn to_ndc(&self, x: f32, y: f32, depth: f32) -> Point3<f32> {
        let ndc_x = (x / self.width as f32) * 2.0 - 1.0;
        let ndc_y = -(y / self.height as f32) * 2.0 + 1.0;
        Point3::new(ndc_x, ndc_y, depth)
    }
}

pub struct Camera {
    projection: Perspective3<f32>,
    distance: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            projection: Perspective3::new(
                aspect,
                CAMERA_FOV_DEGREES.to_radians(),
                CAMERA_NEAR,
                CAMERA_FAR,
            ),
            distance: CAMERA_BASE_DISTANCE,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.projection.set_aspect(aspect);
    }

    pub fn aspect(&self) -> f32 {
        self.projection.aspect()
    }

    /// Move the camera along Z (zoom)
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance;
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn position(&self) -> Point3<f32> {
        Point3::new(0.0, 0.0, self.distance)
    }

    /// NDC → world space
    pub fn unproject(&self, ndc: &Point3<f32>) -> Point3<f32> {
        let view = self.projection.unproject_point(ndc);
        view + Vector3::new(0.0, 0.0, self.distance)
    }

    /// World space → NDC
    pub fn project(&self, world: &Point3<f32>) -> Point3<f32> {
        let view = *world - Vector3::new(0.0, 0.0, self.distance);
        self.projection.project_point(&view)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_viewport_ndc_corners() {
        let viewport = Viewport::new(800, 600);
        let top_left = viewport.to_ndc(0.0, 0.0, 0.5);
        assert_eq!((top_left.x, top_left.y, top_left.z), (-1.0, 1.0, 0.5));

        let center = viewport.to_ndc(400.0, 300.0, 0.0);
        assert!(approx(center.x, 0.0) && approx(center.y, 0.0));

        let bottom_right = viewport.to_ndc(800.0, 600.0, 0.0);
        assert_eq!((bottom_right.x, bottom_right.y), (1.0, -1.0));
    }

    #[test]
    fn test_viewport_never_zero() {
        let viewport = Viewport::new(0, 0);
        assert_eq!(viewport.aspect(), 1.0);
    }

    #[test]
    fn test_unproject_center_lies_on_axis() {
        let camera = Camera::new(16.0 / 9.0);
        let world = camera.unproject(&Point3::new(0.0, 0.0, 0.5));
        assert!(approx(world.x, 0.0));
        assert!(approx(world.y, 0.0));
        // In front of the camera
        assert!(world.z < camera.distance());
    }

    #[test]
    fn test_project_inverts_unproject() {
        let mut camera = Camera::new(4.0 / 3.0);
        camera.set_distance(5.05);
        let ndc = Point3::new(0.3, -0.6, 0.2);
        let back = camera.project(&camera.unproject(&ndc));
        assert!(approx(back.x, ndc.x));
        assert!(approx(back.y, ndc.y));
        assert!(approx(back.z, ndc.z));
    }

    #[test]
    fn test_near_plane_depth() {
        let camera = Camera::new(1.0);
        let world = camera.unproject(&Point3::new(0.0, 0.0, -1.0));
        assert!(approx(world.z, CAMERA_BASE_DISTANCE - CAMERA_NEAR));
    }
}
