use glam::{Mat4, Vec4};

use crate::{camera::FreeCamera, settings::ProjectionSettings, Error, Result};

/// Perspective projection using OpenGL's [-1, 1] clip-space depth range.
#[derive(Debug, Clone, PartialEq)]
pub struct Projector {
    matrix: Mat4,
    parameters: Vec4,
}

impl Projector {
    /// `fov` is the vertical field of view in degrees.
    pub fn new_perspective(
        fov: f32,
        aspect_ratio: f32,
        near_clip: f32,
        far_clip: f32,
    ) -> Result<Self> {
        if !(fov > 0.0 && fov < 180.0) {
            return Err(Error::Config(format!("field of view {fov} is out of range")));
        }
        if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
            return Err(Error::Config(format!("aspect ratio {aspect_ratio} must be positive")));
        }
        if !(near_clip > 0.0 && near_clip < far_clip) {
            return Err(Error::Config(format!(
                "clip planes must satisfy 0 < near ({near_clip}) < far ({far_clip})"
            )));
        }

        Ok(Self {
            matrix: Mat4::perspective_rh_gl(fov.to_radians(), aspect_ratio, near_clip, far_clip),
            parameters: Vec4::new(fov, aspect_ratio, near_clip, far_clip),
        })
    }

    pub fn from_settings(settings: &ProjectionSettings, aspect_ratio: f32) -> Result<Self> {
        Self::new_perspective(settings.fov, aspect_ratio, settings.near, settings.far)
    }

    /// Rebuilds the matrix for a resized viewport. A degenerate (minimized)
    /// size keeps the previous matrix.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        let p = self.parameters;
        match Self::new_perspective(p.x, aspect_ratio, p.z, p.w) {
            Ok(projector) => *self = projector,
            Err(e) => debug!("Keeping previous projection: {}", e),
        }
    }

    /// `(fov, aspect_ratio, near, far)`.
    pub fn parameters(&self) -> Vec4 {
        self.parameters
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }
}

/// Combined projection and view matrix consumed by the vertex shaders.
pub fn view_projection(projector: &Projector, camera: &FreeCamera) -> Mat4 {
    projector.matrix() * camera.view_matrix()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(Projector::new_perspective(0.0, 1.0, 0.1, 10.0).is_err());
        assert!(Projector::new_perspective(45.0, 0.0, 0.1, 10.0).is_err());
        assert!(Projector::new_perspective(45.0, 1.0, 10.0, 0.1).is_err());
    }

    #[test]
    fn near_and_far_planes_map_to_gl_depth_range() {
        let projector = Projector::new_perspective(45.0, 4.0 / 3.0, 0.5, 50.0).unwrap();

        let near = projector.matrix().project_point3(Vec3::new(0.0, 0.0, -0.5));
        let far = projector.matrix().project_point3(Vec3::new(0.0, 0.0, -50.0));
        assert!((near.z + 1.0).abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn resize_updates_aspect_but_ignores_minimized_windows() {
        let mut projector = Projector::new_perspective(45.0, 1.0, 0.1, 10.0).unwrap();
        projector.set_aspect_ratio(2.0);
        assert_eq!(projector.parameters().y, 2.0);

        projector.set_aspect_ratio(0.0);
        assert_eq!(projector.parameters().y, 2.0);
    }

    #[test]
    fn default_camera_sees_the_origin_centered() {
        let projector = Projector::new_perspective(45.0, 1.0, 0.01, 100.0).unwrap();
        let clip = view_projection(&projector, &FreeCamera::default()).project_point3(Vec3::ZERO);

        assert!(clip.x.abs() < 1e-6 && clip.y.abs() < 1e-6);
        assert!(clip.z > -1.0 && clip.z < 1.0);
    }
}
