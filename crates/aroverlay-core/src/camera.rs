//! Camera optics.
//!
//! A [`CameraModel`] is built from a focal length and an image plane (sensor)
//! size, both in meters. From those two inputs it derives:
//! - the distance to a normalized `[-1,1]x[-1,1]` view plane that reproduces the
//!   lens' field of view along the smaller sensor axis,
//! - the largest full angle of view,
//! - a perspective transform onto the view plane.
//!
//! # Matrix convention
//!
//! Matrices are glam `DMat4` (column-major, column vectors: `clip = M * p`).
//! Camera space is right-handed and the camera looks down `-Z`. For a view
//! plane distance `d` the transform is
//!
//! ```text
//! | d 0  0 0 |
//! | 0 d  0 0 |
//! | 0 0  0 1 |
//! | 0 0 -1 0 |
//! ```
//!
//! so `(x, y, z, 1)` maps to `(d*x, d*y, 1, -z)`. After the perspective divide
//! a point at depth `-d` lands on itself and the third component holds inverse
//! depth. There are no clip planes.

use glam::{DMat4, DVec2, DVec3, DVec4};
use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, Result};
use crate::uniforms::CameraUniforms;

/// Physical description of a lens and sensor, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSpec {
    /// Focal length of the lens.
    pub focal_length: f64,
    /// Sensor width and height.
    pub image_plane_size: DVec2,
}

impl CameraSpec {
    /// Creates a new camera spec.
    pub fn new(focal_length: f64, image_plane_size: DVec2) -> Self {
        Self {
            focal_length,
            image_plane_size,
        }
    }

    /// Checks that every dimension is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        require_positive("focal length", self.focal_length)?;
        require_positive("image plane width", self.image_plane_size.x)?;
        require_positive("image plane height", self.image_plane_size.y)
    }

    /// Builds a camera model from this spec.
    pub fn to_camera(&self, physical: bool) -> Result<CameraModel> {
        CameraModel::new(self.focal_length, self.image_plane_size, physical)
    }
}

fn require_positive(what: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(OverlayError::InvalidArgument(format!(
            "{what} must be finite and strictly positive, got {value}"
        )))
    }
}

/// Information about a camera: its optics and the projection they imply.
///
/// All derived values are computed once in [`CameraModel::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraModel {
    physical: bool,
    focal_length: f64,
    image_plane_size: DVec2,
    distance_to_view_plane: f64,
    angle_of_view: f64,
    perspective_transform: DMat4,
}

impl CameraModel {
    /// Creates a camera model.
    ///
    /// `focal_length` and both components of `image_plane_size` are in meters
    /// and must be finite and strictly positive. `physical` records whether the
    /// values belong to an actual device camera.
    pub fn new(focal_length: f64, image_plane_size: DVec2, physical: bool) -> Result<Self> {
        CameraSpec::new(focal_length, image_plane_size).validate()?;

        let min_dimension = image_plane_size.min_element();
        let max_dimension = image_plane_size.max_element();

        // The smaller sensor axis spans the full [-1,1] extent of the view plane.
        let distance_to_view_plane = focal_length * 2.0 / min_dimension;
        let angle_of_view = 2.0 * (max_dimension / 2.0).atan2(focal_length);

        // Extreme magnitudes overflow or underflow the derived values.
        if !(distance_to_view_plane.is_finite() && distance_to_view_plane > 0.0) {
            return Err(OverlayError::InvalidArgument(format!(
                "focal length {focal_length} and image plane size {image_plane_size} give \
                 distance to view plane {distance_to_view_plane}"
            )));
        }
        if !(angle_of_view > 0.0 && angle_of_view < std::f64::consts::PI) {
            return Err(OverlayError::InvalidArgument(format!(
                "focal length {focal_length} and image plane size {image_plane_size} give \
                 angle of view {angle_of_view}"
            )));
        }
        if !(max_dimension / min_dimension).is_finite() {
            return Err(OverlayError::InvalidArgument(format!(
                "image plane size {image_plane_size} is too elongated"
            )));
        }

        Ok(Self {
            physical,
            focal_length,
            image_plane_size,
            distance_to_view_plane,
            angle_of_view,
            perspective_transform: perspective_matrix(distance_to_view_plane),
        })
    }

    /// Whether the values correspond to an actual physical camera.
    #[must_use]
    pub fn is_physical(&self) -> bool {
        self.physical
    }

    /// Focal length of the camera in meters.
    #[must_use]
    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    /// Dimensions of the image plane (camera sensor) in meters.
    #[must_use]
    pub fn image_plane_size(&self) -> DVec2 {
        self.image_plane_size
    }

    /// The input pair this camera was built from.
    #[must_use]
    pub fn spec(&self) -> CameraSpec {
        CameraSpec::new(self.focal_length, self.image_plane_size)
    }

    /// Distance to the `[-1,1]x[-1,1]` view plane in logical units.
    #[must_use]
    pub fn distance_to_view_plane(&self) -> f64 {
        self.distance_to_view_plane
    }

    /// The largest full angle of view in radians.
    #[must_use]
    pub fn angle_of_view(&self) -> f64 {
        self.angle_of_view
    }

    /// Full angle of view across the sensor width, in radians.
    #[must_use]
    pub fn horizontal_angle_of_view(&self) -> f64 {
        2.0 * (self.image_plane_size.x / 2.0).atan2(self.focal_length)
    }

    /// Full angle of view across the sensor height, in radians.
    #[must_use]
    pub fn vertical_angle_of_view(&self) -> f64 {
        2.0 * (self.image_plane_size.y / 2.0).atan2(self.focal_length)
    }

    /// Sensor aspect ratio (width / height).
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.image_plane_size.x / self.image_plane_size.y
    }

    /// Perspective transform onto the view plane. See the module docs for the
    /// matrix layout.
    #[must_use]
    pub fn perspective_transform(&self) -> DMat4 {
        self.perspective_transform
    }

    /// Half extents of the captured image on the view plane.
    ///
    /// The smaller sensor axis is exactly 1; the larger one extends past the
    /// view plane square in proportion to the aspect ratio.
    #[must_use]
    pub fn image_plane_extent(&self) -> DVec2 {
        self.image_plane_size / self.image_plane_size.min_element()
    }

    /// Projects a camera-space point onto the view plane.
    ///
    /// Returns `None` for points on or behind the camera (`z >= 0`).
    #[must_use]
    pub fn project(&self, point: DVec3) -> Option<DVec2> {
        let clip = self.perspective_transform * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(DVec2::new(clip.x / clip.w, clip.y / clip.w))
    }

    /// Returns the unit camera-space ray direction through a view-plane point.
    #[must_use]
    pub fn unproject(&self, view_point: DVec2) -> DVec3 {
        DVec3::new(view_point.x, view_point.y, -self.distance_to_view_plane).normalize()
    }

    /// Whether a camera-space point projects inside the captured image.
    #[must_use]
    pub fn is_visible(&self, point: DVec3) -> bool {
        let extent = self.image_plane_extent();
        self.project(point).is_some_and(|p| p.abs().cmple(extent).all())
    }

    /// Returns the GPU uniform block for this camera.
    #[must_use]
    pub fn uniforms(&self) -> CameraUniforms {
        CameraUniforms::from_camera(self)
    }
}

fn perspective_matrix(distance: f64) -> DMat4 {
    DMat4::from_cols(
        DVec4::new(distance, 0.0, 0.0, 0.0),
        DVec4::new(0.0, distance, 0.0, 0.0),
        DVec4::new(0.0, 0.0, 0.0, -1.0),
        DVec4::new(0.0, 0.0, 1.0, 0.0),
    )
}
