//! aroverlay: camera optics and radar overlay core for augmented-reality views.
//!
//! The overlay projects points of interest onto the camera image. The
//! projection comes from a [`CameraModel`], built from the focal length and
//! sensor size of the device camera, and a radar shows the same points from
//! above.
//!
//! # Quick Start
//!
//! ```no_run
//! use aroverlay::*;
//!
//! fn main() -> Result<()> {
//!     init_with_options(Options::new().with_camera(CameraSource::Device {
//!         model: "iPhone2,1".to_string(),
//!         catalog: None,
//!     }))?;
//!
//!     let camera = current_camera();
//!     if let Some(view_point) = camera.project(DVec3::new(0.1, 0.2, -3.0)) {
//!         println!("feature at {view_point}");
//!     }
//!
//!     let mut radar = create_radar_view(())?;
//!     radar.update_with_spatial_state(&SpatialState::default(), false);
//!     Ok(())
//! }
//! ```

mod init;
mod radar;

// Re-export core types
pub use aroverlay_core::{
    camera::{CameraModel, CameraSpec},
    error::{OverlayError, Result},
    options::{CameraSource, Options, RadarOptions},
    provider::{
        default_device_catalog, CameraProvider, DeviceCamera, DeviceCameraProvider,
        FixedCameraProvider, VirtualCamera, VirtualCameraProvider,
    },
    radar::{RadarBounds, RadarLayers, RadarView},
    spatial::{Feature, GeoLocation, SpatialState},
    uniforms::CameraUniforms,
    DMat4, DQuat, DVec2, DVec3,
};

pub use init::{
    current_camera, current_camera_with, init, init_with_options, is_initialized, options,
};
pub use radar::create_radar_view;
