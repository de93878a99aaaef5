//! Radar overlay.
//!
//! A [`RadarView`] shows the features around the device from above. The view
//! owns the feature list, the radar radius, the laid-out bounds and whether the
//! device lay flat at the last layout; drawing is
//! delegated to a [`RadarLayers`] implementation, composited back to front:
//! background, extent of view, blips.

use glam::DVec2;

use crate::camera::CameraModel;
use crate::error::{OverlayError, Result};
use crate::options::RadarOptions;
use crate::spatial::{Feature, SpatialState};

/// Screen rectangle occupied by the radar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RadarBounds {
    /// Top-left corner in points.
    pub origin: DVec2,
    /// Width and height in points.
    pub size: DVec2,
}

impl RadarBounds {
    /// Creates new bounds.
    pub fn new(origin: DVec2, size: DVec2) -> Self {
        Self { origin, size }
    }

    /// Center of the rectangle.
    pub fn center(&self) -> DVec2 {
        self.origin + self.size * 0.5
    }
}

/// Rendering layers of a radar view.
///
/// Implementations own all radar geometry.
pub trait RadarLayers {
    /// Lays the layers out in new bounds or for a new device attitude.
    fn layout(&mut self, bounds: RadarBounds, device_horizontal: bool);

    /// Updates the background disc.
    fn update_background(&mut self, spatial_state: &SpatialState);

    /// Updates the wedge showing what the camera sees.
    fn update_extent_of_view(&mut self, camera: &CameraModel, spatial_state: &SpatialState);

    /// Updates one blip per feature.
    fn update_blips(
        &mut self,
        features: &[Feature],
        radius: f64,
        spatial_state: &SpatialState,
        use_relative_altitude: bool,
    );
}

impl RadarLayers for () {
    fn layout(&mut self, _bounds: RadarBounds, _device_horizontal: bool) {}

    fn update_background(&mut self, _spatial_state: &SpatialState) {}

    fn update_extent_of_view(&mut self, _camera: &CameraModel, _spatial_state: &SpatialState) {}

    fn update_blips(
        &mut self,
        _features: &[Feature],
        _radius: f64,
        _spatial_state: &SpatialState,
        _use_relative_altitude: bool,
    ) {
    }
}

/// Top-down radar of nearby features.
#[derive(Debug, Clone)]
pub struct RadarView<L: RadarLayers = ()> {
    features: Vec<Feature>,
    radius: f64,
    use_relative_altitude: bool,
    camera: CameraModel,
    bounds: RadarBounds,
    laid_out_bounds: Option<RadarBounds>,
    device_horizontal: bool,
    layers: L,
}

impl<L: RadarLayers> RadarView<L> {
    /// Default radar radius in meters.
    pub const DEFAULT_RADIUS: f64 = 1000.0;

    /// Creates a radar view without features.
    pub fn new(camera: CameraModel, layers: L) -> Self {
        Self {
            features: Vec::new(),
            radius: Self::DEFAULT_RADIUS,
            use_relative_altitude: false,
            camera,
            bounds: RadarBounds::default(),
            laid_out_bounds: None,
            device_horizontal: true,
            layers,
        }
    }

    /// Creates a radar view using configured defaults.
    pub fn with_options(camera: CameraModel, layers: L, options: &RadarOptions) -> Result<Self> {
        let mut view = Self::new(camera, layers);
        view.set_radius(options.radius)?;
        view.use_relative_altitude = options.use_relative_altitude;
        Ok(view)
    }

    /// Returns the features shown on the radar.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Replaces the features shown on the radar.
    pub fn set_features(&mut self, features: impl Into<Vec<Feature>>) {
        self.features = features.into();
        log::debug!("radar now tracks {} features", self.features.len());
    }

    /// Returns the radar extent in meters.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Sets the radar extent in meters. Must be finite and strictly positive.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(OverlayError::InvalidArgument(format!(
                "radar radius must be finite and strictly positive, got {radius}"
            )));
        }
        self.radius = radius;
        Ok(())
    }

    /// Whether [`RadarView::update`] uses altitude relative to the device.
    pub fn uses_relative_altitude(&self) -> bool {
        self.use_relative_altitude
    }

    /// Sets the altitude mode used by [`RadarView::update`].
    pub fn set_use_relative_altitude(&mut self, use_relative_altitude: bool) {
        self.use_relative_altitude = use_relative_altitude;
    }

    /// Returns the camera whose extent of view is drawn.
    pub fn camera(&self) -> &CameraModel {
        &self.camera
    }

    /// Returns the current bounds.
    pub fn bounds(&self) -> RadarBounds {
        self.bounds
    }

    /// Sets the bounds. Layers are laid out again on the next update.
    pub fn set_bounds(&mut self, bounds: RadarBounds) {
        self.bounds = bounds;
    }

    /// Whether the device lay flat at the last update.
    pub fn is_device_horizontal(&self) -> bool {
        self.device_horizontal
    }

    /// Returns the rendering layers.
    pub fn layers(&self) -> &L {
        &self.layers
    }

    /// Returns the rendering layers mutably.
    pub fn layers_mut(&mut self) -> &mut L {
        &mut self.layers
    }

    /// Recomputes the radar using the configured altitude mode.
    pub fn update(&mut self, spatial_state: &SpatialState) {
        self.update_with_spatial_state(spatial_state, self.use_relative_altitude);
    }

    /// Recomputes the radar from the current features and a device pose.
    pub fn update_with_spatial_state(
        &mut self,
        spatial_state: &SpatialState,
        use_relative_altitude: bool,
    ) {
        let device_horizontal = spatial_state.is_device_horizontal();
        if self.laid_out_bounds != Some(self.bounds) || self.device_horizontal != device_horizontal
        {
            log::debug!("radar layout: bounds={:?}, horizontal={device_horizontal}", self.bounds);
            self.layers.layout(self.bounds, device_horizontal);
            self.laid_out_bounds = Some(self.bounds);
            self.device_horizontal = device_horizontal;
        }

        self.layers.update_background(spatial_state);
        self.layers.update_extent_of_view(&self.camera, spatial_state);
        self.layers.update_blips(
            &self.features,
            self.radius,
            spatial_state,
            use_relative_altitude,
        );
    }
}
