//! Radar view creation.

use crate::{current_camera, options, RadarLayers, RadarView, Result};

/// Creates a radar view for the current camera using the configured radar
/// defaults.
///
/// # Errors
///
/// Returns an error if the configured radius is not strictly positive.
pub fn create_radar_view<L: RadarLayers>(layers: L) -> Result<RadarView<L>> {
    RadarView::with_options(*current_camera(), layers, &options().radar)
}
