//! Initialization and the process-wide camera.

use aroverlay_core::state;

use crate::{CameraModel, CameraProvider, Options, Result};

/// Initializes aroverlay with default options.
///
/// # Errors
///
/// Returns an error if aroverlay has already been initialized.
pub fn init() -> Result<()> {
    init_with_options(Options::default())
}

/// Initializes aroverlay with the given options.
///
/// Call this before the first [`current_camera()`] so the configured camera
/// source is used.
///
/// # Errors
///
/// Returns an error if aroverlay has already been initialized.
pub fn init_with_options(options: Options) -> Result<()> {
    let _ = env_logger::try_init();
    state::init_options(options)?;
    log::info!("aroverlay initialized");
    Ok(())
}

/// Returns whether aroverlay has been initialized.
#[must_use]
pub fn is_initialized() -> bool {
    state::is_initialized()
}

/// Returns the active options, or the defaults before [`init()`].
#[must_use]
pub fn options() -> Options {
    state::options()
}

/// Returns the camera of the current device.
///
/// For devices without a camera this is a virtual camera corresponding to
/// looking through the device at arm's length. The camera is resolved once and
/// every call returns the same instance.
#[must_use]
pub fn current_camera() -> &'static CameraModel {
    state::current_camera()
}

/// Returns the camera of the current device, resolving it with `provider` on
/// the first request.
#[must_use]
pub fn current_camera_with(provider: &dyn CameraProvider) -> &'static CameraModel {
    state::current_camera_with(provider)
}
