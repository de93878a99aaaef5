//! Integration tests for the process-wide camera.
//!
//! Note: The options and the current camera can only be set once per process
//! (OnceLock), so all checks run in a single test function.

use std::thread;

use aroverlay::*;

#[test]
fn test_current_camera_lifecycle() {
    let options = Options::new()
        .with_camera(CameraSource::Device {
            model: "iPhone2,1".to_string(),
            catalog: None,
        })
        .with_radar(RadarOptions {
            radius: 400.0,
            use_relative_altitude: true,
        });
    init_with_options(options.clone()).expect("init failed");
    assert!(is_initialized());
    assert_eq!(aroverlay::options(), options);

    // Test 1: Second init is rejected
    assert!(matches!(init(), Err(OverlayError::AlreadyInitialized)));

    // Test 2: Concurrent first access resolves a single camera
    {
        let addresses: Vec<usize> = (0..8)
            .map(|_| thread::spawn(|| current_camera() as *const CameraModel as usize))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().expect("thread panicked"))
            .collect();
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    }

    // Test 3: The configured device camera was chosen
    {
        let camera = current_camera();
        assert!(camera.is_physical());
        assert_eq!(camera.focal_length(), 0.00385);
    }

    // Test 4: Later providers are ignored
    {
        let first = current_camera();
        let again = current_camera_with(&VirtualCameraProvider::default());
        assert!(std::ptr::eq(first, again));
        assert!(again.is_physical());
    }

    // Test 5: Radar views pick up the camera and radar defaults
    {
        let radar = create_radar_view(()).expect("radar creation failed");
        assert_eq!(radar.radius(), 400.0);
        assert!(radar.uses_relative_altitude());
        assert_eq!(radar.camera(), current_camera());
    }
}
