#![cfg(feature = "minifb-backend")]

use fractree_graphics::{create_backend, DisplayBackend, MiniFBDisplay};
use fractree_lib::{Controller, Viewer, ViewerSettings};

#[test]
#[ignore]
fn minifb() {
    // needs a display, close the window (or hit escape) to end the test
    let viewer = Viewer::new(Controller::default(), 500, 700, ViewerSettings::default());
    let backend: Box<dyn DisplayBackend> = Box::new(MiniFBDisplay::new());
    backend.run(viewer).unwrap();
}

#[test]
fn minifb_is_registered() {
    let backend = create_backend("minifb").unwrap();
    assert_eq!("minifb", backend.name());
}
