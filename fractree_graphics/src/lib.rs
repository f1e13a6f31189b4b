use anyhow::Result;
use fractree_lib::Viewer;
use tracing::error;

#[cfg(feature = "minifb-backend")]
pub mod minifb_backend;

#[cfg(feature = "pixels-backend")]
pub mod pixels_backend;

#[cfg(feature = "minifb-backend")]
pub use minifb_backend::MiniFBDisplay;

#[cfg(feature = "pixels-backend")]
pub use pixels_backend::PixelsDisplay;

/*
 * DisplayBackend
 * A window the tree is shown in. The backend owns the event loop: it feeds key
 * codes and size changes to the viewer, asks it to render and presents the
 * canvas. `run` returns once the window is closed.
 */
pub trait DisplayBackend {
    fn name(&self) -> &'static str;

    fn run(self: Box<Self>, viewer: Viewer) -> Result<()>;
}

/// Names of the backends compiled in, preferred one first.
pub fn available_backends() -> Vec<&'static str> {
    let mut backends = Vec::new();
    #[cfg(feature = "minifb-backend")]
    backends.push("minifb");
    #[cfg(feature = "pixels-backend")]
    backends.push("pixels");
    backends
}

pub fn create_backend(name: &str) -> Option<Box<dyn DisplayBackend>> {
    match name {
        #[cfg(feature = "minifb-backend")]
        "minifb" => Some(Box::new(MiniFBDisplay::new())),
        #[cfg(feature = "pixels-backend")]
        "pixels" => Some(Box::new(PixelsDisplay::new())),
        _ => None,
    }
}

/// Console line shown to the user when the display fails.
pub fn error_message(err: &anyhow::Error) -> String {
    format!("An error occurred: {:#}", err)
}

/// Reports a display error once, in the log and on the console. Used by the
/// binary and by backends whose event loop never hands the error back.
pub fn report_error(err: &anyhow::Error) {
    error!("{:#}", err);
    println!("{}", error_message(err));
}
