/*
 * Pixels Display Backend for Fractree
 *
 * Graphics backend using pixels + winit for better cross-platform support,
 * particularly improved Wayland compatibility.
 *
 * The winit event loop takes over the calling thread and never returns: the
 * process exits when the window is closed. Errors raised while the loop runs
 * are logged and close the window.
 */
use anyhow::{Context, Result};
use fractree_lib::{key, Viewer};
use pixels::{Pixels, SurfaceTexture};
use tracing::info;
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::{report_error, DisplayBackend};

pub struct PixelsDisplay;

impl PixelsDisplay {
    pub fn new() -> PixelsDisplay {
        PixelsDisplay
    }
}

impl Default for PixelsDisplay {
    fn default() -> Self {
        Self::new()
    }
}

// Only the keys the tree reacts to, everything else is dropped here
fn get_special_key_code(key: VirtualKeyCode) -> Option<u32> {
    match key {
        VirtualKeyCode::Up => Some(key::UP),
        VirtualKeyCode::Down => Some(key::DOWN),
        VirtualKeyCode::Left => Some(key::LEFT),
        VirtualKeyCode::Right => Some(key::RIGHT),
        VirtualKeyCode::Space => Some(key::SPACE),
        VirtualKeyCode::Escape => Some(key::ESCAPE),
        _ => None,
    }
}

fn create_window(event_loop: &EventLoop<()>, viewer: &Viewer) -> Result<Window> {
    let (width, height) = viewer.canvas().dimensions();
    let size = LogicalSize::new(width as f64, height as f64);
    let window = WindowBuilder::new()
        .with_title(viewer.title())
        .with_inner_size(size)
        .build(event_loop)
        .context("Failed to create window.")?;
    Ok(window)
}

struct WindowState {
    pixels: Pixels,
    viewer: Viewer,
}

impl WindowState {
    fn new(window: &Window, mut viewer: Viewer) -> Result<Self> {
        let size = window.inner_size();
        viewer.resize(size.width as usize, size.height as usize);
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .context("Failed to create the pixel surface.")?;

        Ok(Self { pixels, viewer })
    }

    fn handle_key(&mut self, window: &Window, code: u32, control_flow: &mut ControlFlow) {
        if code == key::ESCAPE {
            *control_flow = ControlFlow::Exit;
        } else if self.viewer.handle_key(code) {
            window.set_title(&self.viewer.title());
            window.request_redraw();
        }
    }

    fn resize(&mut self, size: PhysicalSize<u32>) -> Result<()> {
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }
        self.pixels
            .resize_surface(size.width, size.height)
            .context("pixels.resize_surface() failed")?;
        self.pixels
            .resize_buffer(size.width, size.height)
            .context("pixels.resize_buffer() failed")?;
        self.viewer.resize(size.width as usize, size.height as usize);
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        if self.viewer.render()? {
            self.viewer.canvas().copy_to_rgba(self.pixels.frame_mut());
        }
        self.pixels.render().context("pixels.render() failed")
    }
}

impl DisplayBackend for PixelsDisplay {
    fn name(&self) -> &'static str {
        "pixels"
    }

    fn run(self: Box<Self>, viewer: Viewer) -> Result<()> {
        let event_loop = EventLoop::new();
        let window = create_window(&event_loop, &viewer)?;
        let mut window_state = WindowState::new(&window, viewer)?;
        info!(size = ?window.inner_size(), "pixels window opened");

        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Wait;

            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        info!("pixels window closed");
                        *control_flow = ControlFlow::Exit;
                    }
                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                virtual_keycode: Some(key_code),
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    } => {
                        if let Some(code) = get_special_key_code(key_code) {
                            window_state.handle_key(&window, code, control_flow);
                        }
                    }
                    WindowEvent::Resized(size) => match window_state.resize(size) {
                        Ok(()) => window.request_redraw(),
                        Err(err) => {
                            report_error(&err);
                            *control_flow = ControlFlow::Exit;
                        }
                    },
                    _ => {}
                },
                Event::RedrawRequested(_) => {
                    if let Err(err) = window_state.redraw() {
                        report_error(&err);
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        })
    }
}
