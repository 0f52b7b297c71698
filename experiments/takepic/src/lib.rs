//! Webcam preview with a guide mask and a once-a-day snapshot.
//!
//! The capture worker (crate `video`) fills a single-slot frame buffer; the
//! render loop on the main thread decodes and crops the latest frame, draws
//! the mask while the mask key is held, and saves the picture when the key
//! is released.

pub mod config;
pub use config::Config;

pub mod display;
pub use display::{Display, DisplayError, MinifbDisplay};

pub mod error;
pub use error::{AppError, SaveError};

pub mod overlay;
pub use overlay::Overlay;

pub mod processor;
pub use processor::{FrameProcessor, ProcessedImage};

pub mod render;
pub use render::{Flow, RenderLoop};

pub mod state;
pub use state::{Action, InputEvent, MaskState};

pub mod writer;
pub use writer::CaptureWriter;

/// Open the camera and the window and run until the window is closed.
#[cfg(feature = "v4l2")]
pub fn run(config: Config) -> Result<(), AppError> {
    let videoin = video::VideoIn::open_v4l2(config.video().clone())?;
    let display = MinifbDisplay::open(&config)?;
    let mut render = RenderLoop::from_video(&config, videoin, display)?;
    render.run()?;
    base::log_info!("window closed");
    Ok(())
}
