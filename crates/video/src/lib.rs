//! Video capture for takepic.
//!
//! A `CaptureDevice` is driven by a dedicated worker thread owned by
//! `VideoIn`. The worker publishes every frame it reads into a single-slot
//! `FrameBuffer`; the consumer always sees the most recent complete frame and
//! never waits for one.

pub mod error;
pub use error::*;

pub mod format;
pub use format::*;

pub mod framebuffer;
pub use framebuffer::*;

pub mod videoframe;
pub use videoframe::*;

pub mod videoin;
pub use videoin::*;
