//! Pixel buffers and conversions for the takepic workspace.
//!
//! An `Image` is a sized byte buffer tagged with a `PixelFormat`. Decoding
//! and encoding go through the `image` crate (imported as `crates_image`);
//! cropping, blending and text drawing are done here on raw buffers.

mod blend;
pub use blend::*;

mod crop;
pub use crop::*;

mod draw;
pub use draw::*;

mod error;
pub use error::*;

mod image;
pub use self::image::*;

mod jpeg;
pub use jpeg::*;

mod pack;
pub use pack::*;

mod pixelformat;
pub use pixelformat::*;
