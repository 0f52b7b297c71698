use {
    base::Vec2,
    image::{Image, ImageError, decode_rgba, resize_rgba, scale_alpha},
};

/// The guide mask shipped with the binary.
pub const MASK_PNG: &[u8] = include_bytes!("../assets/mask.png");

/// Translucent RGBA image drawn over the preview while the mask key is held.
/// Decoded, resized and faded once; never changes afterwards.
#[derive(Debug, Clone)]
pub struct Overlay {
    image: Image,
}

impl Overlay {
    pub fn load(bytes: &[u8], opacity: u8, size: Vec2<usize>) -> Result<Self, ImageError> {
        let decoded = decode_rgba(bytes)?;
        let mut image = resize_rgba(&decoded, size)?;
        scale_alpha(&mut image, opacity)?;
        Ok(Self { image })
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn size(&self) -> Vec2<usize> {
        self.image.size
    }
}
