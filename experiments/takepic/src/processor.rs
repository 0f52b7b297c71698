use {
    base::log_debug,
    image::{Image, ImageError, center_square, crop, jpeg_to_rgb},
    video::RawFrame,
};

/// A decoded frame cropped to its centered square, in packed RGB.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedImage {
    pub seq: u64,
    pub image: Image,
}

/// Decode a motion-JPEG frame and crop it to a centered square without
/// resampling.
pub fn decode(frame: &RawFrame) -> Result<ProcessedImage, ImageError> {
    let rgb = jpeg_to_rgb(&frame.data)?;
    let image = crop(&rgb, center_square(rgb.size))?;
    Ok(ProcessedImage {
        seq: frame.seq,
        image,
    })
}

/// Keeps the last successfully processed frame so that a frame that fails
/// to decode leaves the previous picture on screen.
#[derive(Debug, Default)]
pub struct FrameProcessor {
    current: Option<ProcessedImage>,
    last_seq: Option<u64>,
}

impl FrameProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process `frame` unless it was already seen, then return the image to
    /// show.
    pub fn update(&mut self, frame: Option<&RawFrame>) -> Option<&ProcessedImage> {
        if let Some(frame) = frame {
            if self.last_seq != Some(frame.seq) {
                self.last_seq = Some(frame.seq);
                match decode(frame) {
                    Ok(processed) => self.current = Some(processed),
                    Err(error) => log_debug!("dropping frame {}: {}", frame.seq, error),
                }
            }
        }
        self.current.as_ref()
    }

    pub fn current(&self) -> Option<&ProcessedImage> {
        self.current.as_ref()
    }
}
