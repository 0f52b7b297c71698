use {base::Vec2, image::PixelFormat};

/// One encoded frame as read from the device.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFrame {
    /// Starts at 1 and increases by one per frame read.
    pub seq: u64,
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
}

/// The capture mode committed to the device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceFormat {
    pub format: PixelFormat,
    pub size: Vec2<usize>,
    pub buffer_count: u32,
    pub frame_rate: u32,
}

/// A pixel format as enumerated by the device, with the frame sizes it
/// reports for it (largest extent of each entry), in device order.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatInfo {
    pub fourcc: u32,
    pub description: String,
    pub sizes: Vec<Vec2<usize>>,
}
