use {crate::PixelFormat, base::Vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// Returns the pixel at (x, y) for packed formats.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        let bpp = self.format.bytes_per_pixel()?;
        if x >= self.size.x || y >= self.size.y {
            return None;
        }
        let offset = (y * self.size.x + x) * bpp;
        self.data.get(offset..offset + bpp)
    }
}
