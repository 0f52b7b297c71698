use {
    crate::*,
    base::Vec2,
    crates_image::{ImageEncoder, ImageFormat, imageops::FilterType},
};

/// Decode a JPEG payload into packed RGB. The size comes from the JPEG
/// header, not from the caller.
pub fn jpeg_to_rgb(data: &[u8]) -> Result<Image, ImageError> {
    let decoded = crates_image::load_from_memory_with_format(data, ImageFormat::Jpeg)?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(Image::new(
        Vec2::new(width as usize, height as usize),
        rgb.into_raw(),
        PixelFormat::Rgb8,
    ))
}

/// Decode any supported container (PNG, JPEG) into packed RGBA.
pub fn decode_rgba(data: &[u8]) -> Result<Image, ImageError> {
    let rgba = crates_image::load_from_memory(data)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Image::new(
        Vec2::new(width as usize, height as usize),
        rgba.into_raw(),
        PixelFormat::Rgba8,
    ))
}

/// Encode packed RGB as baseline JPEG. `quality` is 1..=100.
pub fn rgb_to_jpeg(size: Vec2<usize>, data: &[u8], quality: u8) -> Result<Vec<u8>, ImageError> {
    if data.len() != size.area() * 3 {
        return Err(ImageError::Encode(format!(
            "expected {} bytes for {} RGB, got {}",
            size.area() * 3,
            size,
            data.len()
        )));
    }
    let mut buffer = Vec::new();
    let encoder = crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(
            data,
            size.x as u32,
            size.y as u32,
            crates_image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Resample an RGBA image to `size` (bilinear).
pub fn resize_rgba(image: &Image, size: Vec2<usize>) -> Result<Image, ImageError> {
    image.format.ensure_format(PixelFormat::Rgba8)?;
    if image.size == size {
        return Ok(image.clone());
    }
    let buffer = crates_image::RgbaImage::from_raw(
        image.size.x as u32,
        image.size.y as u32,
        image.data.clone(),
    )
    .ok_or_else(|| ImageError::Geometry(format!("RGBA buffer too short for {}", image.size)))?;
    let resized = crates_image::imageops::resize(
        &buffer,
        size.x as u32,
        size.y as u32,
        FilterType::Triangle,
    );
    Ok(Image::new(size, resized.into_raw(), PixelFormat::Rgba8))
}
