use {
    crate::*,
    base::{Rect, Vec2},
};

/// Largest square centered in `size`; odd excess goes to the right/bottom.
pub fn center_square(size: Vec2<usize>) -> Rect<usize> {
    let side = size.min_component();
    let square = Vec2::new(side, side);
    Rect::new((size - square) / 2, square)
}

/// Copy the pixels inside `rect` into a new image, no resampling.
pub fn crop(image: &Image, rect: Rect<usize>) -> Result<Image, ImageError> {
    let bpp = image.format.bytes_per_pixel().ok_or_else(|| {
        ImageError::Geometry(format!("cannot crop compressed {:?} image", image.format))
    })?;
    if !rect.fits_in(image.size) {
        return Err(ImageError::Geometry(format!(
            "crop {}+{},{} outside {}",
            rect.size, rect.origin.x, rect.origin.y, image.size
        )));
    }
    if image.data.len() < image.size.area() * bpp {
        return Err(ImageError::Geometry(format!(
            "buffer of {} bytes too short for {} {:?}",
            image.data.len(),
            image.size,
            image.format
        )));
    }

    let src_stride = image.size.x * bpp;
    let row_len = rect.size.x * bpp;
    let mut data = Vec::with_capacity(rect.size.y * row_len);
    for row in rect.origin.y..rect.origin.y + rect.size.y {
        let start = row * src_stride + rect.origin.x * bpp;
        data.extend_from_slice(&image.data[start..start + row_len]);
    }
    Ok(Image::new(rect.size, data, image.format))
}
