use crate::*;

/// Multiply every alpha value of an RGBA image by `opacity / 255`.
pub fn scale_alpha(image: &mut Image, opacity: u8) -> Result<(), ImageError> {
    image.format.ensure_format(PixelFormat::Rgba8)?;
    for pixel in image.data.chunks_exact_mut(4) {
        pixel[3] = ((pixel[3] as u16 * opacity as u16 + 127) / 255) as u8;
    }
    Ok(())
}

fn mix(src: u8, dst: u8, alpha: u8) -> u8 {
    let alpha = alpha as u16;
    ((src as u16 * alpha + dst as u16 * (255 - alpha) + 127) / 255) as u8
}

/// Alpha-blend an RGBA overlay on top of a display buffer of the same size.
pub fn blend_rgba(buf: &mut [u32], overlay: &Image) -> Result<(), ImageError> {
    overlay.format.ensure_format(PixelFormat::Rgba8)?;
    if buf.len() != overlay.size.area() || overlay.data.len() != buf.len() * 4 {
        return Err(ImageError::Geometry(format!(
            "overlay {} does not match {} pixel buffer",
            overlay.size,
            buf.len()
        )));
    }
    for (dst, src) in buf.iter_mut().zip(overlay.data.chunks_exact(4)) {
        match src[3] {
            0 => {}
            255 => *dst = pack_u32(src[0], src[1], src[2]),
            alpha => {
                let (r, g, b) = unpack_u32(*dst);
                *dst = pack_u32(
                    mix(src[0], r, alpha),
                    mix(src[1], g, alpha),
                    mix(src[2], b, alpha),
                );
            }
        }
    }
    Ok(())
}
