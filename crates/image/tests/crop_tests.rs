use base::{Rect, Vec2};
use image::{Image, PixelFormat, center_square, crop};

// every pixel encodes its own coordinates
fn coordinate_image(width: usize, height: usize) -> Image {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[x as u8, y as u8, ((x + y) % 256) as u8]);
        }
    }
    Image::new(Vec2::new(width, height), data, PixelFormat::Rgb8)
}

#[test]
fn test_center_square_landscape() {
    let rect = center_square(Vec2::new(1280, 720));
    assert_eq!(rect, Rect::new(Vec2::new(280, 0), Vec2::new(720, 720)));
}

#[test]
fn test_center_square_portrait() {
    let rect = center_square(Vec2::new(480, 640));
    assert_eq!(rect, Rect::new(Vec2::new(0, 80), Vec2::new(480, 480)));
}

#[test]
fn test_center_square_odd_excess() {
    let rect = center_square(Vec2::new(7, 4));
    assert_eq!(rect.origin, Vec2::new(1, 0));
    assert_eq!(rect.size, Vec2::new(4, 4));
}

#[test]
fn test_center_square_already_square() {
    let rect = center_square(Vec2::new(720, 720));
    assert_eq!(rect.origin, Vec2::new(0, 0));
}

#[test]
fn test_crop_is_pixel_exact() {
    let image = coordinate_image(12, 6);
    let rect = center_square(image.size);
    let cropped = crop(&image, rect).unwrap();

    assert_eq!(cropped.size, Vec2::new(6, 6));
    assert_eq!(cropped.data.len(), 6 * 6 * 3);
    for y in 0..6 {
        for x in 0..6 {
            assert_eq!(cropped.pixel(x, y), image.pixel(x + 3, y));
        }
    }
}

#[test]
fn test_crop_rgba() {
    let data: Vec<u8> = (0..4 * 2 * 4).map(|v| v as u8).collect();
    let image = Image::new(Vec2::new(4, 2), data, PixelFormat::Rgba8);
    let cropped = crop(&image, center_square(image.size)).unwrap();
    assert_eq!(cropped.size, Vec2::new(2, 2));
    assert_eq!(cropped.pixel(0, 0), Some(&[4u8, 5, 6, 7][..]));
    assert_eq!(cropped.pixel(1, 1), Some(&[24u8, 25, 26, 27][..]));
}

#[test]
fn test_crop_rejects_out_of_bounds() {
    let image = coordinate_image(4, 4);
    let rect = Rect::new(Vec2::new(2, 2), Vec2::new(4, 4));
    assert!(crop(&image, rect).is_err());
}

#[test]
fn test_crop_rejects_jpeg() {
    let image = Image::new(Vec2::new(4, 4), vec![0xFF, 0xD8], PixelFormat::Jpeg);
    assert!(crop(&image, center_square(image.size)).is_err());
}

#[test]
fn test_crop_rejects_short_buffer() {
    let image = Image::new(Vec2::new(4, 4), vec![0; 10], PixelFormat::Rgb8);
    assert!(crop(&image, center_square(image.size)).is_err());
}
