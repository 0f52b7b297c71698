use base::Vec2;

const GLYPH_WIDTH: usize = 5;
const GLYPH_HEIGHT: usize = 7;

// advance includes one column of spacing
const GLYPH_ADVANCE: usize = GLYPH_WIDTH + 1;

// 5x7 bitmaps, one byte per row, bit 4 is the leftmost column
fn glyph(c: char) -> Option<[u8; GLYPH_HEIGHT]> {
    let rows = match c {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        '/' => [0x01, 0x01, 0x02, 0x04, 0x08, 0x10, 0x10],
        _ => return None,
    };
    Some(rows)
}

/// Draw `text` with its top-left corner at `(x, y)`. Characters without a
/// glyph advance as blanks. Pixels outside the buffer are clipped.
pub fn draw_text(
    buf: &mut [u32],
    size: Vec2<usize>,
    x: i32,
    y: i32,
    text: &str,
    color: u32,
    scale: usize,
) {
    let scale = scale.max(1);
    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        let gx = x + (i * GLYPH_ADVANCE * scale) as i32;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                fill_block(
                    buf,
                    size,
                    gx + (col * scale) as i32,
                    y + (row * scale) as i32,
                    scale,
                    color,
                );
            }
        }
    }
}

/// Draw `text` twice: first in `outline` shifted to the 8 neighbours, then
/// in `fill` on top, so it stays legible on any background.
pub fn draw_text_outlined(
    buf: &mut [u32],
    size: Vec2<usize>,
    x: i32,
    y: i32,
    text: &str,
    fill: u32,
    outline: u32,
    scale: usize,
) {
    let d = scale.max(1) as i32;
    for dy in [-d, 0, d] {
        for dx in [-d, 0, d] {
            if dx != 0 || dy != 0 {
                draw_text(buf, size, x + dx, y + dy, text, outline, scale);
            }
        }
    }
    draw_text(buf, size, x, y, text, fill, scale);
}

fn fill_block(buf: &mut [u32], size: Vec2<usize>, x: i32, y: i32, side: usize, color: u32) {
    for py in y..y + side as i32 {
        if py < 0 || py >= size.y as i32 {
            continue;
        }
        for px in x..x + side as i32 {
            if px < 0 || px >= size.x as i32 {
                continue;
            }
            buf[py as usize * size.x + px as usize] = color;
        }
    }
}
