// minifb wants 0RGB in a u32
pub(crate) fn pack_u32(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

pub(crate) fn unpack_u32(pixel: u32) -> (u8, u8, u8) {
    ((pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8)
}

pub fn rgb_to_u32(data: &[u8]) -> Vec<u32> {
    data.chunks_exact(3)
        .map(|chunk| pack_u32(chunk[0], chunk[1], chunk[2]))
        .collect()
}
