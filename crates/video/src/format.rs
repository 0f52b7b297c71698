use {
    crate::*,
    base::Vec2,
    image::{PixelFormat, fourcc_to_string},
};

/// Pick the first enumerated format matching `preferred` and the first frame
/// size reported for it.
pub fn select_format(
    formats: &[FormatInfo],
    preferred: PixelFormat,
) -> Result<(FormatInfo, Vec2<usize>), VideoError> {
    let info = formats
        .iter()
        .find(|info| info.fourcc == preferred.as_fourcc())
        .ok_or_else(|| {
            let offered: Vec<String> = formats
                .iter()
                .map(|info| fourcc_to_string(info.fourcc))
                .collect();
            VideoError::UnsupportedFormat(format!(
                "{} not offered (device has [{}])",
                preferred,
                offered.join(", ")
            ))
        })?;
    let size = info.sizes.first().copied().ok_or_else(|| {
        VideoError::UnsupportedFormat(format!("{} reports no frame sizes", preferred))
    })?;
    Ok((info.clone(), size))
}
