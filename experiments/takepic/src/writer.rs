use {
    crate::SaveError,
    base::log_info,
    chrono::{Local, NaiveDate},
    image::{Image, PixelFormat, rgb_to_jpeg},
    std::{fs, path::PathBuf},
};

/// `<home>/Pictures/<app_name>`
pub fn picture_dir(app_name: &str) -> Result<PathBuf, SaveError> {
    dirs::home_dir()
        .map(|home| home.join("Pictures").join(app_name))
        .ok_or(SaveError::NoHome)
}

/// Writes one JPEG per calendar day; a second save on the same day replaces
/// the first.
#[derive(Debug, Clone)]
pub struct CaptureWriter {
    root: PathBuf,
    quality: u8,
}

impl CaptureWriter {
    pub fn new(root: impl Into<PathBuf>, quality: u8) -> Self {
        Self {
            root: root.into(),
            quality,
        }
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.root.join(format!("{}.jpg", date.format("%Y-%m-%d")))
    }

    /// Save under today's local date.
    pub fn save(&self, image: &Image) -> Result<PathBuf, SaveError> {
        self.save_at(image, Local::now().date_naive())
    }

    pub fn save_at(&self, image: &Image, date: NaiveDate) -> Result<PathBuf, SaveError> {
        image.format.ensure_format(PixelFormat::Rgb8)?;
        let jpeg = rgb_to_jpeg(image.size, &image.data, self.quality)?;
        fs::create_dir_all(&self.root)?;
        let path = self.path_for(date);
        fs::write(&path, jpeg)?;
        log_info!("saved {} ({})", path.display(), image.size);
        Ok(path)
    }
}
