use {
    minifb::Key,
    std::path::{Path, PathBuf},
    video::VideoInConfig,
};

/// Application settings. Everything has a default; nothing is read from
/// files or the environment.
#[derive(Clone, Debug)]
pub struct Config {
    video: VideoInConfig,
    app_name: String,
    window_size: usize,
    mask_key: Key,
    overlay_opacity: u8,
    jpeg_quality: u8,
    text_scale: usize,
    picture_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            video: VideoInConfig::default(),
            app_name: "takepic".to_string(),
            window_size: 720,
            mask_key: Key::Space,
            overlay_opacity: 160,
            jpeg_quality: 100,
            text_scale: 3,
            picture_root: None,
        }
    }
}

impl Config {
    pub fn with_video(mut self, video: VideoInConfig) -> Self {
        self.video = video;
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_mask_key(mut self, mask_key: Key) -> Self {
        self.mask_key = mask_key;
        self
    }

    pub fn with_overlay_opacity(mut self, overlay_opacity: u8) -> Self {
        self.overlay_opacity = overlay_opacity;
        self
    }

    pub fn with_jpeg_quality(mut self, jpeg_quality: u8) -> Self {
        self.jpeg_quality = jpeg_quality;
        self
    }

    pub fn with_text_scale(mut self, text_scale: usize) -> Self {
        self.text_scale = text_scale;
        self
    }

    /// Save pictures directly into `root` instead of `<home>/Pictures/<app>`.
    pub fn with_picture_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.picture_root = Some(root.into());
        self
    }

    pub fn video(&self) -> &VideoInConfig {
        &self.video
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn mask_key(&self) -> Key {
        self.mask_key
    }

    pub fn overlay_opacity(&self) -> u8 {
        self.overlay_opacity
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }

    pub fn text_scale(&self) -> usize {
        self.text_scale
    }

    pub fn picture_root(&self) -> Option<&Path> {
        self.picture_root.as_deref()
    }
}
