use {
    crate::DisplayError,
    image::ImageError,
    std::{fmt, io},
    video::VideoError,
};

#[derive(Debug)]
pub enum SaveError {
    Encode(ImageError),
    Io(io::Error),
    NoHome,
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Encode(err) => write!(f, "cannot encode picture: {err}"),
            SaveError::Io(err) => write!(f, "cannot write picture: {err}"),
            SaveError::NoHome => write!(f, "home directory not found"),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<io::Error> for SaveError {
    fn from(err: io::Error) -> Self {
        SaveError::Io(err)
    }
}

impl From<ImageError> for SaveError {
    fn from(err: ImageError) -> Self {
        SaveError::Encode(err)
    }
}

#[derive(Debug)]
pub enum AppError {
    Video(VideoError),
    Image(ImageError),
    Save(SaveError),
    Display(DisplayError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Video(err) => write!(f, "camera: {err}"),
            AppError::Image(err) => write!(f, "image: {err}"),
            AppError::Save(err) => write!(f, "save: {err}"),
            AppError::Display(err) => write!(f, "display: {err}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<VideoError> for AppError {
    fn from(err: VideoError) -> Self {
        AppError::Video(err)
    }
}

impl From<ImageError> for AppError {
    fn from(err: ImageError) -> Self {
        AppError::Image(err)
    }
}

impl From<SaveError> for AppError {
    fn from(err: SaveError) -> Self {
        AppError::Save(err)
    }
}

impl From<DisplayError> for AppError {
    fn from(err: DisplayError) -> Self {
        AppError::Display(err)
    }
}
