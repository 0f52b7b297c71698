use {
    crate::{Config, InputEvent},
    base::Vec2,
    minifb::{Key, KeyRepeat, ScaleMode, Window, WindowOptions},
    std::fmt,
};

#[derive(Debug)]
pub struct DisplayError(pub String);

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for DisplayError {}

impl From<minifb::Error> for DisplayError {
    fn from(err: minifb::Error) -> Self {
        DisplayError(err.to_string())
    }
}

/// The surface the render loop draws into.
pub trait Display {
    /// Input gathered since the previous call, in order.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Show a 0RGB buffer of `size` pixels.
    fn present(&mut self, buf: &[u32], size: Vec2<usize>) -> Result<(), DisplayError>;
}

/// Fixed-size minifb window. Escape or closing the window quits.
pub struct MinifbDisplay {
    window: Window,
    mask_key: Key,
    presented: bool,
}

impl MinifbDisplay {
    pub fn open(config: &Config) -> Result<Self, DisplayError> {
        let mut window = Window::new(
            config.app_name(),
            config.window_size(),
            config.window_size(),
            WindowOptions {
                scale_mode: ScaleMode::AspectRatioStretch,
                ..WindowOptions::default()
            },
        )?;
        window.set_target_fps(config.video().frame_rate() as usize);
        Ok(Self {
            window,
            mask_key: config.mask_key(),
            presented: false,
        })
    }
}

impl Display for MinifbDisplay {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        // key state only advances on update, so pump it on ticks with no frame
        if !std::mem::take(&mut self.presented) {
            self.window.update();
        }

        let mut events = Vec::new();
        if self
            .window
            .get_keys_pressed(KeyRepeat::No)
            .contains(&self.mask_key)
        {
            events.push(InputEvent::MaskKeyDown);
        }
        if self.window.get_keys_released().contains(&self.mask_key) {
            events.push(InputEvent::MaskKeyUp);
        }
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            events.push(InputEvent::Quit);
        }
        events
    }

    fn present(&mut self, buf: &[u32], size: Vec2<usize>) -> Result<(), DisplayError> {
        self.window.update_with_buffer(buf, size.x, size.y)?;
        self.presented = true;
        Ok(())
    }
}
