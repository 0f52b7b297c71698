use {
    crate::{
        Action, AppError, CaptureWriter, Config, Display, FrameProcessor, MaskState, Overlay,
        ProcessedImage, overlay::MASK_PNG, writer::picture_dir,
    },
    base::{Vec2, log_debug, log_info, log_warn},
    chrono::Local,
    image::{PixelFormat, blend_rgba, draw_text_outlined, rgb_to_u32},
    std::fmt,
    video::{FrameSource, VideoIn},
};

const TEXT_FILL: u32 = 0x00FF_FFFF;
const TEXT_OUTLINE: u32 = 0x0000_0000;
const TEXT_MARGIN: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

fn local_clock() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Main-thread loop: pull the latest frame, handle input, save on trigger,
/// composite and present.
pub struct RenderLoop<D: Display, S: FrameSource> {
    display: D,
    source: S,
    processor: FrameProcessor,
    state: MaskState,
    overlay: Overlay,
    // set once a size mismatch has been reported
    overlay_mismatch: bool,
    writer: CaptureWriter,
    canvas: Vec<u32>,
    text_scale: usize,
    clock: fn() -> String,
}

impl<D: Display, S: FrameSource> fmt::Debug for RenderLoop<D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderLoop")
            .field("state", &self.state)
            .field("writer", &self.writer)
            .field("current", &self.processor.current().map(|p| p.seq))
            .finish()
    }
}

impl<D: Display> RenderLoop<D, VideoIn> {
    /// Build the loop around an opened camera: the mask is sized to the
    /// camera's square crop and pictures go to the configured directory.
    pub fn from_video(config: &Config, videoin: VideoIn, display: D) -> Result<Self, AppError> {
        let side = videoin.format().size.min_component();
        log_info!(
            "camera {} {} -> {}x{} preview",
            videoin.format().format,
            videoin.format().size,
            side,
            side
        );
        let overlay = Overlay::load(MASK_PNG, config.overlay_opacity(), Vec2::new(side, side))?;
        let root = match config.picture_root() {
            Some(root) => root.to_path_buf(),
            None => picture_dir(config.app_name())?,
        };
        let writer = CaptureWriter::new(root, config.jpeg_quality());
        Ok(Self::new(display, videoin, overlay, writer, config.text_scale()))
    }
}

impl<D: Display, S: FrameSource> RenderLoop<D, S> {
    pub fn new(
        display: D,
        source: S,
        overlay: Overlay,
        writer: CaptureWriter,
        text_scale: usize,
    ) -> Self {
        Self {
            display,
            source,
            processor: FrameProcessor::new(),
            state: MaskState::Idle,
            overlay,
            overlay_mismatch: false,
            writer,
            canvas: Vec::new(),
            text_scale,
            clock: local_clock,
        }
    }

    /// Replace the timestamp source.
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> MaskState {
        self.state
    }

    /// Run ticks until a quit event. The caller drops the loop (and with it
    /// the frame source) afterwards.
    pub fn run(&mut self) -> Result<(), AppError> {
        while self.tick()? == Flow::Continue {}
        Ok(())
    }

    /// One display refresh.
    pub fn tick(&mut self) -> Result<Flow, AppError> {
        if let Some(error) = self.source.take_error() {
            return Err(error.into());
        }

        let latest = self.source.latest();
        self.processor.update(latest.as_deref());

        for event in self.display.poll_events() {
            match self.state.handle(event) {
                Some(Action::Quit) => return Ok(Flow::Quit),
                Some(Action::Capture) => self.capture()?,
                None => {}
            }
        }

        let Some(processed) = self.processor.current() else {
            log_debug!("no frame yet");
            return Ok(Flow::Continue);
        };
        let mut overlay = self.state.mask_shown().then_some(&self.overlay);
        if let Some(mask) = overlay {
            if mask.size() != processed.image.size {
                if !self.overlay_mismatch {
                    log_warn!(
                        "mask is {} but frame is {}, not drawn",
                        mask.size(),
                        processed.image.size
                    );
                    self.overlay_mismatch = true;
                }
                overlay = None;
            }
        }
        let text = (self.clock)();
        compose(&mut self.canvas, processed, overlay, &text, self.text_scale)?;
        self.display.present(&self.canvas, processed.image.size)?;
        Ok(Flow::Continue)
    }

    fn capture(&mut self) -> Result<(), AppError> {
        match self.processor.current() {
            Some(processed) => {
                let path = self.writer.save(&processed.image)?;
                log_info!("captured frame {} to {}", processed.seq, path.display());
            }
            None => log_warn!("capture requested before the first frame"),
        }
        Ok(())
    }
}

fn compose(
    canvas: &mut Vec<u32>,
    processed: &ProcessedImage,
    overlay: Option<&Overlay>,
    text: &str,
    text_scale: usize,
) -> Result<(), AppError> {
    let image = &processed.image;
    image.format.ensure_format(PixelFormat::Rgb8)?;
    *canvas = rgb_to_u32(&image.data);

    if let Some(overlay) = overlay {
        blend_rgba(canvas, overlay.image())?;
    }

    draw_text_outlined(
        canvas,
        image.size,
        TEXT_MARGIN,
        TEXT_MARGIN,
        text,
        TEXT_FILL,
        TEXT_OUTLINE,
        text_scale,
    );
    Ok(())
}
