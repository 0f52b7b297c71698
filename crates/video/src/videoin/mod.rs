use {
    crate::*,
    image::PixelFormat,
    std::{
        io,
        path::{Path, PathBuf},
        sync::{
            Arc, Mutex,
            atomic::{AtomicBool, Ordering},
        },
        thread::{self, JoinHandle},
        time::Duration,
    },
    tokio::sync::oneshot,
};

#[cfg(feature = "v4l2")]
pub mod v4l2;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitStatus {
    Ready,
    TimedOut,
}

/// A camera that can be negotiated once and then streamed from.
///
/// Implementations are moved onto the capture worker thread and used only
/// from there.
pub trait CaptureDevice: Send {
    /// Formats the device offers, in enumeration order.
    fn formats(&self) -> Result<Vec<FormatInfo>, VideoError>;

    /// Commit a format, returning what the device actually accepted.
    fn configure(&mut self, format: &DeviceFormat) -> Result<DeviceFormat, VideoError>;

    /// Start capturing. Returns the number of buffers the device granted,
    /// which may be fewer than requested.
    fn start_streaming(&mut self) -> Result<u32, VideoError>;

    /// Block until a frame is ready or `timeout` expires.
    fn wait_for_frame(&mut self, timeout: Duration) -> Result<WaitStatus, VideoError>;

    /// Read the frame announced by the last `Ready`.
    fn read_frame(&mut self) -> Result<Vec<u8>, VideoError>;

    fn stop_streaming(&mut self);

    fn close(&mut self);

    /// Select the first format matching `preferred` and its first frame size,
    /// then commit it together with buffer count and frame rate.
    fn negotiate(
        &mut self,
        preferred: PixelFormat,
        buffer_count: u32,
        frame_rate: u32,
    ) -> Result<DeviceFormat, VideoError> {
        let formats = self.formats()?;
        let (info, size) = select_format(&formats, preferred)?;
        log::info!("camera format: {} ({})", info.description, preferred);
        log::info!("camera frame: {}", size);
        let format = self.configure(&DeviceFormat {
            format: preferred,
            size,
            buffer_count,
            frame_rate,
        })?;
        log::info!("buffer count: {}", format.buffer_count);
        log::info!("framerate fps: {}", format.frame_rate);
        Ok(format)
    }
}

/// Queue buffers `1..requested` ahead of streaming and return how many the
/// device actually holds. Buffer 0 stays out for the first read to queue.
/// Drivers grant their own buffer count, so the first index rejected as
/// invalid marks the end.
pub fn queue_spare_buffers(
    requested: u32,
    mut queue: impl FnMut(usize) -> io::Result<()>,
) -> Result<u32, VideoError> {
    for index in 1..requested as usize {
        match queue(index) {
            Ok(()) => {}
            Err(error) if error.kind() == io::ErrorKind::InvalidInput => {
                return Ok(index as u32);
            }
            Err(error) => {
                return Err(VideoError::DeviceBusy(format!(
                    "cannot queue buffer {index}: {error}"
                )));
            }
        }
    }
    Ok(requested.max(1))
}

/// Capture settings.
#[derive(Clone, Debug)]
pub struct VideoInConfig {
    path: PathBuf,
    format: PixelFormat,
    buffer_count: u32,
    frame_rate: u32,
    wait_timeout: Duration,
}

impl Default for VideoInConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("/dev/video0"),
            format: PixelFormat::Jpeg,
            buffer_count: 30,
            frame_rate: 30,
            wait_timeout: Duration::from_millis(5),
        }
    }
}

impl VideoInConfig {
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_buffer_count(mut self, buffer_count: u32) -> Self {
        self.buffer_count = buffer_count;
        self
    }

    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn with_wait_timeout(mut self, wait_timeout: Duration) -> Self {
        self.wait_timeout = wait_timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn buffer_count(&self) -> u32 {
        self.buffer_count
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    pub fn wait_timeout(&self) -> Duration {
        self.wait_timeout
    }
}

/// Owns the capture worker thread and the read side of its frame buffer.
///
/// Dropping (or `close`) stops the worker, which stops streaming and closes
/// the device before the thread is joined.
pub struct VideoIn {
    format: DeviceFormat,
    frames: FrameBuffer,
    cancel: Arc<AtomicBool>,
    failure: Arc<Mutex<Option<VideoError>>>,
    join_handle: Option<JoinHandle<()>>,
}

impl VideoIn {
    /// Open the V4L2 device named by `config`.
    #[cfg(feature = "v4l2")]
    pub fn open_v4l2(config: VideoInConfig) -> Result<Self, VideoError> {
        Self::open(config, |config| V4l2::open(config.path()))
    }

    /// Create the device with `create` on the worker thread, negotiate and
    /// start streaming there, and return once that has succeeded or failed.
    pub fn open<D, F>(config: VideoInConfig, create: F) -> Result<Self, VideoError>
    where
        D: CaptureDevice + 'static,
        F: FnOnce(&VideoInConfig) -> Result<D, VideoError> + Send + 'static,
    {
        let (publisher, frames) = frame_buffer();
        let cancel = Arc::new(AtomicBool::new(false));
        let failure = Arc::new(Mutex::new(None));

        // the device is opened on the thread that will read from it
        let (init_tx, init_rx) = oneshot::channel::<Result<DeviceFormat, VideoError>>();

        let join_handle = thread::Builder::new()
            .name("capture".to_string())
            .spawn({
                let cancel = Arc::clone(&cancel);
                let failure = Arc::clone(&failure);
                move || {
                    let (mut device, format) = match Self::start_device(&config, create) {
                        Ok((device, format)) => {
                            let _ = init_tx.send(Ok(format));
                            (device, format)
                        }
                        Err(error) => {
                            let _ = init_tx.send(Err(error));
                            return;
                        }
                    };
                    if let Err(error) =
                        Self::capture_loop(&mut device, &format, &config, &publisher, &cancel)
                    {
                        log::error!("video worker: capture failed: {}", error);
                        failure
                            .lock()
                            .unwrap_or_else(|e| e.into_inner())
                            .replace(error);
                    }
                    device.stop_streaming();
                    device.close();
                    log::info!("video worker: device closed");
                }
            })
            .map_err(|e| VideoError::DeviceUnavailable(format!("cannot spawn worker: {e}")))?;

        let format = init_rx.blocking_recv().map_err(|_| {
            VideoError::DeviceUnavailable("worker thread died during init".to_string())
        })??;

        Ok(Self {
            format,
            frames,
            cancel,
            failure,
            join_handle: Some(join_handle),
        })
    }

    fn start_device<D, F>(config: &VideoInConfig, create: F) -> Result<(D, DeviceFormat), VideoError>
    where
        D: CaptureDevice,
        F: FnOnce(&VideoInConfig) -> Result<D, VideoError>,
    {
        let mut device = create(config)?;
        let started = device
            .negotiate(config.format(), config.buffer_count(), config.frame_rate())
            .and_then(|format| {
                let granted = device.start_streaming()?;
                if granted != format.buffer_count {
                    log::info!(
                        "buffer count: {} granted of {} requested",
                        granted,
                        format.buffer_count
                    );
                }
                Ok(DeviceFormat {
                    buffer_count: granted,
                    ..format
                })
            });
        match started {
            Ok(format) => Ok((device, format)),
            Err(error) => {
                device.close();
                Err(error)
            }
        }
    }

    fn capture_loop<D: CaptureDevice>(
        device: &mut D,
        format: &DeviceFormat,
        config: &VideoInConfig,
        publisher: &FramePublisher,
        cancel: &AtomicBool,
    ) -> Result<(), VideoError> {
        log::info!("video worker: starting capture loop");
        let mut seq = 0u64;
        let size = format.size;
        while !cancel.load(Ordering::Relaxed) {
            match device.wait_for_frame(config.wait_timeout()) {
                Ok(WaitStatus::Ready) => {}
                Ok(WaitStatus::TimedOut) => {
                    log::debug!("video worker: frame wait timed out");
                    continue;
                }
                Err(error) if error.is_transient() => {
                    log::debug!("video worker: {}", error);
                    continue;
                }
                Err(error) => return Err(error),
            }
            let data = device.read_frame()?;
            seq += 1;
            publisher.publish(RawFrame { seq, size, data });
        }
        Ok(())
    }

    pub fn format(&self) -> &DeviceFormat {
        &self.format
    }

    /// Another reader of the worker's frame slot.
    pub fn frames(&self) -> FrameBuffer {
        self.frames.clone()
    }

    pub fn latest(&self) -> Option<Arc<RawFrame>> {
        self.frames.latest()
    }

    /// The error that stopped the worker, if any. Reported once.
    pub fn take_error(&self) -> Option<VideoError> {
        self.failure
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
    }

    /// Stop the worker and wait for it to release the device. Idempotent.
    pub fn close(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        if let Some(handle) = self.join_handle.take() {
            if handle.join().is_err() {
                log::error!("video worker panicked");
            }
        }
    }
}

impl Drop for VideoIn {
    fn drop(&mut self) {
        self.close();
    }
}

impl FrameSource for VideoIn {
    fn latest(&self) -> Option<Arc<RawFrame>> {
        VideoIn::latest(self)
    }

    fn take_error(&self) -> Option<VideoError> {
        VideoIn::take_error(self)
    }
}
