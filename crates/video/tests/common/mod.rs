#![allow(dead_code)]

use {
    base::Vec2,
    std::{
        collections::VecDeque,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    },
    video::*,
};

pub enum Step {
    Frame(Vec<u8>),
    Timeout,
    Fail,
}

/// Scripted device; once the script runs out it keeps timing out.
pub struct FakeDevice {
    pub formats: Vec<FormatInfo>,
    pub steps: VecDeque<Step>,
    pub pending: Option<Vec<u8>>,
    pub closed: Arc<AtomicUsize>,
    pub streaming: bool,
    pub buffer_count: u32,
    /// Buffers handed out at stream start; defaults to whatever was asked for.
    pub granted: Option<u32>,
}

impl FakeDevice {
    pub fn new(formats: Vec<FormatInfo>, steps: Vec<Step>) -> Self {
        Self {
            formats,
            steps: steps.into(),
            pending: None,
            closed: Arc::new(AtomicUsize::new(0)),
            streaming: false,
            buffer_count: 0,
            granted: None,
        }
    }

    pub fn close_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.closed)
    }
}

pub fn format_info(tag: &[u8; 4], sizes: &[(usize, usize)]) -> FormatInfo {
    FormatInfo {
        fourcc: u32::from_le_bytes(*tag),
        description: String::from_utf8_lossy(tag).into_owned(),
        sizes: sizes.iter().map(|&(w, h)| Vec2::new(w, h)).collect(),
    }
}

pub fn webcam_formats() -> Vec<FormatInfo> {
    vec![
        format_info(b"YUYV", &[(640, 480), (1280, 720)]),
        format_info(b"MJPG", &[(1280, 720), (640, 480)]),
    ]
}

impl CaptureDevice for FakeDevice {
    fn formats(&self) -> Result<Vec<FormatInfo>, VideoError> {
        Ok(self.formats.clone())
    }

    fn configure(&mut self, format: &DeviceFormat) -> Result<DeviceFormat, VideoError> {
        self.buffer_count = format.buffer_count;
        Ok(*format)
    }

    fn start_streaming(&mut self) -> Result<u32, VideoError> {
        self.streaming = true;
        Ok(self.granted.unwrap_or(self.buffer_count))
    }

    fn wait_for_frame(&mut self, timeout: Duration) -> Result<WaitStatus, VideoError> {
        match self.steps.pop_front() {
            Some(Step::Frame(data)) => {
                self.pending = Some(data);
                Ok(WaitStatus::Ready)
            }
            Some(Step::Timeout) | None => {
                std::thread::sleep(timeout);
                Ok(WaitStatus::TimedOut)
            }
            Some(Step::Fail) => Err(VideoError::ReadFailure("unplugged".to_string())),
        }
    }

    fn read_frame(&mut self) -> Result<Vec<u8>, VideoError> {
        self.pending
            .take()
            .ok_or_else(|| VideoError::ReadFailure("no frame".to_string()))
    }

    fn stop_streaming(&mut self) {
        self.streaming = false;
    }

    fn close(&mut self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}
