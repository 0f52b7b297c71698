#![allow(dead_code)]

use {
    base::Vec2,
    image::{PixelFormat, rgb_to_jpeg},
    std::{
        cell::RefCell,
        collections::VecDeque,
        path::PathBuf,
        rc::Rc,
        time::Duration,
    },
    takepic::{Display, DisplayError, InputEvent},
    video::*,
};

/// A JPEG of `size` split into a left half of `left` and a right half of
/// `right`, so a centered crop can be told apart from an offset one.
pub fn two_tone_jpeg(size: Vec2<usize>, left: [u8; 3], right: [u8; 3]) -> Vec<u8> {
    let mut data = Vec::with_capacity(size.area() * 3);
    for _ in 0..size.y {
        for x in 0..size.x {
            data.extend_from_slice(if x < size.x / 2 { &left } else { &right });
        }
    }
    rgb_to_jpeg(size, &data, 90).unwrap()
}

pub fn gray_jpeg(size: Vec2<usize>, value: u8) -> Vec<u8> {
    two_tone_jpeg(size, [value; 3], [value; 3])
}

pub fn raw_frame(seq: u64, size: Vec2<usize>, data: Vec<u8>) -> RawFrame {
    RawFrame { seq, size, data }
}

/// Empty directory under the system temp dir, unique per test.
pub fn temp_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("takepic-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&root);
    root
}

pub fn fixed_clock() -> String {
    "2024-05-06 07:08:09".to_string()
}

#[derive(Default)]
pub struct Script {
    pub events: VecDeque<Vec<InputEvent>>,
    pub presented: Vec<(Vec<u32>, Vec2<usize>)>,
    pub polls: usize,
}

/// Display without a window. Each poll hands out the next scripted batch of
/// events; presented buffers are kept for inspection.
#[derive(Clone, Default)]
pub struct HeadlessDisplay {
    pub script: Rc<RefCell<Script>>,
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, events: Vec<InputEvent>) {
        self.script.borrow_mut().events.push_back(events);
    }

    pub fn presented(&self) -> usize {
        self.script.borrow().presented.len()
    }

    pub fn last_presented(&self) -> Option<(Vec<u32>, Vec2<usize>)> {
        self.script.borrow().presented.last().cloned()
    }
}

impl Display for HeadlessDisplay {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut script = self.script.borrow_mut();
        script.polls += 1;
        script.events.pop_front().unwrap_or_default()
    }

    fn present(&mut self, buf: &[u32], size: Vec2<usize>) -> Result<(), DisplayError> {
        assert_eq!(buf.len(), size.area());
        self.script.borrow_mut().presented.push((buf.to_vec(), size));
        Ok(())
    }
}

/// Camera that offers YUYV and MJPG at 1280x720 and delivers `frames`, then
/// keeps timing out.
pub struct FakeCamera {
    frames: VecDeque<Vec<u8>>,
    pending: Option<Vec<u8>>,
    buffer_count: u32,
}

impl FakeCamera {
    pub fn new(frames: Vec<Vec<u8>>) -> Self {
        Self {
            frames: frames.into(),
            pending: None,
            buffer_count: 0,
        }
    }
}

impl CaptureDevice for FakeCamera {
    fn formats(&self) -> Result<Vec<FormatInfo>, VideoError> {
        Ok(vec![
            FormatInfo {
                fourcc: PixelFormat::Yuyv.as_fourcc(),
                description: "YUYV 4:2:2".to_string(),
                sizes: vec![Vec2::new(1280, 720)],
            },
            FormatInfo {
                fourcc: PixelFormat::Jpeg.as_fourcc(),
                description: "Motion-JPEG".to_string(),
                sizes: vec![Vec2::new(1280, 720)],
            },
        ])
    }

    fn configure(&mut self, format: &DeviceFormat) -> Result<DeviceFormat, VideoError> {
        self.buffer_count = format.buffer_count;
        Ok(*format)
    }

    fn start_streaming(&mut self) -> Result<u32, VideoError> {
        Ok(self.buffer_count)
    }

    fn wait_for_frame(&mut self, timeout: Duration) -> Result<WaitStatus, VideoError> {
        match self.frames.pop_front() {
            Some(frame) => {
                self.pending = Some(frame);
                Ok(WaitStatus::Ready)
            }
            None => {
                std::thread::sleep(timeout);
                Ok(WaitStatus::TimedOut)
            }
        }
    }

    fn read_frame(&mut self) -> Result<Vec<u8>, VideoError> {
        self.pending
            .take()
            .ok_or_else(|| VideoError::ReadFailure("no frame".to_string()))
    }

    fn stop_streaming(&mut self) {}

    fn close(&mut self) {}
}
