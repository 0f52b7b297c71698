mod common;

use {
    base::{LOGGER, Level, Logger, Vec2},
    common::*,
    std::sync::{Arc, Mutex},
    takepic::{CaptureWriter, InputEvent, MaskState, Overlay, RenderLoop, overlay::MASK_PNG},
    video::frame_buffer,
};

struct WarningLog(Arc<Mutex<Vec<String>>>);

impl Logger for WarningLog {
    fn log(&self, level: Level, _file: &str, _line: usize, message: &str) {
        if level == Level::Warn {
            self.0.lock().unwrap().push(message.to_string());
        }
    }
}

#[test]
fn test_mismatched_mask_is_skipped_and_reported_once() {
    let warnings = Arc::new(Mutex::new(Vec::new()));
    LOGGER
        .lock()
        .unwrap()
        .replace(Box::new(WarningLog(Arc::clone(&warnings))));

    let frame = Vec2::new(160, 120);
    let (publisher, frames) = frame_buffer();
    publisher.publish(raw_frame(1, frame, gray_jpeg(frame, 128)));

    // mask sized for a different camera
    let overlay = Overlay::load(MASK_PNG, 160, Vec2::new(64, 64)).unwrap();
    let display = HeadlessDisplay::new();
    let mut render = RenderLoop::new(
        display.clone(),
        frames,
        overlay,
        CaptureWriter::new(temp_root("mismatch"), 100),
        3,
    )
    .with_clock(fixed_clock);

    render.tick().unwrap();
    let (plain, _) = display.last_presented().unwrap();

    display.push(vec![InputEvent::MaskKeyDown]);
    for _ in 0..5 {
        render.tick().unwrap();
    }
    assert_eq!(render.state(), MaskState::MaskShown);
    let (held, _) = display.last_presented().unwrap();
    assert_eq!(held, plain);

    let mismatches = warnings
        .lock()
        .unwrap()
        .iter()
        .filter(|message| message.starts_with("mask is"))
        .count();
    assert_eq!(mismatches, 1);
}
