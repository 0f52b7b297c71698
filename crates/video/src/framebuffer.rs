use {
    crate::RawFrame,
    std::sync::Arc,
    tokio::sync::watch,
};

type Slot = Option<Arc<RawFrame>>;

/// Write side of the frame slot, owned by the capture worker.
#[derive(Debug)]
pub struct FramePublisher {
    sender: watch::Sender<Slot>,
}

/// Read side of the frame slot. Cloning gives another independent reader.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    receiver: watch::Receiver<Slot>,
}

/// Create an empty single-slot frame buffer.
pub fn frame_buffer() -> (FramePublisher, FrameBuffer) {
    let (sender, receiver) = watch::channel(None);
    (FramePublisher { sender }, FrameBuffer { receiver })
}

impl FramePublisher {
    /// Replace the current frame. Never waits for readers.
    pub fn publish(&self, frame: RawFrame) {
        self.sender.send_replace(Some(Arc::new(frame)));
    }
}

impl FrameBuffer {
    /// The most recently published frame, or `None` before the first one.
    pub fn latest(&self) -> Option<Arc<RawFrame>> {
        self.receiver.borrow().clone()
    }

    /// True once the publisher has been dropped.
    pub fn is_closed(&self) -> bool {
        self.receiver.has_changed().is_err()
    }
}

/// Anything the render side can pull the current frame from.
pub trait FrameSource {
    fn latest(&self) -> Option<Arc<RawFrame>>;

    /// A fatal capture error, reported once.
    fn take_error(&self) -> Option<crate::VideoError> {
        None
    }
}

impl FrameSource for FrameBuffer {
    fn latest(&self) -> Option<Arc<RawFrame>> {
        FrameBuffer::latest(self)
    }
}
