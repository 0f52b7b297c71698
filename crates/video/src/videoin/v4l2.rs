use {
    crate::*,
    base::Vec2,
    std::{path::Path, time::Duration},
    v4l::{
        Device, Format, FourCC,
        buffer::Type,
        framesize::FrameSizeEnum,
        io::mmap::Stream as MmapStream,
        io::traits::{CaptureStream, Stream as StreamControl},
        video::Capture,
    },
};

// the stream needs one buffer held back for the first dequeue
const MIN_BUFFER_COUNT: u32 = 2;

/// V4L2 capture device using memory-mapped streaming I/O.
pub struct V4l2 {
    device: Option<Device>,
    stream: Option<MmapStream<'static>>,
    buffer_count: u32,
    ready: bool,
}

impl V4l2 {
    pub fn open(path: &Path) -> Result<Self, VideoError> {
        let device = Device::with_path(path)
            .map_err(|e| VideoError::DeviceUnavailable(format!("{}: {}", path.display(), e)))?;
        Ok(Self {
            device: Some(device),
            stream: None,
            buffer_count: MIN_BUFFER_COUNT,
            ready: false,
        })
    }

    fn device(&self) -> Result<&Device, VideoError> {
        self.device
            .as_ref()
            .ok_or_else(|| VideoError::DeviceUnavailable("device closed".to_string()))
    }

    fn stream(&mut self) -> Result<&mut MmapStream<'static>, VideoError> {
        self.stream
            .as_mut()
            .ok_or_else(|| VideoError::ReadFailure("not streaming".to_string()))
    }
}

fn fourcc_code(fourcc: FourCC) -> u32 {
    u32::from_le_bytes(fourcc.repr)
}

impl CaptureDevice for V4l2 {
    fn formats(&self) -> Result<Vec<FormatInfo>, VideoError> {
        let device = self.device()?;
        let descriptions = Capture::enum_formats(device)
            .map_err(|e| VideoError::UnsupportedFormat(format!("cannot enumerate formats: {e}")))?;

        let mut formats = Vec::with_capacity(descriptions.len());
        for description in descriptions {
            let sizes = Capture::enum_framesizes(device, description.fourcc)
                .map_err(|e| {
                    VideoError::UnsupportedFormat(format!(
                        "cannot enumerate sizes of {}: {e}",
                        description.fourcc
                    ))
                })?
                .into_iter()
                .map(|framesize| match framesize.size {
                    FrameSizeEnum::Discrete(discrete) => {
                        Vec2::new(discrete.width as usize, discrete.height as usize)
                    }
                    FrameSizeEnum::Stepwise(stepwise) => {
                        Vec2::new(stepwise.max_width as usize, stepwise.max_height as usize)
                    }
                })
                .collect();
            formats.push(FormatInfo {
                fourcc: fourcc_code(description.fourcc),
                description: description.description,
                sizes,
            });
        }
        Ok(formats)
    }

    fn configure(&mut self, format: &DeviceFormat) -> Result<DeviceFormat, VideoError> {
        let device = self.device()?;
        let requested = FourCC::new(&format.format.as_fourcc().to_le_bytes());

        // set the format and get the actual format back
        let actual = Capture::set_format(
            device,
            &Format::new(format.size.x as u32, format.size.y as u32, requested),
        )
        .map_err(|e| VideoError::UnsupportedFormat(e.to_string()))?;
        if actual.fourcc != requested {
            return Err(VideoError::UnsupportedFormat(format!(
                "requested {}, device chose {}",
                requested, actual.fourcc
            )));
        }

        let params = Capture::set_params(
            device,
            &v4l::video::capture::Parameters::with_fps(format.frame_rate),
        )
        .map_err(|e| VideoError::UnsupportedFormat(e.to_string()))?;
        let frame_rate = match params.interval.numerator {
            0 => format.frame_rate,
            numerator => params.interval.denominator / numerator,
        };

        self.buffer_count = format.buffer_count.max(MIN_BUFFER_COUNT);

        Ok(DeviceFormat {
            format: format.format,
            size: Vec2::new(actual.width as usize, actual.height as usize),
            buffer_count: self.buffer_count,
            frame_rate,
        })
    }

    fn start_streaming(&mut self) -> Result<u32, VideoError> {
        let mut stream =
            MmapStream::with_buffers(self.device()?, Type::VideoCapture, self.buffer_count)
                .map_err(|e| VideoError::DeviceBusy(e.to_string()))?;

        // buffer 0 is queued by the first `next`, which afterwards re-queues
        // whichever buffer it handed out last
        let granted = queue_spare_buffers(self.buffer_count, |index| {
            CaptureStream::queue(&mut stream, index)
        })?;
        StreamControl::start(&mut stream).map_err(|e| VideoError::DeviceBusy(e.to_string()))?;

        self.stream = Some(stream);
        self.buffer_count = granted;
        self.ready = false;
        Ok(granted)
    }

    fn wait_for_frame(&mut self, timeout: Duration) -> Result<WaitStatus, VideoError> {
        if self.stream.is_none() {
            return Err(VideoError::ReadFailure("not streaming".to_string()));
        }
        let handle = self.device()?.handle();
        let timeout_ms = timeout.as_millis().min(i32::MAX as u128) as i32;
        match handle.poll(libc::POLLIN, timeout_ms) {
            Ok(0) => Ok(WaitStatus::TimedOut),
            Ok(_) => {
                self.ready = true;
                Ok(WaitStatus::Ready)
            }
            Err(error) if error.kind() == std::io::ErrorKind::Interrupted => {
                Ok(WaitStatus::TimedOut)
            }
            Err(error) => Err(VideoError::ReadFailure(error.to_string())),
        }
    }

    fn read_frame(&mut self) -> Result<Vec<u8>, VideoError> {
        if !std::mem::take(&mut self.ready) {
            return Err(VideoError::ReadFailure(
                "read_frame called before a frame was ready".to_string(),
            ));
        }
        let stream = self.stream()?;
        let (data, metadata) =
            CaptureStream::next(stream).map_err(|e| VideoError::ReadFailure(e.to_string()))?;

        // copy out, the buffer is only valid until the next call
        let used = (metadata.bytesused as usize).min(data.len());
        Ok(data[..used].to_vec())
    }

    fn stop_streaming(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            if let Err(error) = StreamControl::stop(&mut stream) {
                log::warn!("v4l2: stopping stream failed: {}", error);
            }
        }
        self.ready = false;
    }

    fn close(&mut self) {
        self.stop_streaming();
        self.device.take();
    }
}
