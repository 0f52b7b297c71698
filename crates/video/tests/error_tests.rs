use std::io;
use video::VideoError;

#[test]
fn test_from_io_timeout_is_transient() {
    let err: VideoError = io::Error::new(io::ErrorKind::TimedOut, "VIDIOC_DQBUF").into();
    assert!(matches!(err, VideoError::Timeout));
    assert!(err.is_transient());
}

#[test]
fn test_from_io_other_is_read_failure() {
    let err: VideoError = io::Error::other("EIO").into();
    match err {
        VideoError::ReadFailure(msg) => assert!(msg.contains("EIO")),
        other => panic!("Expected ReadFailure, got {:?}", other),
    }
}

#[test]
fn test_only_timeout_is_transient() {
    assert!(!VideoError::DeviceBusy("busy".to_string()).is_transient());
    assert!(!VideoError::DeviceUnavailable("gone".to_string()).is_transient());
    assert!(!VideoError::UnsupportedFormat("H264".to_string()).is_transient());
}

#[test]
fn test_error_display() {
    let err = VideoError::DeviceUnavailable("/dev/video9: No such file".to_string());
    assert!(err.to_string().contains("/dev/video9"));
    assert_eq!(VideoError::Timeout.to_string(), "timed out waiting for frame");
}
