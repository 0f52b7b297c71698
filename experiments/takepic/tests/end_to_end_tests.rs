mod common;

use {
    base::Vec2,
    chrono::Local,
    common::*,
    image::decode_rgba,
    std::{
        fs,
        time::{Duration, Instant},
    },
    takepic::{Config, InputEvent, RenderLoop},
    video::VideoIn,
};

#[test]
fn test_capture_one_picture() {
    let root = temp_root("end-to-end");
    let config = Config::default().with_picture_root(&root);

    let camera_size = Vec2::new(1280, 720);
    let frames = (0..3)
        .map(|i| gray_jpeg(camera_size, 60 + i * 40))
        .collect::<Vec<_>>();
    let videoin = VideoIn::open(config.video().clone(), move |_| Ok(FakeCamera::new(frames)))
        .unwrap();
    assert_eq!(videoin.format().size, camera_size);

    let display = HeadlessDisplay::new();
    let mut render = RenderLoop::from_video(&config, videoin, display.clone())
        .unwrap()
        .with_clock(fixed_clock);

    let deadline = Instant::now() + Duration::from_secs(5);
    while display.presented() == 0 {
        assert!(Instant::now() < deadline, "no frame presented");
        render.tick().unwrap();
        std::thread::sleep(Duration::from_millis(1));
    }
    let (_, size) = display.last_presented().unwrap();
    assert_eq!(size, Vec2::new(720, 720));

    display.push(vec![InputEvent::MaskKeyDown]);
    display.push(vec![InputEvent::MaskKeyUp]);
    display.push(vec![InputEvent::Quit]);
    render.run().unwrap();
    drop(render);

    let saved = fs::read_dir(&root)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect::<Vec<_>>();
    assert_eq!(saved.len(), 1);
    let today = Local::now().date_naive().format("%Y-%m-%d");
    assert_eq!(saved[0], root.join(format!("{}.jpg", today)));
    let picture = decode_rgba(&fs::read(&saved[0]).unwrap()).unwrap();
    assert_eq!(picture.size, Vec2::new(720, 720));
    let _ = fs::remove_dir_all(&root);
}
