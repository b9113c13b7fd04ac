use super::*;
use crate::color::Rgb;
use crate::encode::sink::{InMemorySink, SinkConfig};
use crate::foundation::core::{Fps, Rect};
use crate::surface::ShapeStyle;

#[test]
fn recording_host_clears_between_frames() {
    let mut host = RecordingHost::new(Canvas::new(40, 30));
    host.begin_frame(FrameIndex(0)).unwrap();
    host.surface()
        .rectangle(Rect::new(0.0, 0.0, 10.0, 10.0), ShapeStyle::filled(Rgb::RED));
    host.present_frame(FrameIndex(0)).unwrap();
    host.begin_frame(FrameIndex(1)).unwrap();
    host.present_frame(FrameIndex(1)).unwrap();

    let frames = host.frames();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].1.len(), 1);
    assert!(frames[1].1.is_empty());
}

#[test]
fn recording_host_accumulates_requested_delays() {
    let mut host = RecordingHost::new(Canvas::new(4, 4));
    host.sleep(Duration::from_millis(300));
    host.sleep(Duration::from_millis(300));
    assert_eq!(host.slept(), Duration::from_millis(600));
}

#[test]
fn raster_host_pushes_rasterized_frames() {
    let mut sink = InMemorySink::new();
    sink.begin(SinkConfig {
        width: 8,
        height: 8,
        fps: Fps::new(10, 3).unwrap(),
    })
    .unwrap();
    {
        let mut host = RasterHost::new(
            Canvas::new(8, 8),
            CpuBackendOpts::default(),
            &mut sink,
            Pacing::Offline,
        );
        host.begin_frame(FrameIndex(0)).unwrap();
        host.surface()
            .rectangle(Rect::new(0.0, 0.0, 8.0, 8.0), ShapeStyle::filled(Rgb::GREEN));
        host.present_frame(FrameIndex(0)).unwrap();
        let t0 = std::time::Instant::now();
        host.sleep(Duration::from_secs(5));
        assert!(t0.elapsed() < Duration::from_secs(1));
    }

    let frames = sink.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].0, FrameIndex(0));
    let px = frames[0].1.pixel(4, 4).unwrap();
    assert!(px.iter().zip([0u8, 128, 0, 255]).all(|(a, b)| a.abs_diff(b) <= 2));
}
