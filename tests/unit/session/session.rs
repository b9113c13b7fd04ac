use super::*;
use crate::anim::acts::{Act, FrogSwim};
use crate::encode::sink::InMemorySink;
use crate::foundation::core::Canvas;

fn small_swim(last_tick: u64) -> Show {
    Show {
        canvas: Canvas::new(160, 120),
        frame_delay_ms: 300,
        act: Act::FrogSwim(FrogSwim {
            start: crate::foundation::core::Point::new(40.0, 110.0),
            last_tick,
            ..FrogSwim::default()
        }),
    }
}

#[test]
fn render_all_streams_every_tick_in_order() {
    let session = ShowSession::new(small_swim(4)).unwrap();
    let mut sink = InMemorySink::new();
    let stats = session.render_all(&mut sink, Pacing::Offline).unwrap();

    assert_eq!(stats.frames, 5);
    assert_eq!(stats.paced, Duration::from_millis(1500));
    assert!(sink.is_ended());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (160, 120));
    assert_eq!(cfg.fps, Fps::new(10, 3).unwrap());
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2, 3, 4]);
}

#[test]
fn render_tick_matches_streamed_frame() {
    let session = ShowSession::new(small_swim(4)).unwrap();
    let mut sink = InMemorySink::new();
    session.render_all(&mut sink, Pacing::Offline).unwrap();

    let single = session.render_tick(FrameIndex(3)).unwrap();
    assert_eq!(single.data, sink.frames()[3].1.data);
}

#[test]
fn render_tick_outside_range_is_rejected() {
    let session = ShowSession::new(small_swim(4)).unwrap();
    let err = session.render_tick(FrameIndex(5)).unwrap_err();
    assert!(matches!(err, BolotoError::Validation(_)));
}

#[test]
fn invalid_show_is_rejected_up_front() {
    let mut show = small_swim(1);
    show.frame_delay_ms = 0;
    assert!(ShowSession::new(show).is_err());
}
