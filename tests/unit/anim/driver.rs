use super::*;
use crate::anim::host::RecordingHost;
use crate::color::Rgb;
use crate::figure::snail::SnailSpec;
use crate::foundation::core::{Canvas, Point, Vec2};

struct Crawl {
    backdrop: Backdrop,
    last: u64,
}

impl Animation for Crawl {
    fn start(&self) -> AnimationState {
        AnimationState::new(Point::new(10.0, 100.0), Vec2::new(2.0, 0.0))
    }

    fn ticks(&self) -> TickRange {
        TickRange::up_to(self.last)
    }

    fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    fn figures(&self, state: &AnimationState) -> Vec<Figure> {
        vec![
            SnailSpec {
                base: state.position,
                dx: 20.0,
                dy: 20.0,
                body_color: Rgb::GREEN,
                head_color: Rgb::RED,
            }
            .into(),
        ]
    }
}

fn crawl(last: u64) -> AnimationDriver<Crawl> {
    AnimationDriver::new(Crawl {
        backdrop: Backdrop::default(),
        last,
    })
}

#[test]
fn fifty_tick_bound_presents_fifty_one_frames() {
    let mut driver = crawl(50);
    let mut host = RecordingHost::new(Canvas::new(200, 150));
    let stats = driver.run(&mut host).unwrap();

    assert_eq!(stats.frames, 51);
    assert_eq!(host.frames().len(), 51);
    assert_eq!(host.frames()[0].0, FrameIndex(0));
    assert_eq!(host.frames()[50].0, FrameIndex(50));
    assert_eq!(stats.paced, DEFAULT_FRAME_DELAY * 51);
    assert_eq!(host.slept(), stats.paced);
    assert!(driver.is_finished());
}

#[test]
fn second_run_presents_nothing_and_keeps_state() {
    let mut driver = crawl(3);
    let mut host = RecordingHost::new(Canvas::new(200, 150));
    driver.run(&mut host).unwrap();
    let after = *driver.state();

    let stats = driver.run(&mut host).unwrap();
    assert_eq!(stats.frames, 0);
    assert_eq!(host.frames().len(), 4);
    assert_eq!(*driver.state(), after);
    assert_eq!(after.tick, 4);
    assert_eq!(after.position, Point::new(18.0, 100.0));
}

#[test]
fn every_frame_starts_with_the_backdrop() {
    let mut driver = crawl(2);
    let mut host = RecordingHost::new(Canvas::new(200, 150));
    driver.run(&mut host).unwrap();

    let mut reference = crate::surface::display_list::DisplayList::new(Canvas::new(200, 150));
    Backdrop::default().draw(&mut reference);
    let n = reference.len();
    for (_, list) in host.frames() {
        assert!(list.len() > n);
        assert_eq!(&list.ops()[..n], reference.ops());
    }
}

#[test]
fn draw_at_matches_the_presented_frame() {
    let mut driver = crawl(5);
    let canvas = Canvas::new(200, 150);
    let mut replay = crate::surface::display_list::DisplayList::new(canvas);
    driver.draw_at(FrameIndex(3), &mut replay);

    let mut host = RecordingHost::new(canvas);
    driver.run(&mut host).unwrap();
    assert_eq!(host.frames()[3].1.ops(), replay.ops());
    assert_eq!(driver.state_at(FrameIndex(3)).position, Point::new(16.0, 100.0));
}
