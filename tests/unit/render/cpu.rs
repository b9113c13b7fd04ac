use super::*;
use crate::color::Rgb;
use crate::foundation::core::Canvas;
use crate::surface::{Surface, bbox};

fn near(a: [u8; 4], b: [u8; 4]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= 2)
}

#[test]
fn arc_angles_run_counterclockwise_on_screen() {
    let arc = arc_in(Rect::new(0.0, 0.0, 20.0, 10.0), 90.0, 90.0);
    let start = arc.center
        + Vec2::new(
            arc.radii.x * arc.start_angle.cos(),
            arc.radii.y * arc.start_angle.sin(),
        );
    // 90 degrees is 12 o'clock, i.e. the top of the box.
    assert!((start - Point::new(10.0, 0.0)).hypot() < 1e-9);
}

#[test]
fn fills_cover_their_pixels() {
    let mut list = DisplayList::new(Canvas::new(32, 16));
    list.rectangle(bbox(0.0, 0.0, 32.0, 16.0), ShapeStyle::filled(Rgb::WHITE));
    list.rectangle(bbox(0.0, 0.0, 16.0, 16.0), ShapeStyle::filled(Rgb::RED));

    let frame = CpuBackend::new(CpuBackendOpts::default())
        .render(&list)
        .unwrap();
    assert_eq!((frame.width, frame.height), (32, 16));
    assert_eq!(frame.data.len(), 32 * 16 * 4);
    assert!(near(frame.pixel(4, 8).unwrap(), [255, 0, 0, 255]));
    assert!(near(frame.pixel(28, 8).unwrap(), [255, 255, 255, 255]));
    assert_eq!(frame.pixel(32, 0), None);
}

#[test]
fn degenerate_shapes_do_not_fail() {
    let mut list = DisplayList::new(Canvas::new(8, 8));
    let p = Point::new(4.0, 4.0);
    list.polygon(&[p, p, p, p, p, p], ShapeStyle::filled(Rgb::GREEN));
    list.polygon(&[], ShapeStyle::filled(Rgb::GREEN));
    list.line(p, p, Stroke::new(Rgb::BLACK, 3.0));
    list.ellipse(bbox(4.0, 4.0, 4.0, 4.0), ShapeStyle::filled(Rgb::RED));
    list.pie(bbox(1.0, 1.0, 7.0, 7.0), 0.0, 0.0, ShapeStyle::filled(Rgb::RED));
    assert!(CpuBackend::new(CpuBackendOpts::default()).render(&list).is_ok());
}

#[test]
fn oversized_canvas_is_rejected() {
    let list = DisplayList::new(Canvas::new(70_000, 10));
    let err = CpuBackend::new(CpuBackendOpts::default())
        .render(&list)
        .unwrap_err();
    assert!(err.to_string().contains("render error"));
}
