use super::*;

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn polar_uses_screen_orientation() {
    let o = Point::new(10.0, 10.0);
    assert!(close(polar(o, 5.0, 0.0), Point::new(15.0, 10.0)));
    assert!(close(polar(o, 5.0, 90.0), Point::new(10.0, 5.0)));
    assert!(close(polar(o, 5.0, 270.0), Point::new(10.0, 15.0)));
    assert!(close(polar(o, 5.0, -90.0), polar(o, 5.0, 270.0)));
    assert!(close(polar(o, 5.0, 720.0), polar(o, 5.0, 0.0)));
}

#[test]
fn truncate_wrap_keeps_low_byte() {
    assert_eq!(truncate_wrap_u8(254.9), 254);
    assert_eq!(truncate_wrap_u8(266.7), 10);
    assert_eq!(truncate_wrap_u8(256.0), 0);
    assert_eq!(truncate_wrap_u8(-0.5), 0);
    assert_eq!(truncate_wrap_u8(-10.0), 246);
}

#[test]
fn mirror_reflects_about_axis() {
    assert!(close(mirror_x(Point::new(12.0, 3.0), 10.0), Point::new(8.0, 3.0)));
    assert!(close(mirror_x(Point::new(10.0, 3.0), 10.0), Point::new(10.0, 3.0)));
}
