use super::*;
use crate::foundation::core::Canvas;
use crate::surface::display_list::{DisplayList, DrawOp};

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

fn limb_spec(upper: Bone, lower: Bone, membrane: Membrane) -> LimbSpec {
    LimbSpec {
        anchor: Point::new(100.0, 100.0),
        upper,
        lower,
        membrane,
        color: Rgb::new(0, 128, 0),
    }
}

#[test]
fn joints_follow_absolute_angles() {
    let g = limb_spec(
        Bone::new(10.0, 0.0),
        Bone::new(20.0, 90.0),
        Membrane::new(5.0, 9.0, 0.0, 40.0),
    )
    .geometry();
    assert!(close(g.knee, Point::new(110.0, 100.0)));
    // The shin points straight up regardless of the thigh direction.
    assert!(close(g.foot, Point::new(110.0, 80.0)));
    assert!(close(g.web[0], g.foot));
}

#[test]
fn fan_radii_and_angles() {
    let m = Membrane::new(50.0, 70.0, 10.0, 40.0);
    let root = Point::new(0.0, 0.0);
    let fan = m.fan(root);

    let radii: Vec<f64> = fan[1..].iter().map(|p| (*p - root).hypot()).collect();
    for (got, want) in radii.iter().zip([60.0, 50.0, 70.0, 50.0, 60.0]) {
        assert!((got - want).abs() < 1e-9, "{got} vs {want}");
    }

    let angles: Vec<f64> = fan[1..]
        .iter()
        .map(|p| (-p.y).atan2(p.x).to_degrees())
        .collect();
    for (got, want) in angles.iter().zip([-10.0, 0.0, 10.0, 20.0, 30.0]) {
        assert!((got - want).abs() < 1e-9, "{got} vs {want}");
    }
}

#[test]
fn zero_spread_collapses_fan_onto_one_ray() {
    let limb = limb_spec(
        Bone::new(40.0, 33.0),
        Bone::new(40.0, 123.0),
        Membrane::new(20.0, 30.0, 77.0, 0.0),
    );
    let g = limb.geometry();
    let dir = crate::foundation::math::heading(77.0);
    for p in &g.web[1..] {
        let v = *p - g.foot;
        assert!(v.cross(dir).abs() < 1e-9, "off-ray point {p:?}");
        assert!(v.dot(dir) > 0.0);
    }
}

#[test]
fn zero_lower_bone_puts_foot_on_knee() {
    for angle in [0.0, 45.0, 270.0, -400.0] {
        let g = limb_spec(
            Bone::new(30.0, 270.0),
            Bone::new(0.0, angle),
            Membrane::new(10.0, 15.0, 0.0, 50.0),
        )
        .geometry();
        assert!(close(g.foot, g.knee));
    }
}

#[test]
fn angles_outside_one_turn_are_periodic() {
    let a = limb_spec(
        Bone::new(25.0, 45.0 - 110.0),
        Bone::new(25.0, 225.0 + 55.0),
        Membrane::new(5.0, 8.0, -99.0, 30.0),
    )
    .geometry();
    let b = limb_spec(
        Bone::new(25.0, 45.0 - 110.0 + 360.0),
        Bone::new(25.0, 225.0 + 55.0 - 720.0),
        Membrane::new(5.0, 8.0, -99.0 + 360.0, 30.0),
    )
    .geometry();
    assert!(close(a.foot, b.foot));
    for (p, q) in a.web.iter().zip(b.web.iter()) {
        assert!((*p - *q).hypot() < 1e-6);
    }
}

#[test]
fn render_draws_bones_then_membrane() {
    let limb = limb_spec(
        Bone::new(50.0, 45.0),
        Bone::new(50.0, 225.0),
        Membrane::new(50.0, 70.0, 0.0, 30.0),
    );
    let mut list = DisplayList::new(Canvas::default());
    render_limb(&limb, &mut list);

    let ops = list.ops();
    assert_eq!(ops.len(), 3);
    let dark = Rgb::new(0, 64, 0);
    for op in &ops[..2] {
        let DrawOp::Line { stroke, .. } = op else {
            panic!("expected bone stroke, got {op:?}");
        };
        assert_eq!(stroke.color, dark);
        assert_eq!(stroke.width, BONE_WIDTH);
    }
    let DrawOp::Polygon { points, style } = &ops[2] else {
        panic!("expected membrane polygon");
    };
    assert_eq!(points.len(), 6);
    assert_eq!(style.fill, Some(limb.color));
    assert_eq!(style.stroke.map(|s| s.color), Some(dark));
}
