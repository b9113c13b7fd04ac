use super::*;

#[test]
fn saw_ramps_and_wraps() {
    let w = Wave::saw(45.0, -10.0, 12);
    assert_eq!(w.at(0), 45.0);
    assert_eq!(w.at(3), 15.0);
    assert_eq!(w.at(11), -65.0);
    assert_eq!(w.at(12), 45.0);
    assert_eq!(w.at(50), 25.0);
}

#[test]
fn shifted_saw_matches_offset_counter() {
    let w = Wave::saw(0.0, 15.0, 5).shifted(4);
    let expect = |t: u64| ((t + 4) % 5 * 15) as f64;
    for t in 0..20 {
        assert_eq!(w.at(t), expect(t));
    }
}

#[test]
fn fold_is_triangular() {
    let w = Wave::fold(85.0, 10.0, 10, 5).shifted(50);
    let expect = |t: u64| 85.0 + (5i64 - ((50 + t) % 10) as i64).abs() as f64 * 10.0;
    for t in 0..25 {
        assert_eq!(w.at(t), expect(t));
    }
    assert_eq!(Wave::fold(0.0, 1.0, 10, 5).at(5), 0.0);
    assert_eq!(Wave::fold(0.0, 1.0, 10, 5).at(0), 5.0);
}

#[test]
fn zero_period_holds_base() {
    assert_eq!(Wave::saw(7.0, 3.0, 0).at(9), 7.0);
    assert_eq!(Wave::fold(7.0, 3.0, 0, 2).at(9), 7.0);
}

#[test]
fn frozen_wave_is_constant() {
    let w = Wave::saw(90.0, 4.0, 10).frozen_at(7);
    assert_eq!(w, Wave::Const(118.0));
    assert_eq!(w.at(0), w.at(1234));
}

#[test]
fn swim_table_reproduces_stroke_on_sample_ticks() {
    let origin = Point::new(300.0, 400.0);
    for t in [0u64, 1, 7, 13, 50] {
        let limbs = pose_all(&FROG_SWIM, origin, t, Rgb::GREEN);
        let m12 = (t % 12) as f64;
        let m5 = (t % 5) as f64;

        assert_eq!(limbs[0].anchor, Point::new(305.0, 395.0));
        assert_eq!(limbs[0].upper.angle_deg, 45.0 - m12 * 10.0);
        assert_eq!(limbs[0].lower.angle_deg, 225.0 + m12 * 5.0);
        assert_eq!(limbs[0].membrane.center_deg, -m12 * 9.0);

        assert_eq!(limbs[1].anchor, Point::new(295.0, 395.0));
        assert_eq!(limbs[1].upper.angle_deg, 135.0 + m12 * 10.0);
        assert_eq!(limbs[1].membrane.center_deg, 180.0 + m12 * 9.0);

        assert_eq!(limbs[2].anchor, Point::new(320.0, 350.0));
        assert_eq!(limbs[2].upper.angle_deg, ((t + 4) % 5 * 15) as f64);
        assert_eq!(limbs[2].lower.angle_deg, 90.0 + m5 * 10.0);
        assert_eq!(limbs[2].membrane.spread_deg, (t % 4 * 12) as f64);

        assert_eq!(limbs[3].upper.angle_deg, 180.0 - ((t + 4) % 5 * 15) as f64);
        assert_eq!(limbs[3].membrane.center_deg, 90.0 - (t % 10 * 4) as f64);
    }
}

#[test]
fn paddle_in_place_only_moves_two_feet() {
    let gait = frog_paddle_in_place(50);
    let origin = Point::new(350.0, 350.0);
    let a = pose_all(&gait, origin, 0, Rgb::GREEN);
    let b = pose_all(&gait, origin, 3, Rgb::GREEN);

    assert_eq!(a[0], b[0]);
    assert_eq!(a[3], b[3]);
    assert_eq!(a[0].upper.angle_deg, 25.0);
    assert_eq!(a[3].membrane.spread_deg, 50.0);

    assert_eq!(a[1].membrane.center_deg, 180.0 + (50 % 6 * 9) as f64);
    assert_eq!(b[1].membrane.center_deg, 180.0 + (53 % 6 * 9) as f64);
    assert_eq!(a[2].membrane.center_deg, 85.0 + 50.0);
    assert_eq!(b[2].membrane.center_deg, 85.0 + 20.0);
    assert_eq!(a[1].upper, b[1].upper);
    assert_eq!(a[2].lower, b[2].lower);
}
