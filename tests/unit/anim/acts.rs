use super::*;
use crate::anim::driver::AnimationDriver;
use crate::anim::host::RecordingHost;
use crate::foundation::core::{Canvas, FrameIndex};

#[test]
fn frog_swim_moves_diagonally_with_four_limbs() {
    let act = FrogSwim::default();
    let state = act.start().advanced(10);
    let figures = act.figures(&state);
    assert_eq!(figures.len(), 1);
    let Figure::Frog(frog) = &figures[0] else {
        panic!("expected a frog, got {:?}", figures[0]);
    };
    assert_eq!(frog.base, Point::new(200.0, 490.0));
    assert_eq!(frog.limbs.len(), 4);
    assert_eq!(act.ticks().len_frames(), 51);
}

#[test]
fn frog_swim_limbs_follow_the_tick() {
    let act = FrogSwim::default();
    let s0 = act.start();
    let s1 = s0.advanced(1);
    let Figure::Frog(a) = &act.figures(&s0)[0] else {
        panic!("expected a frog");
    };
    let Figure::Frog(b) = &act.figures(&s1)[0] else {
        panic!("expected a frog");
    };
    assert_eq!(a.limbs[0].upper.angle_deg, 45.0);
    assert_eq!(b.limbs[0].upper.angle_deg, 35.0);
}

#[test]
fn snail_parade_draws_frog_once_then_the_chain() {
    let act = SnailParade::default();
    let figures = act.figures(&act.start());
    assert_eq!(figures.len(), 8);
    assert!(matches!(figures[0], Figure::Frog(_)));
    assert!(figures[1..].iter().all(|f| matches!(f, Figure::Snail(_))));

    let Figure::Frog(frog) = &figures[0] else {
        panic!("expected a frog");
    };
    assert_eq!(frog.base, Point::new(350.0, 350.0));
}

#[test]
fn snail_parade_frog_stays_put_while_feet_flutter() {
    let act = SnailParade::default();
    let s0 = act.start();
    let s3 = s0.advanced(3);
    let (Figure::Frog(a), Figure::Frog(b)) = (&act.figures(&s0)[0], &act.figures(&s3)[0]) else {
        panic!("expected frogs");
    };
    assert_eq!(a.base, b.base);
    assert_eq!(a.limbs[0], b.limbs[0]);
    assert_ne!(a.limbs[1].membrane, b.limbs[1].membrane);
    assert_eq!(a.limbs[2].membrane.spread_deg, 50.0);
    assert_eq!(a.limbs[3].membrane.spread_deg, 50.0);
}

#[test]
fn snail_parade_leader_moves_chain_along() {
    let act = SnailParade::default();
    let state = act.start().advanced(4);
    let figures = act.figures(&state);
    let Figure::Snail(leader) = &figures[1] else {
        panic!("expected the leading snail");
    };
    assert_eq!(leader.base, Point::new(220.0, 580.0));
    assert_eq!(leader.dx, 50.0);
}

#[test]
fn tableau_has_birds_facing_both_ways() {
    let act = Tableau::default();
    let figures = act.figures(&act.start());
    let facings: Vec<f64> = figures
        .iter()
        .filter_map(|f| match f {
            Figure::Bird(b) => Some(b.facing()),
            _ => None,
        })
        .collect();
    assert_eq!(facings, vec![1.0, -1.0]);
    assert!(figures.iter().any(|f| matches!(f, Figure::Frog(_))));
    assert!(figures.iter().any(|f| matches!(f, Figure::Snail(_))));
    assert_eq!(act.ticks().len_frames(), 1);
}

#[test]
fn act_enum_delegates_to_the_wrapped_act() {
    let act = Act::SnailParade(SnailParade {
        last_tick: 2,
        ..SnailParade::default()
    });
    let mut driver = AnimationDriver::new(act);
    let mut host = RecordingHost::new(Canvas::default());
    let stats = driver.run(&mut host).unwrap();
    assert_eq!(stats.frames, 3);
    assert_eq!(host.frames()[2].0, FrameIndex(2));
}

#[test]
fn acts_deserialize_from_snake_case_tags() {
    let act: Act = serde_json::from_value(serde_json::json!({
        "frog_swim": { "start": [10, 20], "last_tick": 5 }
    }))
    .unwrap();
    let Act::FrogSwim(swim) = act else {
        panic!("expected frog_swim");
    };
    assert_eq!(swim.start, Point::new(10.0, 20.0));
    assert_eq!(swim.last_tick, 5);
    assert_eq!(swim.velocity, Vec2::new(10.0, -6.0));
}
