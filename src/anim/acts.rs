use crate::anim::chain::Chain;
use crate::anim::driver::Animation;
use crate::anim::state::AnimationState;
use crate::color::Rgb;
use crate::figure::Figure;
use crate::figure::bird::BirdSpec;
use crate::figure::frog::FrogSpec;
use crate::figure::gait::{FROG_SWIM, frog_paddle_in_place};
use crate::figure::snail::SnailSpec;
use crate::foundation::core::{Point, TickRange, Vec2};
use crate::scene::Backdrop;

/// A frog swimming diagonally across the pond.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FrogSwim {
    /// Body base on tick 0.
    pub start: Point,
    /// Displacement per tick.
    pub velocity: Vec2,
    /// Last rendered tick.
    pub last_tick: u64,
    /// Skin color.
    pub color: Rgb,
    /// Background.
    pub backdrop: Backdrop,
}

impl Default for FrogSwim {
    fn default() -> Self {
        Self {
            start: Point::new(100.0, 550.0),
            velocity: Vec2::new(10.0, -6.0),
            last_tick: 50,
            color: Rgb::GREEN,
            backdrop: Backdrop::default(),
        }
    }
}

impl Animation for FrogSwim {
    fn start(&self) -> AnimationState {
        AnimationState::new(self.start, self.velocity)
    }

    fn ticks(&self) -> TickRange {
        TickRange::up_to(self.last_tick)
    }

    fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    fn figures(&self, state: &AnimationState) -> Vec<Figure> {
        vec![
            FrogSpec::new(state.position, self.color)
                .with_gait(&FROG_SWIM, state.tick)
                .into(),
        ]
    }
}

/// A shrinking line of snails crawling along the bank while a frog paddles in place.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SnailParade {
    /// Leader base on tick 0.
    pub start: Point,
    /// Leader displacement per tick; its horizontal sign sets the facing.
    pub velocity: Vec2,
    /// Last rendered tick.
    pub last_tick: u64,
    /// Trailing snails.
    pub chain: Chain,
    /// Where the paddling frog sits.
    pub frog_at: Point,
    /// Swim pose the paddling frog is frozen in.
    pub frog_pose_tick: u64,
    /// Frog skin color.
    pub frog_color: Rgb,
    /// Background.
    pub backdrop: Backdrop,
}

impl Default for SnailParade {
    fn default() -> Self {
        Self {
            start: Point::new(200.0, 580.0),
            velocity: Vec2::new(5.0, 0.0),
            last_tick: 100,
            chain: Chain::default(),
            frog_at: Point::new(350.0, 350.0),
            frog_pose_tick: 50,
            frog_color: Rgb::GREEN,
            backdrop: Backdrop::default(),
        }
    }
}

impl Animation for SnailParade {
    fn start(&self) -> AnimationState {
        AnimationState::new(self.start, self.velocity)
    }

    fn ticks(&self) -> TickRange {
        TickRange::up_to(self.last_tick)
    }

    fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    fn figures(&self, state: &AnimationState) -> Vec<Figure> {
        let gait = frog_paddle_in_place(self.frog_pose_tick);
        let frog = FrogSpec::new(self.frog_at, self.frog_color).with_gait(&gait, state.tick);
        std::iter::once(frog.into())
            .chain(
                self.chain
                    .snails(state.position, state.facing())
                    .into_iter()
                    .map(Figure::from),
            )
            .collect()
    }
}

/// Still life of every creature: a frog, two birds looking at each other and a snail.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tableau {
    /// Frog body base.
    pub frog_at: Point,
    /// Heel of the bird facing right.
    pub bird_at: Point,
    /// Heel of the bird facing left.
    pub mirrored_bird_at: Point,
    /// Snail shell base.
    pub snail_at: Point,
    /// Plumage of both birds.
    pub bird_color: Rgb,
    /// Last rendered tick; the frog keeps swimming on the spot past tick 0.
    pub last_tick: u64,
    /// Background.
    pub backdrop: Backdrop,
}

impl Default for Tableau {
    fn default() -> Self {
        Self {
            frog_at: Point::new(150.0, 450.0),
            bird_at: Point::new(450.0, 300.0),
            mirrored_bird_at: Point::new(650.0, 300.0),
            snail_at: Point::new(550.0, 560.0),
            bird_color: Rgb::new(240, 220, 60),
            last_tick: 0,
            backdrop: Backdrop::default(),
        }
    }
}

impl Animation for Tableau {
    fn start(&self) -> AnimationState {
        AnimationState::new(self.frog_at, Vec2::ZERO)
    }

    fn ticks(&self) -> TickRange {
        TickRange::up_to(self.last_tick)
    }

    fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    fn figures(&self, state: &AnimationState) -> Vec<Figure> {
        let chain = Chain::default();
        vec![
            FrogSpec::new(state.position, Rgb::GREEN)
                .with_gait(&FROG_SWIM, state.tick)
                .into(),
            BirdSpec::new(self.bird_at, self.bird_color).into(),
            BirdSpec::new(self.mirrored_bird_at, self.bird_color)
                .mirrored()
                .into(),
            SnailSpec {
                base: self.snail_at,
                dx: chain.base.width,
                dy: chain.base.height,
                body_color: chain.body_color,
                head_color: chain.head_color,
            }
            .into(),
        ]
    }
}

/// Any of the built-in acts.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Act {
    /// See [`FrogSwim`].
    FrogSwim(FrogSwim),
    /// See [`SnailParade`].
    SnailParade(SnailParade),
    /// See [`Tableau`].
    Tableau(Tableau),
}

impl Act {
    fn inner(&self) -> &dyn Animation {
        match self {
            Act::FrogSwim(a) => a,
            Act::SnailParade(a) => a,
            Act::Tableau(a) => a,
        }
    }
}

impl Animation for Act {
    fn start(&self) -> AnimationState {
        self.inner().start()
    }

    fn ticks(&self) -> TickRange {
        self.inner().ticks()
    }

    fn frame_delay(&self) -> std::time::Duration {
        self.inner().frame_delay()
    }

    fn backdrop(&self) -> &Backdrop {
        self.inner().backdrop()
    }

    fn figures(&self, state: &AnimationState) -> Vec<Figure> {
        self.inner().figures(state)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anim/acts.rs"]
mod tests;
