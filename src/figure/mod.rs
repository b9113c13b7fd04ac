//! Creature assemblers and the jointed limb they share.

/// Bird assembler.
pub mod bird;
/// Frog assembler.
pub mod frog;
/// Gait functions and tables.
pub mod gait;
/// Two-bone limb with a webbed foot.
pub mod limb;
/// Snail assembler.
pub mod snail;

use crate::surface::Surface;
use bird::BirdSpec;
use frog::FrogSpec;
use snail::SnailSpec;

/// One creature at one instant.
#[derive(Clone, Debug, PartialEq)]
pub enum Figure {
    /// Frog with its limbs.
    Frog(FrogSpec),
    /// One-legged bird.
    Bird(BirdSpec),
    /// Snail.
    Snail(SnailSpec),
}

impl Figure {
    /// Draw the creature onto `surface`.
    pub fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Self::Frog(f) => f.draw(surface),
            Self::Bird(b) => b.draw(surface),
            Self::Snail(s) => s.draw(surface),
        }
    }
}

impl From<FrogSpec> for Figure {
    fn from(f: FrogSpec) -> Self {
        Self::Frog(f)
    }
}

impl From<BirdSpec> for Figure {
    fn from(b: BirdSpec) -> Self {
        Self::Bird(b)
    }
}

impl From<SnailSpec> for Figure {
    fn from(s: SnailSpec) -> Self {
        Self::Snail(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/figure/assembly.rs"]
mod tests;
