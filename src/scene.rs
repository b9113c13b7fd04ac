//! Static background redrawn at the start of every frame.

use crate::color::Rgb;
use crate::foundation::core::{Point, Size};
use crate::surface::{ShapeStyle, Stroke, Surface, bbox};

/// A small cloud of overlapping puffs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cloud {
    /// Center of the first puff.
    pub origin: Point,
    /// Number of puffs laid out left to right.
    pub puffs: u32,
}

impl Cloud {
    /// Size of a single puff.
    pub const PUFF: Size = Size::new(40.0, 24.0);
    /// Horizontal distance between puff centers.
    pub const STEP: f64 = 18.0;

    /// Draw every puff; odd puffs ride a little higher.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let style = ShapeStyle::outlined(Rgb::WHITE, Stroke::new(Rgb::new(220, 220, 235), 1.0));
        for i in 0..self.puffs {
            let lift = if i % 2 == 1 { Self::PUFF.height * 0.3 } else { 0.0 };
            let cx = self.origin.x + Self::STEP * f64::from(i);
            let cy = self.origin.y - lift;
            surface.ellipse(
                bbox(
                    cx - Self::PUFF.width / 2.0,
                    cy - Self::PUFF.height / 2.0,
                    cx + Self::PUFF.width / 2.0,
                    cy + Self::PUFF.height / 2.0,
                ),
                style,
            );
        }
    }
}

/// Sky over water, plus an optional cloud.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Backdrop {
    /// Top band color.
    pub sky: Rgb,
    /// Bottom band color.
    pub water: Rgb,
    /// Decoration drawn over the sky.
    pub cloud: Option<Cloud>,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            sky: Rgb::new(0, 0, 255),
            water: Rgb::new(0, 200, 200),
            cloud: Some(Cloud {
                origin: Point::new(100.0, 20.0),
                puffs: 5,
            }),
        }
    }
}

impl Backdrop {
    /// Y coordinate where sky gives way to water: always a quarter of the surface height.
    pub fn horizon(extent: Size) -> f64 {
        extent.height / 4.0
    }

    /// Paint the whole surface. Acts as the per-frame clear.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let extent = surface.extent();
        let horizon = Self::horizon(extent);
        surface.rectangle(
            bbox(0.0, 0.0, extent.width, horizon),
            ShapeStyle::filled(self.sky),
        );
        surface.rectangle(
            bbox(0.0, horizon, extent.width, extent.height),
            ShapeStyle::filled(self.water),
        );
        if let Some(cloud) = &self.cloud {
            cloud.draw(surface);
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/scene/backdrop.rs"]
mod tests;
