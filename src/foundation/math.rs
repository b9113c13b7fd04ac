use crate::foundation::core::{Point, Vec2};

/// Unit vector for an angle in degrees, counterclockwise from the positive x axis.
///
/// Screen y grows downward, so the sine term is negated.
pub(crate) fn heading(angle_deg: f64) -> Vec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Vec2::new(cos, -sin)
}

/// Point at `radius` from `origin` along `angle_deg`.
pub(crate) fn polar(origin: Point, radius: f64, angle_deg: f64) -> Point {
    origin + heading(angle_deg) * radius
}

/// Truncate toward zero and keep the low byte, the way a packed RGB channel stores an
/// out-of-range product.
pub(crate) fn truncate_wrap_u8(v: f64) -> u8 {
    (v.trunc() as i64) as u8
}

/// Reflect `p` across the vertical line `x = axis_x`.
pub(crate) fn mirror_x(p: Point, axis_x: f64) -> Point {
    Point::new(2.0 * axis_x - p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
