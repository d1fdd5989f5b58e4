//! Perspective tilt for cards under the pointer.

pub const MAX_TILT_DEG: f64 = 15.0;
pub const PERSPECTIVE_PX: f64 = 1000.0;

/// Rotation angles (rotate_x, rotate_y) in degrees for a pointer at
/// (x, y) within a card of the given size. The card tips away from the
/// pointer, proportional to its offset from the center. Degenerate sizes
/// produce a flat card.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let rotate_y = -((x - width / 2.0) / width) * MAX_TILT_DEG;
    let rotate_x = ((y - height / 2.0) / height) * MAX_TILT_DEG;
    (rotate_x, rotate_y)
}

pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let (rotate_x, rotate_y) = tilt_angles(x, y, width, height);
    // + 0.0 folds a negative zero so a centered pointer reads 0.00deg.
    format!(
        "perspective({PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg)",
        rotate_x + 0.0,
        rotate_y + 0.0
    )
}

pub fn flat_transform() -> String {
    format!("perspective({PERSPECTIVE_PX}px) rotateX(0) rotateY(0)")
}
