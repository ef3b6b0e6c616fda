pub mod intersect_3d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Allowed deviation of a direction's norm from 1 before it is renormalized.
pub const UNIT_TOLERANCE: f64 = 1e-9;

/// Returns `direction` unchanged when it is already unit length, otherwise
/// its normalized form. `None` for a zero-length vector.
#[must_use]
pub fn unit_direction(direction: &Vector3) -> Option<Vector3> {
    let len = direction.norm();
    if len < TOLERANCE {
        None
    } else if (len - 1.0).abs() <= UNIT_TOLERANCE {
        Some(*direction)
    } else {
        Some(direction / len)
    }
}
