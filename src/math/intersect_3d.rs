use crate::geometry::OrientedBox;

use super::{Point3, Vector3, TOLERANCE};

/// Parameter interval over which a line `origin + t * dir` is inside a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSpan {
    /// Parameter where the line enters the box.
    pub t_enter: f64,
    /// Parameter where the line leaves the box.
    pub t_exit: f64,
}

/// Intersects the infinite line `origin + t * dir` with an oriented box.
///
/// Uses the slab method on the box's local axes. Returns `None` when the
/// line misses the box or only grazes it (`t_enter == t_exit`). Negative
/// parameters are returned as-is; callers decide whether they lie behind
/// their ray origin.
#[must_use]
pub fn line_box_intersect(origin: &Point3, dir: &Vector3, body: &OrientedBox) -> Option<BoxSpan> {
    let to_center = body.center() - origin;
    let mut t_enter = f64::NEG_INFINITY;
    let mut t_exit = f64::INFINITY;

    for (axis, half) in body.axes().iter().zip(body.half_extents()) {
        let e = axis.dot(&to_center);
        let f = axis.dot(dir);

        if f.abs() < TOLERANCE {
            // Parallel to this slab: inside it everywhere or nowhere.
            if e.abs() > half {
                return None;
            }
            continue;
        }

        let mut t1 = (e + half) / f;
        let mut t2 = (e - half) / f;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }
        t_enter = t_enter.max(t1);
        t_exit = t_exit.min(t2);

        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit - t_enter < TOLERANCE {
        return None;
    }
    Some(BoxSpan { t_enter, t_exit })
}
