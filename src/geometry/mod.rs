pub mod aabb;
pub mod oriented_box;
pub mod ray;
pub mod segment;

pub use aabb::Aabb;
pub use oriented_box::OrientedBox;
pub use ray::Ray;
pub use segment::LineSegment;
