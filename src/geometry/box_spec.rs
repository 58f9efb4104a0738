use super::{Aabb, PlanAxis};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A box primitive: edge lengths, center point and a yaw about the vertical
/// axis through the center.
///
/// This is plain data. Negative sizes are rejected only when a backend turns
/// the spec into a solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSpec {
    /// Edge lengths along the box's local x, y and z.
    pub size: Vector3,
    /// Center point.
    pub location: Point3,
    /// Rotation about the vertical axis, in radians.
    pub rotation_z: f64,
}

impl BoxSpec {
    /// Creates an unrotated box.
    #[must_use]
    pub fn new(size: Vector3, location: Point3) -> Self {
        Self {
            size,
            location,
            rotation_z: 0.0,
        }
    }

    /// Sets the yaw about the vertical axis (radians).
    #[must_use]
    pub fn with_rotation(mut self, rotation_z: f64) -> Self {
        self.rotation_z = rotation_z;
        self
    }

    /// Lower x bound.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.location.x - self.size.x / 2.0
    }

    /// Upper x bound.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.location.x + self.size.x / 2.0
    }

    /// Lower y bound. "Front" is an axis convention, not a view direction.
    #[must_use]
    pub fn front(&self) -> f64 {
        self.location.y - self.size.y / 2.0
    }

    /// Upper y bound.
    #[must_use]
    pub fn back(&self) -> f64 {
        self.location.y + self.size.y / 2.0
    }

    /// Lower z bound.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.location.z - self.size.z / 2.0
    }

    /// Upper z bound.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.location.z + self.size.z / 2.0
    }

    /// Lower bound along a plan axis (`left` or `front`).
    #[must_use]
    pub fn lower(&self, axis: PlanAxis) -> f64 {
        match axis {
            PlanAxis::Width => self.left(),
            PlanAxis::Depth => self.front(),
        }
    }

    /// Upper bound along a plan axis (`right` or `back`).
    #[must_use]
    pub fn upper(&self, axis: PlanAxis) -> f64 {
        match axis {
            PlanAxis::Width => self.right(),
            PlanAxis::Depth => self.back(),
        }
    }

    /// The same box moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3) -> Self {
        Self {
            location: self.location + offset,
            ..*self
        }
    }

    /// The same box enlarged by `margin` on every side.
    #[must_use]
    pub fn grown(&self, margin: f64) -> Self {
        Self {
            size: self.size.add_scalar(2.0 * margin),
            ..*self
        }
    }

    /// Expresses `point` in the box's local frame (origin at the center,
    /// axes aligned with the box edges).
    #[must_use]
    pub fn to_local(&self, point: &Point3) -> Point3 {
        let d = point - self.location;
        if self.rotation_z.abs() < TOLERANCE {
            return Point3::from(d);
        }
        let (s, c) = self.rotation_z.sin_cos();
        Point3::new(c * d.x + s * d.y, -s * d.x + c * d.y, d.z)
    }

    /// Returns `true` if `point` lies inside or on the box, within `tolerance`.
    #[must_use]
    pub fn contains(&self, point: &Point3, tolerance: f64) -> bool {
        let local = self.to_local(point);
        (0..3).all(|i| local[i].abs() <= self.size[i] / 2.0 + tolerance)
    }

    /// Returns `true` if `point` lies inside the box and farther than
    /// `tolerance` from every face.
    #[must_use]
    pub fn contains_strictly(&self, point: &Point3, tolerance: f64) -> bool {
        let local = self.to_local(point);
        (0..3).all(|i| local[i].abs() < self.size[i] / 2.0 - tolerance)
    }

    /// Axis-aligned bounds, accounting for rotation.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        let half = self.size / 2.0;
        let (s, c) = self.rotation_z.sin_cos();
        let hx = (c * half.x).abs() + (s * half.y).abs();
        let hy = (s * half.x).abs() + (c * half.y).abs();
        let extent = Vector3::new(hx, hy, half.z);
        Aabb::new(self.location - extent, self.location + extent)
    }
}
