//! Shared types used throughout the library.

mod direction;
mod transform;

pub use direction::{Axis, Direction};
pub use transform::{dominant_axis, rotated_axis_count, ElementRotation};

/// A 3-component vector in model coordinates (16 units per block).
pub type Vec3 = [f64; 3];

/// A UV rectangle `[u1, v1, u2, v2]`.
pub type UvBox = [f64; 4];

/// Check if every component of a vector is zero.
pub fn is_zero(v: &Vec3) -> bool {
    v.iter().all(|c| *c == 0.0)
}

/// An axis-aligned box given by two corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub from: Vec3,
    pub to: Vec3,
}

impl BoundingBox {
    pub fn new(from: Vec3, to: Vec3) -> Self {
        Self { from, to }
    }

    /// Grow the box by `amount` on every side. Negative amounts shrink it.
    pub fn inflated(self, amount: f64) -> Self {
        if amount == 0.0 {
            return self;
        }
        let mut from = self.from;
        let mut to = self.to;
        for i in 0..3 {
            from[i] -= amount;
            to[i] += amount;
        }
        Self { from, to }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflate_is_symmetric() {
        let b = BoundingBox::new([0.0, 0.0, 0.0], [16.0, 8.0, 4.0]).inflated(0.5);
        assert_eq!(b.from, [-0.5, -0.5, -0.5]);
        assert_eq!(b.to, [16.5, 8.5, 4.5]);
    }

    #[test]
    fn test_negative_inflate_shrinks() {
        let b = BoundingBox::new([2.0, 2.0, 2.0], [6.0, 6.0, 6.0]).inflated(-1.0);
        assert_eq!(b.from, [3.0, 3.0, 3.0]);
        assert_eq!(b.to, [5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_is_zero() {
        assert!(is_zero(&[0.0, 0.0, 0.0]));
        assert!(!is_zero(&[0.0, -0.1, 0.0]));
    }
}
