//! 2D vector math
//!
//! Positions and velocities are `glam::DVec2`. Addition, subtraction and
//! scalar multiplication come from glam's operators; the extension trait
//! adds the two helpers whose zero-length behavior the simulation relies on.

pub use glam::DVec2 as Vector2;

pub trait Vector2Ext {
    /// Euclidean length, `sqrt(x² + y²)`
    fn magnitude(self) -> f64;

    /// Unit vector in the same direction; a zero vector is returned unchanged
    fn normalized(self) -> Self;
}

impl Vector2Ext for Vector2 {
    #[inline]
    fn magnitude(self) -> f64 {
        self.length()
    }

    #[inline]
    fn normalized(self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 { self / mag } else { self }
    }
}
