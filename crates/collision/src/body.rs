use serde::{Deserialize, Serialize};

/// A colliding body, expressed in the unit system of the engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub mass: f64,   // Solar masses (or kg)
    pub radius: f64, // AU (or m)
}

impl Body {
    pub fn new(mass: f64, radius: f64) -> Self {
        Self { mass, radius }
    }

    /// Body with a mass but no radius yet.
    ///
    /// The radius is filled in later by
    /// [`CollisionEngine::body_radius`](crate::CollisionEngine::body_radius).
    pub fn from_mass(mass: f64) -> Self {
        Self { mass, radius: 0.0 }
    }

    /// Placeholder for a remnant that does not exist.
    pub fn empty() -> Self {
        Self {
            mass: 0.0,
            radius: 0.0,
        }
    }

    pub fn is_physical(&self) -> bool {
        self.mass.is_finite() && self.mass > 0.0 && self.radius.is_finite() && self.radius > 0.0
    }

    /// Body of the same bulk density with a different mass.
    pub fn with_mass(&self, mass: f64) -> Body {
        if mass <= 0.0 || self.mass <= 0.0 {
            return Body::empty();
        }
        Body {
            mass,
            radius: self.radius * (mass / self.mass).cbrt(),
        }
    }
}

/// Merge two bodies, conserving mass and volume.
///
/// For spheres of equal density: r = (r_a³ + r_b³)^(1/3)
///
/// # Examples
///
/// ```
/// use collision::body::{Body, merge_bodies};
///
/// let merged = merge_bodies(&Body::new(1.0, 1.0), &Body::new(1.0, 1.0));
/// assert_eq!(merged.mass, 2.0);
/// assert!((merged.radius - 2.0_f64.cbrt()).abs() < 1e-12);
/// ```
pub fn merge_bodies(a: &Body, b: &Body) -> Body {
    Body {
        mass: a.mass + b.mass,
        radius: (a.radius.powi(3) + b.radius.powi(3)).cbrt(),
    }
}
