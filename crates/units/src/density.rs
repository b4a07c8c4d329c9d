use std::f64::consts::PI;

use crate::length::{AU_M, Length};
use crate::mass::Mass;

/// Volume density in g/cm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Density(pub f64);

impl Density {
    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value)
    }

    pub fn from_kg_per_m3(value: f64) -> Self {
        Self(value / 1.0e3)
    }

    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0
    }

    pub fn to_kg_per_m3(&self) -> f64 {
        self.0 * 1.0e3
    }

    /// Returns true for strictly positive, finite densities.
    pub fn is_physical(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

/// Radius of a homogeneous sphere of the given mass and density.
///
/// R = (3 M / (4 π ρ))^(1/3), evaluated in SI and returned in AU.
///
/// # Examples
///
/// ```rust
/// use units::{Density, Mass, sphere_radius};
///
/// let earth = sphere_radius(Mass::from_earth_masses(1.0), Density::from_grams_per_cm3(5.51));
/// assert!((earth.to_km() - 6371.0).abs() < 10.0);
/// ```
pub fn sphere_radius(mass: Mass, density: Density) -> Length {
    let radius_m = (3.0 / 4.0 / PI * mass.to_kg() / density.to_kg_per_m3()).powf(1.0 / 3.0);
    Length::from_au(radius_m / AU_M)
}
