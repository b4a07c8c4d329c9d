use serde::{Deserialize, Serialize};

/// Astronomical unit in meters (IAU 2012)
pub const AU_M: f64 = 1.495978707e11;
pub const AU_CM: f64 = 1.495978707e13;
pub const AU_KM: f64 = 1.495978707e8;

pub const EARTH_EQUATORIAL_RADIUS_CM: f64 = 6.3781e8;
pub const EARTH_POLAR_RADIUS_CM: f64 = 6.3568e8;
pub const JUPITER_EQUATORIAL_RADIUS_CM: f64 = 7.1492e9;
pub const JUPITER_POLAR_RADIUS_CM: f64 = 6.6854e9;

/// Mean lunar radius in meters
pub const MOON_RADIUS_M: f64 = 1.7371e6;
/// Mean Martian radius in meters
pub const MARS_RADIUS_M: f64 = 3.396e6;

/// Volumetric mean radius of an oblate spheroid, (a² c)^(1/3)
fn volumetric_mean_radius(equatorial: f64, polar: f64) -> f64 {
    (equatorial.powi(2) * polar).powf(1.0 / 3.0)
}

/// Number of Earth radii (volumetric mean) in one AU.
pub fn au_in_earth_radii() -> f64 {
    AU_CM / volumetric_mean_radius(EARTH_EQUATORIAL_RADIUS_CM, EARTH_POLAR_RADIUS_CM)
}

/// Number of Jupiter radii (volumetric mean) in one AU.
pub fn au_in_jupiter_radii() -> f64 {
    AU_CM / volumetric_mean_radius(JUPITER_EQUATORIAL_RADIUS_CM, JUPITER_POLAR_RADIUS_CM)
}

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with astronomical units (AU) as
/// the base unit, which is what the collision engine works in. Planetary radii
/// use volumetric mean radii derived from the equatorial and polar values.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let earth = Length::from_earth_radii(1.0);
/// let mars = Length::from_mars_radii(1.0);
///
/// assert!(mars < earth);
/// assert!((earth.to_km() - 6371.0).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value / AU_M)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value * 1.0e3 / AU_M)
    }

    /// Creates a new `Length` from a value in lunar radii.
    pub fn from_moon_radii(value: f64) -> Self {
        Self(value * MOON_RADIUS_M / AU_M)
    }

    /// Creates a new `Length` from a value in Martian radii.
    pub fn from_mars_radii(value: f64) -> Self {
        Self(value * MARS_RADIUS_M / AU_M)
    }

    /// Creates a new `Length` from a value in Earth radii.
    pub fn from_earth_radii(value: f64) -> Self {
        Self(value / au_in_earth_radii())
    }

    /// Creates a new `Length` from a value in Jupiter radii.
    pub fn from_jupiter_radii(value: f64) -> Self {
        Self(value / au_in_jupiter_radii())
    }

    /// Returns the length in astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0
    }

    /// Converts the length to meters.
    pub fn to_meters(&self) -> f64 {
        self.0 * AU_M
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 * AU_KM
    }

    /// Converts the length to Earth radii.
    pub fn to_earth_radii(&self) -> f64 {
        self.0 * au_in_earth_radii()
    }
}
