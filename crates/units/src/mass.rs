use serde::{Deserialize, Serialize};

/// Heliocentric gravitational parameter GM☉ in cm³ s⁻²
pub const GM_SUN_CGS: f64 = 1.3271244e26;

/// Geocentric gravitational parameter GM⊕ in cm³ s⁻²
pub const GM_EARTH_CGS: f64 = 3.986004e20;

/// Jovian gravitational parameter GM♃ in cm³ s⁻²
pub const GM_JUPITER_CGS: f64 = 1.2668653e23;

/// Newtonian constant of gravitation in cm³ g⁻¹ s⁻²
pub const G_CGS: f64 = 6.67408e-8;

/// Mass of the Sun in kilograms, derived from GM☉ and G
pub const SOLAR_MASS_KG: f64 = GM_SUN_CGS / G_CGS / 1.0e3;

/// Number of Earth masses in one solar mass (GM☉ / GM⊕)
pub const EARTH_MASSES_PER_SOLAR_MASS: f64 = GM_SUN_CGS / GM_EARTH_CGS;

/// Number of Jupiter masses in one solar mass (GM☉ / GM♃)
pub const JUPITER_MASSES_PER_SOLAR_MASS: f64 = GM_SUN_CGS / GM_JUPITER_CGS;

/// Mass of the Moon in kilograms
pub const MOON_MASS_KG: f64 = 7.342e22;

/// Mass of Mars in kilograms
pub const MARS_MASS_KG: f64 = 6.4171e23;

/// A physical mass quantity using f64 precision.
///
/// The `Mass` struct stores values in solar masses, the canonical mass unit
/// handed to the collision engine. Planetary units are defined through the
/// ratio of gravitational parameters, which are known far more precisely than
/// the masses themselves.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let earth = Mass::from_earth_masses(1.0);
/// let moon = Mass::from_moon_masses(1.0);
///
/// assert!(moon < earth);
/// assert!((earth.to_earth_masses() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in kilograms.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::{Mass, SOLAR_MASS_KG};
    ///
    /// let sun = Mass::from_kg(SOLAR_MASS_KG);
    /// assert_eq!(sun.to_solar_masses(), 1.0);
    /// ```
    pub fn from_kg(value: f64) -> Self {
        Self(value / SOLAR_MASS_KG)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value / EARTH_MASSES_PER_SOLAR_MASS)
    }

    /// Creates a new `Mass` from a value in Jupiter masses.
    pub fn from_jupiter_masses(value: f64) -> Self {
        Self(value / JUPITER_MASSES_PER_SOLAR_MASS)
    }

    /// Creates a new `Mass` from a value in lunar masses.
    pub fn from_moon_masses(value: f64) -> Self {
        Self(value * MOON_MASS_KG / SOLAR_MASS_KG)
    }

    /// Creates a new `Mass` from a value in Mars masses.
    pub fn from_mars_masses(value: f64) -> Self {
        Self(value * MARS_MASS_KG / SOLAR_MASS_KG)
    }

    /// Returns the mass value in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    pub fn to_kg(&self) -> f64 {
        self.0 * SOLAR_MASS_KG
    }

    /// Converts the mass to Earth masses.
    pub fn to_earth_masses(&self) -> f64 {
        self.0 * EARTH_MASSES_PER_SOLAR_MASS
    }
}
