use crate::length::AU_KM;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Kilometers per second in one AU/day
pub const KM_SEC_PER_AU_DAY: f64 = AU_KM / SECONDS_PER_DAY;

/// Mutual escape velocity of two bodies at contact.
///
/// v_esc = sqrt(2 G (m_a + m_b) / (r_a + r_b)), with all inputs expressed in the
/// unit system of `g`.
///
/// # Examples
/// ```
/// use units::velocity::mutual_escape_velocity;
///
/// // G = 1, unit masses touching at unit separation
/// let v = mutual_escape_velocity(1.0, 0.5, 0.5, 0.5, 0.5);
/// assert_eq!(v, 2.0);
/// ```
pub fn mutual_escape_velocity(g: f64, mass_a: f64, mass_b: f64, radius_a: f64, radius_b: f64) -> f64 {
    (2.0 * g * (mass_a + mass_b) / (radius_a + radius_b)).sqrt()
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Velocity(f64); // Base unit: AU/day

impl Velocity {
    pub fn from_au_per_day(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value / KM_SEC_PER_AU_DAY)
    }

    pub fn to_au_per_day(&self) -> f64 {
        self.0
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0 * KM_SEC_PER_AU_DAY
    }
}
