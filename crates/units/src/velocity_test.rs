mod tests {
    use approx::assert_relative_eq;

    use crate::velocity::{KM_SEC_PER_AU_DAY, Velocity, mutual_escape_velocity};

    #[test]
    fn test_velocity_conversions() {
        let one = Velocity::from_au_per_day(1.0);
        assert_relative_eq!(one.to_km_per_sec(), KM_SEC_PER_AU_DAY);

        // 1 AU/day is ~1731.5 km/s
        assert_relative_eq!(KM_SEC_PER_AU_DAY, 1731.456, max_relative = 1e-6);

        assert_eq!(
            Velocity::from_km_per_sec(10.0).to_au_per_day(),
            10.0 / KM_SEC_PER_AU_DAY
        );

        let original = 11.2;
        let round_trip = Velocity::from_km_per_sec(original).to_km_per_sec();
        assert_relative_eq!(round_trip, original);
    }

    #[test]
    fn test_mutual_escape_velocity() {
        // Earth alone: ~11.19 km/s in SI
        let v = mutual_escape_velocity(6.674e-11, 5.972e24, 0.0, 6.371e6, 0.0);
        assert_relative_eq!(v, 11_186.0, max_relative = 1e-3);

        // Doubling the total mass at the same separation scales by sqrt(2)
        let v1 = mutual_escape_velocity(1.0, 1.0, 1.0, 1.0, 1.0);
        let v2 = mutual_escape_velocity(1.0, 2.0, 2.0, 1.0, 1.0);
        assert_relative_eq!(v2 / v1, 2.0_f64.sqrt());
    }
}
