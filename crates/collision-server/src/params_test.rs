use approx::assert_relative_eq;
use collision::CollisionModel;
use serde_json::{Value, json};
use units::{Length, Mass, Velocity};

use crate::params::*;
use crate::query::QueryParams;

fn query(pairs: &[(&str, &str)]) -> QueryParams {
    pairs.iter().copied().collect()
}

const SINGLE: [Item; 5] = [Item::Model, Item::Target, Item::Impactor, Item::Velocity, Item::Angle];

fn single_request() -> Vec<(&'static str, &'static str)> {
    vec![
        ("model", "ls2012"),
        ("mtar_value", "1"),
        ("mtar_unit", "earth"),
        ("rtar_type", "rad"),
        ("rtar_value", "1"),
        ("rtar_unit", "earth"),
        ("mimp_value", "0.5"),
        ("mimp_unit", "target"),
        ("rimp_type", "dens"),
        ("dimp_value", "5.5"),
        ("dimp_unit", "cgs"),
        ("vel_value", "20"),
        ("vel_unit", "kms"),
        ("angle_value", "45"),
    ]
}

#[test]
fn test_accepts_complete_request() {
    let resolved = retrieve_params(&query(&single_request()), &SINGLE).unwrap();

    let earth = Mass::from_earth_masses(1.0).to_solar_masses();
    assert_eq!(resolved.model, Some(CollisionModel::Ls2012));

    let target = resolved.target.unwrap();
    assert_relative_eq!(target.mass, earth);
    assert_eq!(target.size, BodySize::Radius(Length::from_earth_radii(1.0).to_au()));

    let impactor = resolved.impactor.unwrap();
    assert_relative_eq!(impactor.mass, 0.5 * earth);
    let BodySize::Radius(radius) = impactor.size else {
        panic!("expected a density-derived radius");
    };
    // Half an Earth mass at 5.5 g/cm³ is about 0.8 Earth radii
    assert_relative_eq!(Length::from_au(radius).to_earth_radii(), 0.794, max_relative = 5e-3);

    let ImpactVelocity::Absolute(v) = resolved.velocity.unwrap() else {
        panic!("expected an absolute velocity");
    };
    assert_relative_eq!(Velocity::from_au_per_day(v).to_km_per_sec(), 20.0, max_relative = 1e-12);
    assert_eq!(resolved.angle, Some(45.0));

    assert_eq!(resolved.echo.len(), 18);
    assert_eq!(resolved.echo["model"], json!("ls2012"));
    assert_eq!(resolved.echo["mimp_unit"], json!("target"));
    assert_eq!(resolved.echo["rimp_type"], json!("dens"));
    assert_eq!(resolved.echo["rimp_value"], Value::Null);
}

#[test]
fn test_rejection_reports_all_fields() {
    let mut request = single_request();
    request.retain(|(key, _)| *key != "mtar_unit");
    request.push(("angle_value", "10"));
    request.retain(|(key, value)| !(*key == "angle_value" && *value == "45"));
    request.push(("vel_unit", "mph"));
    request.retain(|(key, value)| !(*key == "vel_unit" && *value == "kms"));

    let rejected = retrieve_params(&query(&request), &SINGLE).unwrap_err();

    assert_eq!(rejected.echo.len(), 18);
    assert_eq!(rejected.echo["mtar_value"], json!(1.0));
    assert_eq!(rejected.echo["mtar_unit"], Value::Null);
    assert_eq!(rejected.echo["vel_value"], json!(20.0));
    assert_eq!(rejected.echo["vel_unit"], Value::Null);
    assert_eq!(rejected.echo["angle_value"], json!(10.0));
}

#[test]
fn test_body_mass_units() {
    let cases = [
        ("kg", Mass::from_kg(2.0e24)),
        ("earth", Mass::from_earth_masses(2.0e24)),
        ("jupiter", Mass::from_jupiter_masses(2.0e24)),
        ("mars", Mass::from_mars_masses(2.0e24)),
        ("moon", Mass::from_moon_masses(2.0e24)),
    ];
    for (unit, expected) in cases {
        let mut echo = Echo::new();
        let q = query(&[("mtar_value", "2e24"), ("mtar_unit", unit)]);
        let mass = retrieve_body_mass(&q, Role::Target, None, &mut echo);
        assert_eq!(mass, Some(expected.to_solar_masses()), "unit {unit}");
        assert_eq!(echo["mtar_unit"], json!(unit));
    }
}

#[test]
fn test_target_unit_is_impactor_only() {
    let mut echo = Echo::new();
    let q = query(&[("mtar_value", "1"), ("mtar_unit", "target")]);
    assert_eq!(retrieve_body_mass(&q, Role::Target, None, &mut echo), None);
    assert_eq!(echo["mtar_value"], json!(1.0));
    assert_eq!(echo["mtar_unit"], Value::Null);

    let mut echo = Echo::new();
    let q = query(&[("mimp_value", "0.25"), ("mimp_unit", "target")]);
    assert_eq!(retrieve_body_mass(&q, Role::Impactor, Some(2.0), &mut echo), Some(0.5));

    // No resolved target to scale
    let mut echo = Echo::new();
    assert_eq!(retrieve_body_mass(&q, Role::Impactor, None, &mut echo), None);
    assert_eq!(echo["mimp_value"], json!(0.25));
}

#[test]
fn test_invalid_masses_null_the_value() {
    let mut echo = Echo::new();
    let q = query(&[("mtar_value", "-1"), ("mtar_unit", "earth")]);
    assert_eq!(retrieve_body_mass(&q, Role::Target, None, &mut echo), None);
    assert_eq!(echo["mtar_value"], Value::Null);
    assert_eq!(echo["mtar_unit"], json!("earth"));

    let mut echo = Echo::new();
    let q = query(&[("mimp_value", "1.5"), ("mimp_unit", "target")]);
    assert_eq!(retrieve_body_mass(&q, Role::Impactor, Some(1.0), &mut echo), None);
    assert_eq!(echo["mimp_value"], Value::Null);

    let mut echo = Echo::new();
    let q = query(&[("mimp_value", "abc"), ("mimp_unit", "earth")]);
    assert_eq!(retrieve_body_mass(&q, Role::Impactor, Some(1.0), &mut echo), None);
    assert_eq!(echo["mimp_value"], Value::Null);
}

#[test]
fn test_c2019_forces_model_radius() {
    let mut echo = Echo::new();
    let q = query(&[("rtar_type", "rad"), ("rtar_value", "1"), ("rtar_unit", "km")]);
    let size = retrieve_body_size(&q, Role::Target, Some(1.0e-6), Some(CollisionModel::C2019), &mut echo);

    assert_eq!(size, Some(BodySize::ModelDerived));
    assert_eq!(echo["rtar_type"], json!("e2020"));
    assert_eq!(echo["rtar_value"], json!(1.0));
    assert_eq!(echo.len(), 5);
}

#[test]
fn test_radius_units() {
    let cases = [
        ("m", Length::from_meters(3.0)),
        ("km", Length::from_km(3.0)),
        ("moon", Length::from_moon_radii(3.0)),
        ("mars", Length::from_mars_radii(3.0)),
        ("earth", Length::from_earth_radii(3.0)),
        ("jupiter", Length::from_jupiter_radii(3.0)),
    ];
    for (unit, expected) in cases {
        let mut echo = Echo::new();
        let q = query(&[("rimp_type", "rad"), ("rimp_value", "3"), ("rimp_unit", unit)]);
        let size = retrieve_body_size(&q, Role::Impactor, Some(1.0e-6), None, &mut echo);
        assert_eq!(size, Some(BodySize::Radius(expected.to_au())), "unit {unit}");
    }
}

#[test]
fn test_invalid_radius() {
    let mut echo = Echo::new();
    let q = query(&[("rtar_type", "rad"), ("rtar_value", "0"), ("rtar_unit", "km")]);
    assert_eq!(retrieve_body_size(&q, Role::Target, Some(1.0e-6), None, &mut echo), None);
    assert_eq!(echo["rtar_value"], Value::Null);
    assert_eq!(echo["rtar_unit"], json!("km"));

    let mut echo = Echo::new();
    let q = query(&[("rtar_type", "rad"), ("rtar_value", "2"), ("rtar_unit", "furlong")]);
    assert_eq!(retrieve_body_size(&q, Role::Target, Some(1.0e-6), None, &mut echo), None);
    assert_eq!(echo["rtar_value"], json!(2.0));
    assert_eq!(echo["rtar_unit"], Value::Null);

    let mut echo = Echo::new();
    let q = query(&[("rtar_type", "size"), ("rtar_value", "2"), ("rtar_unit", "km")]);
    assert_eq!(retrieve_body_size(&q, Role::Target, Some(1.0e-6), None, &mut echo), None);
    assert_eq!(echo["rtar_type"], Value::Null);
}

#[test]
fn test_density_radius() {
    let earth = Mass::from_earth_masses(1.0).to_solar_masses();

    let mut echo = Echo::new();
    let q = query(&[("rtar_type", "dens"), ("dtar_value", "1"), ("dtar_unit", "cgs")]);
    let Some(BodySize::Radius(radius)) = retrieve_body_size(&q, Role::Target, Some(earth), None, &mut echo) else {
        panic!("expected a radius");
    };
    assert_relative_eq!(radius, 7.523625311879015e-05, max_relative = 1e-12);

    // 1000 kg/m³ is 1 g/cm³
    let mut echo = Echo::new();
    let q = query(&[("rtar_type", "dens"), ("dtar_value", "1000"), ("dtar_unit", "si")]);
    let size = retrieve_body_size(&q, Role::Target, Some(earth), None, &mut echo);
    let Some(BodySize::Radius(si_radius)) = size else {
        panic!("expected a radius");
    };
    assert_relative_eq!(si_radius, radius, max_relative = 1e-12);

    let mut echo = Echo::new();
    let q = query(&[("rtar_type", "dens"), ("dtar_value", "-3"), ("dtar_unit", "cgs")]);
    assert_eq!(retrieve_body_size(&q, Role::Target, Some(earth), None, &mut echo), None);
    assert_eq!(echo["dtar_value"], Value::Null);

    // Radius cannot be derived without a mass
    let mut echo = Echo::new();
    let q = query(&[("rtar_type", "dens"), ("dtar_value", "1"), ("dtar_unit", "cgs")]);
    assert_eq!(retrieve_body_size(&q, Role::Target, None, None, &mut echo), None);
    assert_eq!(echo["dtar_value"], json!(1.0));
}

#[test]
fn test_velocity_and_angle() {
    let items = [Item::Velocity, Item::Angle];

    let resolved = retrieve_params(
        &query(&[("vel_value", "2"), ("vel_unit", "escape"), ("angle_value", "0")]),
        &items,
    )
    .unwrap();
    assert_eq!(resolved.velocity, Some(ImpactVelocity::EscapeMultiple(2.0)));
    assert_eq!(resolved.angle, Some(0.0));
    assert_eq!(resolved.target, None);

    let resolved = retrieve_params(
        &query(&[("vel_value", "1"), ("vel_unit", "escape"), ("angle_value", "90")]),
        &items,
    )
    .unwrap();
    assert_eq!(resolved.angle, Some(90.0));

    let rejected = retrieve_params(
        &query(&[("vel_value", "0"), ("vel_unit", "kms"), ("angle_value", "90.5")]),
        &items,
    )
    .unwrap_err();
    assert_eq!(rejected.echo["vel_value"], Value::Null);
    assert_eq!(rejected.echo["vel_unit"], json!("kms"));
    assert_eq!(rejected.echo["angle_value"], Value::Null);
}

#[test]
fn test_invalid_model() {
    let rejected = retrieve_params(&query(&[("model", "newton")]), &[Item::Model]).unwrap_err();
    assert_eq!(rejected.echo["model"], Value::Null);

    let resolved = retrieve_params(&query(&[("model", "merge")]), &[Item::Model]).unwrap();
    assert_eq!(resolved.model, Some(CollisionModel::PerfectMerge));
}
