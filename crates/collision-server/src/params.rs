//! Request parameter validation and unit conversion.
//!
//! Every field is parsed into canonical units (M☉, AU, AU/day, degrees) and
//! echoed back to the caller. A request is accepted only when every requested
//! quantity resolved; otherwise the echo is returned with the offending fields
//! set to `null`.

use collision::CollisionModel;
use serde_json::{Map, Value};
use units::{Density, Length, Mass, Velocity, sphere_radius};

use crate::model::ModelSelector;
use crate::query::QueryParams;

/// Raw and converted request values returned to the caller.
pub type Echo = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Target,
    Impactor,
}

impl Role {
    pub fn prefix(&self) -> &'static str {
        match self {
            Role::Target => "tar",
            Role::Impactor => "imp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassUnit {
    Kg,
    Earth,
    Jupiter,
    Mars,
    Moon,
    /// Multiple of the target mass, impactor only
    Target,
}

impl MassUnit {
    pub const BODY_NAMES: [&'static str; 5] = ["jupiter", "earth", "mars", "moon", "kg"];
    pub const IMPACTOR_NAMES: [&'static str; 6] = ["target", "jupiter", "earth", "mars", "moon", "kg"];

    pub fn allowed(role: Role) -> &'static [&'static str] {
        match role {
            Role::Target => &Self::BODY_NAMES,
            Role::Impactor => &Self::IMPACTOR_NAMES,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "kg" => Some(MassUnit::Kg),
            "earth" => Some(MassUnit::Earth),
            "jupiter" => Some(MassUnit::Jupiter),
            "mars" => Some(MassUnit::Mars),
            "moon" => Some(MassUnit::Moon),
            "target" => Some(MassUnit::Target),
            _ => None,
        }
    }

    /// Converts `value` to solar masses. `Target` needs the resolved target mass.
    pub fn to_solar_masses(&self, value: f64, target: Option<f64>) -> Option<f64> {
        let mass = match self {
            MassUnit::Kg => Mass::from_kg(value),
            MassUnit::Earth => Mass::from_earth_masses(value),
            MassUnit::Jupiter => Mass::from_jupiter_masses(value),
            MassUnit::Mars => Mass::from_mars_masses(value),
            MassUnit::Moon => Mass::from_moon_masses(value),
            MassUnit::Target => Mass::from_solar_masses(value * target?),
        };
        Some(mass.to_solar_masses())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeType {
    Radius,
    Density,
    ModelDerived,
}

impl SizeType {
    pub const NAMES: [&'static str; 3] = ["rad", "dens", "e2020"];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "rad" => Some(SizeType::Radius),
            "dens" => Some(SizeType::Density),
            "e2020" => Some(SizeType::ModelDerived),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SizeType::Radius => "rad",
            SizeType::Density => "dens",
            SizeType::ModelDerived => "e2020",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusUnit {
    M,
    Km,
    Moon,
    Mars,
    Earth,
    Jupiter,
}

impl RadiusUnit {
    pub const NAMES: [&'static str; 6] = ["m", "km", "moon", "mars", "earth", "jupiter"];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "m" => Some(RadiusUnit::M),
            "km" => Some(RadiusUnit::Km),
            "moon" => Some(RadiusUnit::Moon),
            "mars" => Some(RadiusUnit::Mars),
            "earth" => Some(RadiusUnit::Earth),
            "jupiter" => Some(RadiusUnit::Jupiter),
            _ => None,
        }
    }

    pub fn to_length(&self, value: f64) -> Length {
        match self {
            RadiusUnit::M => Length::from_meters(value),
            RadiusUnit::Km => Length::from_km(value),
            RadiusUnit::Moon => Length::from_moon_radii(value),
            RadiusUnit::Mars => Length::from_mars_radii(value),
            RadiusUnit::Earth => Length::from_earth_radii(value),
            RadiusUnit::Jupiter => Length::from_jupiter_radii(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityUnit {
    /// g/cm³
    Cgs,
    /// kg/m³
    Si,
}

impl DensityUnit {
    pub const NAMES: [&'static str; 2] = ["cgs", "si"];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "cgs" => Some(DensityUnit::Cgs),
            "si" => Some(DensityUnit::Si),
            _ => None,
        }
    }

    pub fn to_density(&self, value: f64) -> Density {
        match self {
            DensityUnit::Cgs => Density::from_grams_per_cm3(value),
            DensityUnit::Si => Density::from_kg_per_m3(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityUnit {
    Escape,
    Kms,
}

impl VelocityUnit {
    pub const NAMES: [&'static str; 2] = ["escape", "kms"];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "escape" => Some(VelocityUnit::Escape),
            "kms" => Some(VelocityUnit::Kms),
            _ => None,
        }
    }
}

/// Impact velocity, either absolute or relative to the mutual escape velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImpactVelocity {
    /// AU/day
    Absolute(f64),
    /// Multiple of the mutual escape velocity, resolved once the bodies exist
    EscapeMultiple(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodySize {
    /// Radius in AU
    Radius(f64),
    /// Equilibrium radius computed by the engine from the mass
    ModelDerived,
}

/// Validated mass and size of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyParams {
    /// Solar masses
    pub mass: f64,
    pub size: BodySize,
}

/// Quantities a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Model,
    Target,
    Impactor,
    Velocity,
    Angle,
}

/// Accepted parameters. A field is `Some` exactly when its item was requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub model: Option<CollisionModel>,
    pub target: Option<BodyParams>,
    pub impactor: Option<BodyParams>,
    pub velocity: Option<ImpactVelocity>,
    /// Degrees
    pub angle: Option<f64>,
    pub echo: Echo,
}

/// Rejected parameters, with invalid fields echoed as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejected {
    pub echo: Echo,
}

fn number(value: Option<f64>) -> Value {
    value.map_or(Value::Null, Value::from)
}

fn text(value: Option<&str>) -> Value {
    value.map_or(Value::Null, Value::from)
}

/// Resolves the mass of a body in solar masses.
///
/// For the impactor, `target` is the resolved target mass: it enables the
/// `target` unit and caps the impactor mass.
pub fn retrieve_body_mass(
    query: &QueryParams,
    role: Role,
    target: Option<f64>,
    echo: &mut Echo,
) -> Option<f64> {
    let value_key = format!("m{}_value", role.prefix());
    let unit_key = format!("m{}_unit", role.prefix());

    let mut value = query.parse_float(&value_key);
    let unit = query.parse_choice(&unit_key, MassUnit::allowed(role));

    let mut mass = match (value, unit.and_then(MassUnit::parse)) {
        (Some(value), Some(unit)) => unit.to_solar_masses(value, target),
        _ => None,
    };

    if let Some(m) = mass {
        let heavier_than_target = role == Role::Impactor && target.is_some_and(|t| m > t);
        if m <= 0.0 || heavier_than_target {
            mass = None;
            value = None;
        }
    }

    echo.insert(value_key, number(value));
    echo.insert(unit_key, text(unit));
    mass
}

/// Resolves the size of a body of `mass` solar masses.
///
/// Requesting the C2019 model forces the model-derived radius.
pub fn retrieve_body_size(
    query: &QueryParams,
    role: Role,
    mass: Option<f64>,
    model: Option<CollisionModel>,
    echo: &mut Echo,
) -> Option<BodySize> {
    let prefix = role.prefix();
    let type_key = format!("r{prefix}_type");
    let radius_value_key = format!("r{prefix}_value");
    let radius_unit_key = format!("r{prefix}_unit");
    let density_value_key = format!("d{prefix}_value");
    let density_unit_key = format!("d{prefix}_unit");

    let mut size_type = query
        .parse_choice(&type_key, &SizeType::NAMES)
        .and_then(SizeType::parse);
    let mut radius_value = query.parse_float(&radius_value_key);
    let radius_unit = query.parse_choice(&radius_unit_key, &RadiusUnit::NAMES);
    let mut density_value = query.parse_float(&density_value_key);
    let density_unit = query.parse_choice(&density_unit_key, &DensityUnit::NAMES);

    if model == Some(CollisionModel::C2019) {
        size_type = Some(SizeType::ModelDerived);
    }

    let size = match size_type {
        Some(SizeType::ModelDerived) => Some(BodySize::ModelDerived),
        Some(SizeType::Radius) => {
            let radius = match (radius_value, radius_unit.and_then(RadiusUnit::parse)) {
                (Some(value), Some(unit)) => Some(unit.to_length(value).to_au()),
                _ => None,
            };
            match radius {
                Some(r) if r <= 0.0 => {
                    radius_value = None;
                    None
                }
                r => r.map(BodySize::Radius),
            }
        }
        Some(SizeType::Density) => {
            let density = match (density_value, density_unit.and_then(DensityUnit::parse)) {
                (Some(value), Some(unit)) => Some(unit.to_density(value)),
                _ => None,
            };
            let density = match density {
                Some(d) if !d.is_physical() => {
                    density_value = None;
                    None
                }
                d => d,
            };
            match (mass, density) {
                (Some(m), Some(d)) => {
                    Some(BodySize::Radius(sphere_radius(Mass::from_solar_masses(m), d).to_au()))
                }
                _ => None,
            }
        }
        None => None,
    };

    echo.insert(type_key, text(size_type.map(|t| t.name())));
    echo.insert(radius_value_key, number(radius_value));
    echo.insert(radius_unit_key, text(radius_unit));
    echo.insert(density_value_key, number(density_value));
    echo.insert(density_unit_key, text(density_unit));
    size
}

fn retrieve_velocity(query: &QueryParams, echo: &mut Echo) -> Option<ImpactVelocity> {
    let mut value = query.parse_float("vel_value");
    let unit = query.parse_choice("vel_unit", &VelocityUnit::NAMES);

    let mut velocity = match (value, unit.and_then(VelocityUnit::parse)) {
        (Some(v), Some(VelocityUnit::Escape)) => Some(ImpactVelocity::EscapeMultiple(v)),
        (Some(v), Some(VelocityUnit::Kms)) => {
            Some(ImpactVelocity::Absolute(Velocity::from_km_per_sec(v).to_au_per_day()))
        }
        _ => None,
    };

    if value.is_some_and(|v| v <= 0.0) && velocity.is_some() {
        velocity = None;
        value = None;
    }

    echo.insert("vel_value".to_string(), number(value));
    echo.insert("vel_unit".to_string(), text(unit));
    velocity
}

fn retrieve_angle(query: &QueryParams, echo: &mut Echo) -> Option<f64> {
    let angle = query
        .parse_float("angle_value")
        .filter(|a| (0.0..=90.0).contains(a));
    echo.insert("angle_value".to_string(), number(angle));
    angle
}

/// Validates the requested `items` in one pass.
///
/// Fields are resolved in dependency order: model, target mass, impactor mass,
/// target size, impactor size, velocity, angle. Every field is echoed even
/// when an earlier one failed.
pub fn retrieve_params(query: &QueryParams, items: &[Item]) -> Result<Resolved, Rejected> {
    let wants = |item| items.contains(&item);
    let mut echo = Echo::new();
    let mut complete = true;

    let mut model = None;
    if wants(Item::Model) {
        let name = query.parse_choice("model", &ModelSelector::NAMES);
        echo.insert("model".to_string(), text(name));
        model = name.and_then(ModelSelector::parse);
        complete &= model.is_some();
    }

    let target_mass = if wants(Item::Target) {
        let mass = retrieve_body_mass(query, Role::Target, None, &mut echo);
        complete &= mass.is_some();
        mass
    } else {
        None
    };

    let impactor_mass = if wants(Item::Impactor) {
        let mass = retrieve_body_mass(query, Role::Impactor, target_mass, &mut echo);
        complete &= mass.is_some();
        mass
    } else {
        None
    };

    let mut target = None;
    if wants(Item::Target) {
        let size = retrieve_body_size(query, Role::Target, target_mass, model, &mut echo);
        complete &= size.is_some();
        target = target_mass.zip(size).map(|(mass, size)| BodyParams { mass, size });
    }

    let mut impactor = None;
    if wants(Item::Impactor) {
        let size = retrieve_body_size(query, Role::Impactor, impactor_mass, model, &mut echo);
        complete &= size.is_some();
        impactor = impactor_mass.zip(size).map(|(mass, size)| BodyParams { mass, size });
    }

    let mut velocity = None;
    if wants(Item::Velocity) {
        velocity = retrieve_velocity(query, &mut echo);
        complete &= velocity.is_some();
    }

    let mut angle = None;
    if wants(Item::Angle) {
        angle = retrieve_angle(query, &mut echo);
        complete &= angle.is_some();
    }

    if !complete {
        return Err(Rejected { echo });
    }

    Ok(Resolved {
        model,
        target,
        impactor,
        velocity,
        angle,
        echo,
    })
}
