use crate::domain::transport::{Bike, Car, FuelTank, RideOutcome, Transport, TransportInfo};
use crate::error::{Result, SolidError};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Bike,
    Car,
}

impl FromStr for TransportKind {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bike" => Ok(TransportKind::Bike),
            "car" => Ok(TransportKind::Car),
            _ => Err(SolidError::UnsupportedVariant(s.trim().to_string())),
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Bike => write!(f, "bike"),
            TransportKind::Car => write!(f, "car"),
        }
    }
}

/// Everything needed to build one transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSpec {
    pub kind: TransportKind,
    pub info: TransportInfo,
    pub engine_on: bool,
    /// `None` means the transport has no fuel gauge.
    pub fuel_empty: Option<bool>,
}

impl TransportSpec {
    pub fn new(kind: TransportKind, info: TransportInfo) -> Self {
        Self {
            kind,
            info,
            engine_on: false,
            fuel_empty: None,
        }
    }
}

/// Builds the transport described by `spec`.
///
/// Engine and fuel settings are rejected for non-motorized kinds.
pub fn build_transport(spec: TransportSpec) -> Result<Box<dyn Transport>> {
    match spec.kind {
        TransportKind::Bike => {
            if spec.engine_on || spec.fuel_empty.is_some() {
                return Err(SolidError::InvalidInput(format!(
                    "{} is not motorized and has no engine or fuel tank",
                    spec.info.name
                )));
            }
            Ok(Box::new(Bike::new(spec.info)))
        }
        TransportKind::Car => {
            let mut car = Car::new(spec.info).with_engine(spec.engine_on);
            if let Some(empty) = spec.fuel_empty {
                let tank = if empty {
                    FuelTank::empty()
                } else {
                    FuelTank::full()
                };
                car = car.with_fuel_tank(tank);
            }
            Ok(Box::new(car))
        }
    }
}

/// Rides every transport in order without looking at its concrete type.
pub fn ride_all(fleet: &mut [Box<dyn Transport>]) -> Vec<RideOutcome> {
    fleet
        .iter_mut()
        .map(|transport| {
            let outcome = transport.ride();
            if outcome.is_moving() {
                debug!(name = %transport.info().name, "transport moving");
            } else {
                warn!(name = %transport.info().name, %outcome, "transport did not move");
            }
            outcome
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transport::StallReason;

    fn spec(kind: TransportKind, name: &str) -> TransportSpec {
        TransportSpec::new(kind, TransportInfo::new(name, "m1", 30))
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Bike".parse::<TransportKind>().unwrap(), TransportKind::Bike);
        assert_eq!(" car ".parse::<TransportKind>().unwrap(), TransportKind::Car);
        assert!(matches!(
            "boat".parse::<TransportKind>(),
            Err(SolidError::UnsupportedVariant(kind)) if kind == "boat"
        ));
    }

    #[test]
    fn test_build_bike_rejects_engine_settings() {
        let mut with_engine = spec(TransportKind::Bike, "b");
        with_engine.engine_on = true;
        assert!(matches!(
            build_transport(with_engine),
            Err(SolidError::InvalidInput(_))
        ));

        let mut with_fuel = spec(TransportKind::Bike, "b");
        with_fuel.fuel_empty = Some(false);
        assert!(build_transport(with_fuel).is_err());
    }

    #[test]
    fn test_build_car_carries_settings() {
        let mut car_spec = spec(TransportKind::Car, "c");
        car_spec.engine_on = true;
        let car = build_transport(car_spec).unwrap();
        assert_eq!(car.as_motorized().map(|m| m.engine_on()), Some(true));
        assert_eq!(car.info().name, "c");
    }

    #[test]
    fn test_ride_all_mixed_fleet() {
        let mut stalled = spec(TransportKind::Car, "dry");
        stalled.fuel_empty = Some(true);

        let mut fleet = vec![
            build_transport(spec(TransportKind::Bike, "bike")).unwrap(),
            build_transport(spec(TransportKind::Car, "car")).unwrap(),
            build_transport(stalled).unwrap(),
        ];

        let outcomes = ride_all(&mut fleet);
        assert_eq!(
            outcomes,
            vec![
                RideOutcome::Moving,
                RideOutcome::Moving,
                RideOutcome::Stalled(StallReason::FuelEmpty)
            ]
        );
        assert!(fleet[0].as_motorized().is_none());
        assert_eq!(fleet[1].as_motorized().map(|m| m.engine_on()), Some(true));
        assert_eq!(fleet[2].as_motorized().map(|m| m.engine_on()), Some(false));
        assert!(!fleet[2].is_moving());
    }
}
