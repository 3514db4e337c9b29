use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Attributes every transport carries, motorized or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportInfo {
    pub name: String,
    pub model: String,
    /// Cruising velocity in km/h.
    pub velocity: u32,
}

impl TransportInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>, velocity: u32) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            velocity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StallReason {
    FuelEmpty,
}

/// Result of asking a transport to ride.
///
/// A stall is part of the motorized contract, so callers holding a plain
/// `dyn Transport` can still see that nothing moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideOutcome {
    Moving,
    Stalled(StallReason),
}

impl RideOutcome {
    pub fn is_moving(&self) -> bool {
        matches!(self, RideOutcome::Moving)
    }
}

impl fmt::Display for RideOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RideOutcome::Moving => write!(f, "moving"),
            RideOutcome::Stalled(StallReason::FuelEmpty) => write!(f, "stalled (fuel empty)"),
        }
    }
}

/// The base capability shared by every transport.
pub trait Transport: fmt::Debug + Send {
    fn info(&self) -> &TransportInfo;

    /// Begins motion.
    fn ride(&mut self) -> RideOutcome;

    fn is_moving(&self) -> bool;

    /// Engine capability, if this transport has one.
    fn as_motorized(&self) -> Option<&dyn Motorized> {
        None
    }

    fn as_motorized_mut(&mut self) -> Option<&mut dyn Motorized> {
        None
    }
}

/// Additive capability for transports with an engine.
///
/// `ride` starts the engine when it is off. Implementors with a fuel tank may
/// refuse to move while it is empty; they must then leave the engine untouched
/// and report `RideOutcome::Stalled(StallReason::FuelEmpty)`.
pub trait Motorized: Transport {
    fn engine_on(&self) -> bool;

    fn start_engine(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FuelTank {
    empty: bool,
}

impl FuelTank {
    pub fn full() -> Self {
        Self { empty: false }
    }

    pub fn empty() -> Self {
        Self { empty: true }
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bike {
    info: TransportInfo,
    moving: bool,
}

impl Bike {
    pub fn new(info: TransportInfo) -> Self {
        Self {
            info,
            moving: false,
        }
    }
}

impl Transport for Bike {
    fn info(&self) -> &TransportInfo {
        &self.info
    }

    fn ride(&mut self) -> RideOutcome {
        self.moving = true;
        debug!(name = %self.info.name, "bike riding");
        RideOutcome::Moving
    }

    fn is_moving(&self) -> bool {
        self.moving
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    info: TransportInfo,
    engine_on: bool,
    fuel_tank: Option<FuelTank>,
    moving: bool,
}

impl Car {
    /// A car with the engine off and no fuel gauge.
    pub fn new(info: TransportInfo) -> Self {
        Self {
            info,
            engine_on: false,
            fuel_tank: None,
            moving: false,
        }
    }

    pub fn with_engine(mut self, engine_on: bool) -> Self {
        self.engine_on = engine_on;
        self
    }

    pub fn with_fuel_tank(mut self, tank: FuelTank) -> Self {
        self.fuel_tank = Some(tank);
        self
    }

    pub fn fuel_tank(&self) -> Option<FuelTank> {
        self.fuel_tank
    }
}

impl Transport for Car {
    fn info(&self) -> &TransportInfo {
        &self.info
    }

    fn ride(&mut self) -> RideOutcome {
        if self.fuel_tank.is_some_and(|tank| tank.is_empty()) {
            debug!(name = %self.info.name, "car stalled, fuel tank empty");
            return RideOutcome::Stalled(StallReason::FuelEmpty);
        }
        if !self.engine_on {
            self.start_engine();
        }
        self.moving = true;
        debug!(name = %self.info.name, velocity = self.info.velocity, "car riding");
        RideOutcome::Moving
    }

    fn is_moving(&self) -> bool {
        self.moving
    }

    fn as_motorized(&self) -> Option<&dyn Motorized> {
        Some(self)
    }

    fn as_motorized_mut(&mut self) -> Option<&mut dyn Motorized> {
        Some(self)
    }
}

impl Motorized for Car {
    fn engine_on(&self) -> bool {
        self.engine_on
    }

    fn start_engine(&mut self) {
        debug!(name = %self.info.name, "engine started");
        self.engine_on = true;
    }
}
