use crate::domain::transport::{RideOutcome, Transport};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct RideLine {
    pub name: String,
    pub outcome: String,
    /// `on`, `off`, or `-` for transports without an engine.
    pub engine: &'static str,
}

impl RideLine {
    pub fn new(transport: &dyn Transport, outcome: RideOutcome) -> Self {
        let engine = match transport.as_motorized() {
            Some(motor) if motor.engine_on() => "on",
            Some(_) => "off",
            None => "-",
        };
        Self {
            name: transport.info().name.clone(),
            outcome: outcome.to_string(),
            engine,
        }
    }
}

/// Writes ride results as `name,outcome,engine` CSV.
pub struct RideWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RideWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_line(&mut self, line: &RideLine) -> Result<()> {
        self.writer.serialize(line)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
