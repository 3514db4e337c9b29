use crate::domain::money::Money;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CheckoutLine {
    pub kind: String,
    pub value: Decimal,
    pub payable: Decimal,
}

impl CheckoutLine {
    /// Builds an output line with trailing zeros stripped.
    pub fn new(kind: impl Into<String>, value: Money, payable: Money) -> Self {
        Self {
            kind: kind.into(),
            value: value.value().normalize(),
            payable: payable.value().normalize(),
        }
    }
}

/// Writes checkout results as `kind,value,payable` CSV.
pub struct CheckoutWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CheckoutWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_line(&mut self, line: &CheckoutLine) -> Result<()> {
        self.writer.serialize(line)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
