use crate::domain::money::Money;
use crate::error::{Result, SolidError};
use serde::Deserialize;
use std::io::Read;

/// One line of checkout input: a payment kind and the base value to pay.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRow {
    pub kind: String,
    pub value: Money,
}

/// Reads payment rows from a CSV source.
///
/// Whitespace is trimmed and record lengths may vary; negative values fail
/// the row rather than the whole stream.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes rows, one `Result` per record.
    pub fn payments(self) -> impl Iterator<Item = Result<PaymentRow>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(SolidError::from))
    }
}
