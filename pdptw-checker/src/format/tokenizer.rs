//! A tokenizer and typed record schemas for line oriented formats.

#[cfg(test)]
#[path = "../../tests/unit/format/tokenizer_test.rs"]
mod tokenizer_test;

use crate::models::*;
use crate::utils::*;

/// A maximum absolute value of integer field. Keeps route time and cost sums far from overflow.
pub(crate) const MAX_FIELD_VALUE: i64 = 1 << 40;

/// A whitespace separated line with typed positional access.
pub(crate) struct LineTokens<'a> {
    line_no: usize,
    line: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> LineTokens<'a> {
    pub fn new(line_no: usize, line: &'a str) -> Self {
        Self { line_no, line, tokens: line.split_whitespace().collect() }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Ensures that line has at least `count` fields.
    pub fn require(&self, count: usize, record: &str) -> Result<(), FormatError> {
        if self.tokens.len() < count {
            Err(self.error(
                SHORT_ROW_CODE,
                format!("{record} has {} fields, expected at least {count}", self.tokens.len()),
                "check that no field is missing",
            ))
        } else {
            Ok(())
        }
    }

    /// Returns integer field. Values like `28.00` are accepted when they have no fractional part.
    pub fn int(&self, position: usize, field: &str) -> Result<i64, FormatError> {
        let token = self.token(position, field)?;

        token
            .parse::<i64>()
            .ok()
            .or_else(|| token.parse::<f64>().ok().filter(|value| value.is_finite() && value.fract() == 0.).map(|v| v as i64))
            .ok_or_else(|| {
                self.error(INVALID_NUMBER_CODE, format!("cannot parse {field}: '{token}'"), "use integer value")
            })
            .and_then(|value| {
                if !(-MAX_FIELD_VALUE..=MAX_FIELD_VALUE).contains(&value) {
                    Err(self.error(
                        OUT_OF_RANGE_CODE,
                        format!("{field} is out of range: '{value}'"),
                        "use value not greater than 2^40 by absolute value",
                    ))
                } else {
                    Ok(value)
                }
            })
    }

    /// Returns non-negative integer field.
    pub fn non_negative(&self, position: usize, field: &str) -> Result<i64, FormatError> {
        let value = self.int(position, field)?;

        if value < 0 {
            Err(self.error(INVALID_NUMBER_CODE, format!("{field} is negative: '{value}'"), "use non-negative value"))
        } else {
            Ok(value)
        }
    }

    /// Returns node index field.
    pub fn index(&self, position: usize, field: &str) -> Result<NodeIndex, FormatError> {
        self.non_negative(position, field).map(|value| value as NodeIndex)
    }

    /// Returns float field.
    pub fn float(&self, position: usize, field: &str) -> Result<f64, FormatError> {
        let token = self.token(position, field)?;

        token.parse::<f64>().map_err(|err| {
            self.error(INVALID_NUMBER_CODE, format!("cannot parse {field}: '{token}': '{err}'"), "use numeric value")
        })
    }

    pub fn error(&self, code: &str, cause: String, action: &str) -> FormatError {
        FormatError::new_at_line(code, cause, action.to_string(), self.line_no, self.line)
    }

    fn token(&self, position: usize, field: &str) -> Result<&'a str, FormatError> {
        self.tokens.get(position).copied().ok_or_else(|| {
            self.error(SHORT_ROW_CODE, format!("{field} is missing"), "check that no field is missing")
        })
    }
}

/// A node line schema: `index lat lon demand earliest latest service pickup_pair delivery_pair`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct NodeRecord {
    pub index: NodeIndex,
    pub location: (f64, f64),
    pub demand: Demand,
    pub earliest: Timestamp,
    pub latest: Timestamp,
    pub service: Duration,
    pub pickup_pair: NodeIndex,
    pub delivery_pair: NodeIndex,
}

impl NodeRecord {
    pub const FIELDS: usize = 9;

    pub fn parse(tokens: &LineTokens) -> Result<Self, FormatError> {
        tokens.require(Self::FIELDS, "node line")?;

        Ok(Self {
            index: tokens.index(0, "node index")?,
            location: (tokens.float(1, "latitude")?, tokens.float(2, "longitude")?),
            demand: tokens.int(3, "demand")?,
            earliest: tokens.int(4, "earliest time")?,
            latest: tokens.int(5, "latest time")?,
            service: tokens.non_negative(6, "service duration")?,
            pickup_pair: tokens.index(7, "pickup pair")?,
            delivery_pair: tokens.index(8, "delivery pair")?,
        })
    }

    /// Returns pair explicitly set in the record: non-zero delivery pair for pickup and
    /// non-zero pickup pair for delivery.
    pub fn declared_pair(&self) -> Option<NodeIndex> {
        match self.demand.signum() {
            1 => Some(self.delivery_pair),
            -1 => Some(self.pickup_pair),
            _ => None,
        }
        .filter(|pair| *pair != DEPOT_INDEX)
    }
}

/// A travel time matrix row schema: exactly `size` non-negative integers.
pub(crate) struct MatrixRow;

impl MatrixRow {
    pub fn parse(tokens: &LineTokens, size: usize) -> Result<Vec<Duration>, FormatError> {
        tokens.require(size, "matrix row")?;

        if tokens.len() > size {
            return Err(tokens.error(
                SHORT_ROW_CODE,
                format!("matrix row has {} fields, expected {size}", tokens.len()),
                "check that matrix has SIZE columns",
            ));
        }

        (0..size).map(|position| tokens.non_negative(position, "travel time")).collect()
    }
}
