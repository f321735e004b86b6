//! Minimal column-oriented table used as time-series input.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Name given to an unnamed row index when it is moved into the columns.
pub const DEFAULT_INDEX_NAME: &str = "index";

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Number(f64),
    Decimal(Decimal),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Cell {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
            || matches!(self, Self::Number(value) if value.is_nan())
    }

    /// String form used for chart labels.
    #[must_use]
    pub fn to_label(&self) -> String {
        match self {
            Self::Date(date) => date.format("%Y-%m-%d").to_string(),
            Self::DateTime(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
            _ if self.is_null() => "NaT".to_owned(),
            other => other.to_string(),
        }
    }

    /// Numeric form used for dataset values; nulls map to `None`.
    pub fn to_value(&self) -> ChartResult<Option<f64>> {
        match self {
            _ if self.is_null() => Ok(None),
            Self::Number(value) => Ok(Some(*value)),
            Self::Decimal(value) => decimal_to_f64(*value, "decimal cell").map(Some),
            Self::Text(text) => text.trim().parse::<f64>().map(Some).map_err(|_| {
                ChartError::InvalidData(format!("cell `{text}` is not numeric"))
            }),
            Self::Null | Self::Date(_) | Self::DateTime(_) => Err(ChartError::InvalidData(
                format!("cell `{self}` is not numeric"),
            )),
        }
    }

    fn sort_rank(&self) -> u8 {
        match self {
            _ if self.is_null() => 4,
            Self::Number(_) | Self::Decimal(_) => 0,
            Self::Date(_) | Self::DateTime(_) => 1,
            Self::Text(_) => 2,
            Self::Null => 4,
        }
    }

    /// Total order for sorting: numbers, then dates, then text, nulls last.
    /// Dates and datetimes compare chronologically with each other.
    fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (left, right) if left.sort_rank() != right.sort_rank() => {
                left.sort_rank().cmp(&right.sort_rank())
            }
            (Self::Text(left), Self::Text(right)) => left.cmp(right),
            (left, right) => match (left.chronological_key(), right.chronological_key()) {
                (Some(left), Some(right)) => left.cmp(&right),
                _ => left.numeric_key().cmp(&right.numeric_key()),
            },
        }
    }

    fn chronological_key(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(date) => date.and_hms_opt(0, 0, 0),
            Self::DateTime(time) => Some(*time),
            _ => None,
        }
    }

    fn numeric_key(&self) -> OrderedFloat<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Decimal(value) => decimal_to_f64(*value, "decimal cell").unwrap_or(f64::NAN),
            _ => f64::NAN,
        };
        OrderedFloat(value)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NaT"),
            // Whole floats keep a trailing `.0`.
            Self::Number(value)
                if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 =>
            {
                write!(f, "{value:.1}")
            }
            Self::Number(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::DateTime(time) => write!(f, "{}", time.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Decimal> for Cell {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for Cell {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for Cell {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: Option<String>,
    pub cells: Vec<Cell>,
}

impl Column {
    #[must_use]
    pub fn new<C: Into<Cell>>(name: impl Into<String>, cells: impl IntoIterator<Item = C>) -> Self {
        Self {
            name: Some(name.into()),
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn unnamed<C: Into<Cell>>(cells: impl IntoIterator<Item = C>) -> Self {
        Self {
            name: None,
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Rectangular table with an optional row index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    index: Option<Column>,
    columns: Vec<Column>,
}

impl Table {
    /// Builds a table; every column (and the index) must have the same length.
    pub fn new(columns: Vec<Column>) -> ChartResult<Self> {
        let table = Self {
            index: None,
            columns,
        };
        table.validate()?;
        Ok(table)
    }

    /// Attaches a row index, e.g. a `Date` index from a price feed.
    pub fn with_index(mut self, index: Column) -> ChartResult<Self> {
        self.index = Some(index);
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> ChartResult<()> {
        let mut lengths = self.index.iter().chain(&self.columns).map(Column::len);
        if let Some(expected) = lengths.next() {
            if let Some(actual) = lengths.find(|len| *len != expected) {
                return Err(ChartError::InvalidData(format!(
                    "table columns must have equal length: expected {expected}, found {actual}"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.index
            .iter()
            .chain(&self.columns)
            .map(Column::len)
            .next()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn index(&self) -> Option<&Column> {
        self.index.as_ref()
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> ChartResult<&Column> {
        self.columns
            .iter()
            .find(|column| column.name.as_deref() == Some(name))
            .ok_or_else(|| ChartError::UnknownKey(format!("table has no column `{name}`")))
    }

    /// Moves the row index into the first column position. An unnamed
    /// index becomes the `index` column. A table without index is unchanged.
    ///
    /// Fails with `InvalidData` when a column already carries the index name.
    pub fn reset_index(mut self) -> ChartResult<Self> {
        if let Some(mut index) = self.index.take() {
            let name = index
                .name
                .get_or_insert_with(|| DEFAULT_INDEX_NAME.to_owned());
            if self
                .columns
                .iter()
                .any(|column| column.name.as_deref() == Some(name.as_str()))
            {
                return Err(ChartError::InvalidData(format!(
                    "cannot move index into columns: column `{name}` already exists"
                )));
            }
            self.columns.insert(0, index);
        }
        Ok(self)
    }

    /// Row positions ordered ascending by column `name` (stable, nulls last).
    pub fn sorted_positions(&self, name: &str) -> ChartResult<Vec<usize>> {
        let column = self.column(name)?;
        let mut positions: Vec<usize> = (0..column.len()).collect();
        positions.sort_by(|left, right| column.cells[*left].sort_cmp(&column.cells[*right]));
        Ok(positions)
    }
}
