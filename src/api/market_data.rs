use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::core::Table;
use crate::core::primitives::parse_ymd;
use crate::error::{ChartError, ChartResult};

/// Inclusive calendar range requested from a market-data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> ChartResult<Self> {
        if start > end {
            return Err(ChartError::InvalidArgument(format!(
                "date range start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Parses `year-month-day` bounds, e.g. `("2019-1-1", "2019-12-31")`.
    pub fn parse(start: &str, end: &str) -> ChartResult<Self> {
        Self::new(parse_ymd(start, "start")?, parse_ymd(end, "end")?)
    }

    #[must_use]
    pub fn start(self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(self) -> NaiveDate {
        self.end
    }
}

/// Access credential for a named market-data provider.
///
/// There is no built-in key: callers always supply one.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    provider: String,
    api_key: String,
}

impl Credentials {
    pub fn new(provider: impl Into<String>, api_key: impl Into<String>) -> ChartResult<Self> {
        let provider = provider.into();
        let api_key = api_key.into();
        if provider.trim().is_empty() {
            return Err(ChartError::InvalidArgument(
                "market data provider must not be empty".to_owned(),
            ));
        }
        if api_key.trim().is_empty() {
            return Err(ChartError::InvalidArgument(format!(
                "api key for provider `{provider}` must not be empty"
            )));
        }
        Ok(Self { provider, api_key })
    }

    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Synchronous price-history source.
///
/// Implementations return a table with a `Date` index or column plus the
/// value columns (`Close`, `Open`, ...). Errors propagate unchanged.
pub trait MarketDataSource {
    fn fetch(&self, symbol: &str, range: DateRange, credentials: &Credentials)
    -> ChartResult<Table>;
}

impl<F> MarketDataSource for F
where
    F: Fn(&str, DateRange, &Credentials) -> ChartResult<Table>,
{
    fn fetch(
        &self,
        symbol: &str,
        range: DateRange,
        credentials: &Credentials,
    ) -> ChartResult<Table> {
        self(symbol, range, credentials)
    }
}

/// Where series tables come from.
pub enum DataOrigin<'a> {
    /// Fetch each symbol from `source`.
    Remote {
        source: &'a dyn MarketDataSource,
        range: DateRange,
        credentials: Credentials,
    },
    /// Caller-supplied tables, matched to series by position.
    Provided { tables: Vec<Table> },
}

impl DataOrigin<'_> {
    #[must_use]
    pub fn is_provided(&self) -> bool {
        matches!(self, Self::Provided { .. })
    }

    pub(crate) fn table_for(&self, position: usize, symbol: &str) -> ChartResult<Cow<'_, Table>> {
        match self {
            Self::Remote {
                source,
                range,
                credentials,
            } => {
                debug!(
                    symbol,
                    provider = credentials.provider(),
                    start = %range.start(),
                    end = %range.end(),
                    "fetch market data"
                );
                source.fetch(symbol, *range, credentials).map(Cow::Owned)
            }
            Self::Provided { tables } => tables.get(position).map(Cow::Borrowed).ok_or_else(|| {
                ChartError::InvalidArgument(format!(
                    "no supplied table for series `{symbol}` at position {position}"
                ))
            }),
        }
    }
}

impl fmt::Debug for DataOrigin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote {
                range, credentials, ..
            } => f
                .debug_struct("Remote")
                .field("range", range)
                .field("credentials", credentials)
                .finish_non_exhaustive(),
            Self::Provided { tables } => f
                .debug_struct("Provided")
                .field("tables", &tables.len())
                .finish(),
        }
    }
}
