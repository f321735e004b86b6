mod chart;
mod json_contract;
mod market_data;
mod time_series;
mod time_series_config;

pub use chart::{Chart, default_options};
pub use json_contract::{CHART_CONFIG_JSON_SCHEMA_V1, ChartConfigJsonContractV1};
pub use market_data::{Credentials, DataOrigin, DateRange, MarketDataSource};
pub use time_series::{
    AlignedSeries, DEFAULT_DATE_COLUMN, SPLIT_AXIS_IDS, data_format, default_x_axis,
    default_y_axes, time_series_chart, ts_default_options,
};
pub use time_series_config::{DEFAULT_CHART_WIDTH, TimeSeriesSettings};
