use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::ChartConfig;
use crate::error::{ChartError, ChartResult};

use super::{Chart, TimeSeriesSettings};

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for a chart document and the widget width it was
/// set up with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    pub config: ChartConfig,
}

impl ChartConfig {
    pub fn to_value(&self) -> ChartResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to encode chart config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self, width: Option<u32>) -> ChartResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            width,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config contract v1: {e}"))
        })
    }

    /// Accepts either a bare Chart.js document or a v1 envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(config) = serde_json::from_str::<ChartConfig>(input) {
            return Ok(config);
        }
        let payload: ChartConfigJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config json payload: {e}"))
        })?;
        if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

impl Chart {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        self.config().to_json_pretty()
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.config().to_json_contract_v1_pretty(Some(self.width()))
    }
}

impl TimeSeriesSettings {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize time-series settings: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse time-series settings: {e}"))
        })
    }
}
