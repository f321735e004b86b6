//! Keyword-style builders for Chart.js configuration maps.
//!
//! Each builder takes its recognized keys as `Option` values; `None` means
//! "not provided" and the key is left out of the result, while explicit
//! falsy values (`false`, `0`, `""`, JSON `null`) are kept.
//!
//! These helpers are the untyped entry point for callers that assemble
//! documents from loose JSON values. The typed sections in
//! [`super::schema`] serialize to the same shapes and are what the
//! chart wrappers use.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Number, Value};

use super::schema::ChartKind;

/// Ordered option-name to value mapping.
pub type ConfigMap = IndexMap<String, Value>;

/// Conversion into a JSON-encodable configuration value.
///
/// Fixed-size arrays and tuples become JSON arrays, `f32` and `Decimal`
/// become plain `f64` numbers and non-finite floats become `null`.
pub trait IntoConfigValue {
    fn into_config_value(self) -> Value;
}

impl IntoConfigValue for Value {
    fn into_config_value(self) -> Value {
        self
    }
}

impl IntoConfigValue for bool {
    fn into_config_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoConfigValue for &str {
    fn into_config_value(self) -> Value {
        Value::String(self.to_owned())
    }
}

impl IntoConfigValue for String {
    fn into_config_value(self) -> Value {
        Value::String(self)
    }
}

macro_rules! impl_into_config_value_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoConfigValue for $ty {
                fn into_config_value(self) -> Value {
                    Value::Number(Number::from(self))
                }
            }
        )*
    };
}

impl_into_config_value_for_integers!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl IntoConfigValue for f64 {
    fn into_config_value(self) -> Value {
        Number::from_f64(self).map_or(Value::Null, Value::Number)
    }
}

impl IntoConfigValue for f32 {
    fn into_config_value(self) -> Value {
        f64::from(self).into_config_value()
    }
}

impl IntoConfigValue for Decimal {
    fn into_config_value(self) -> Value {
        self.to_f64()
            .map_or(Value::Null, IntoConfigValue::into_config_value)
    }
}

impl<T: IntoConfigValue> IntoConfigValue for Option<T> {
    fn into_config_value(self) -> Value {
        self.map_or(Value::Null, IntoConfigValue::into_config_value)
    }
}

impl<T: IntoConfigValue> IntoConfigValue for Vec<T> {
    fn into_config_value(self) -> Value {
        Value::Array(
            self.into_iter()
                .map(IntoConfigValue::into_config_value)
                .collect(),
        )
    }
}

impl<T: IntoConfigValue + Clone> IntoConfigValue for &[T] {
    fn into_config_value(self) -> Value {
        self.to_vec().into_config_value()
    }
}

impl<T: IntoConfigValue, const N: usize> IntoConfigValue for [T; N] {
    fn into_config_value(self) -> Value {
        Vec::from(self).into_config_value()
    }
}

impl<A: IntoConfigValue, B: IntoConfigValue> IntoConfigValue for (A, B) {
    fn into_config_value(self) -> Value {
        Value::Array(vec![self.0.into_config_value(), self.1.into_config_value()])
    }
}

impl<A: IntoConfigValue, B: IntoConfigValue, C: IntoConfigValue> IntoConfigValue for (A, B, C) {
    fn into_config_value(self) -> Value {
        Value::Array(vec![
            self.0.into_config_value(),
            self.1.into_config_value(),
            self.2.into_config_value(),
        ])
    }
}

impl IntoConfigValue for ConfigMap {
    fn into_config_value(self) -> Value {
        Value::Object(self.into_iter().collect::<Map<String, Value>>())
    }
}

impl IntoConfigValue for ChartKind {
    fn into_config_value(self) -> Value {
        Value::String(self.key().to_owned())
    }
}

/// Collects `(name, value)` pairs into a [`ConfigMap`], dropping every
/// entry whose value is `None`. Input order is preserved.
pub fn clean_dict<I, K>(entries: I) -> ConfigMap
where
    I: IntoIterator<Item = (K, Option<Value>)>,
    K: Into<String>,
{
    entries
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key.into(), value)))
        .collect()
}

/// Incremental form of [`clean_dict`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanDict {
    entries: ConfigMap,
}

impl CleanDict {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key` when `value` is provided.
    #[must_use]
    pub fn field<T: IntoConfigValue>(mut self, key: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.entries
                .insert(key.to_owned(), value.into_config_value());
        }
        self
    }

    /// Appends free-form entries; a repeated key replaces the earlier value.
    #[must_use]
    pub fn extend(mut self, extra: ConfigMap) -> Self {
        self.entries.extend(extra);
        self
    }

    #[must_use]
    pub fn build(self) -> ConfigMap {
        self.entries
    }
}

/// Top-level chart options. An unset `responsive` defaults to `true`.
#[must_use]
pub fn options(
    responsive: Option<bool>,
    legend: Option<Value>,
    title: Option<Value>,
    animation: Option<Value>,
    extra: ConfigMap,
) -> ConfigMap {
    CleanDict::new()
        .field("responsive", Some(responsive.unwrap_or(true)))
        .field("legend", legend)
        .field("title", title)
        .field("animation", animation)
        .extend(extra)
        .build()
}

/// Full chart config. Missing options become an empty object.
#[must_use]
pub fn config(kind: ChartKind, data: Value, options: Option<Value>, extra: ConfigMap) -> ConfigMap {
    let options = options.unwrap_or_else(|| Value::Object(Map::new()));
    CleanDict::new()
        .field("type", Some(kind))
        .field("data", Some(data))
        .field("options", Some(options))
        .extend(extra)
        .build()
}

#[must_use]
pub fn data(datasets: Value, labels: Option<Value>, extra: ConfigMap) -> ConfigMap {
    CleanDict::new()
        .field("datasets", Some(datasets))
        .field("labels", labels)
        .extend(extra)
        .build()
}

#[must_use]
pub fn dataset(
    data: Value,
    label: Option<String>,
    background_color: Option<String>,
    extra: ConfigMap,
) -> ConfigMap {
    CleanDict::new()
        .field("data", Some(data))
        .field("label", label)
        .field("backgroundColor", background_color)
        .extend(extra)
        .build()
}

#[must_use]
pub fn scales(x_axes: Option<Value>, y_axes: Option<Value>, extra: ConfigMap) -> ConfigMap {
    CleanDict::new()
        .field("xAxes", x_axes)
        .field("yAxes", y_axes)
        .extend(extra)
        .build()
}

/// Axis entry. Unset `display` defaults to `true` and `stacked` to `false`.
#[must_use]
pub fn axes(
    display: Option<bool>,
    scale_label: Option<Value>,
    stacked: Option<bool>,
    extra: ConfigMap,
) -> ConfigMap {
    CleanDict::new()
        .field("display", Some(display.unwrap_or(true)))
        .field("scaleLabel", scale_label)
        .field("stacked", Some(stacked.unwrap_or(false)))
        .extend(extra)
        .build()
}
