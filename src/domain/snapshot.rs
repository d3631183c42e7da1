// Snapshot document schema as published by the CGM bridge
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// One device snapshot. Every level is optional; the graph section is kept
/// untyped here and validated separately so that a malformed graph cannot
/// take the scalar fields down with it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<DeviceStatus>,
    #[serde(default, deserialize_with = "lenient")]
    pub bg: Option<BloodGlucose>,
    #[serde(default)]
    pub graph: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceStatus {
    #[serde(default, deserialize_with = "lenient_integer")]
    pub bat: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BloodGlucose {
    #[serde(default, deserialize_with = "lenient")]
    pub trend: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub val: Option<CurrentValue>,
}

/// The current reading exactly as the device reported it. Bridges send
/// either a JSON number or a preformatted string such as `"10.2"`; numbers
/// keep their original form, so `184` stays `184`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CurrentValue {
    Number(Number),
    Text(String),
}

impl std::fmt::Display for CurrentValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurrentValue::Number(n) => write!(f, "{}", n),
            CurrentValue::Text(s) => f.write_str(s),
        }
    }
}

impl Snapshot {
    /// Build a snapshot from an already parsed document. Anything that is not
    /// a JSON object has no recognisable fields and yields an empty snapshot.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            tracing::warn!("Snapshot document is not an object, ignoring it");
            return Snapshot::default();
        }

        // Every field is lenient, so an object never fails here
        Snapshot::deserialize(value).unwrap_or_default()
    }

    pub fn battery_level(&self) -> Option<i64> {
        self.status.as_ref().and_then(|s| s.bat)
    }

    pub fn trend(&self) -> Option<&str> {
        self.bg.as_ref().and_then(|bg| bg.trend.as_deref())
    }

    pub fn current_value(&self) -> Option<&CurrentValue> {
        self.bg.as_ref().and_then(|bg| bg.val.as_ref())
    }

    /// Raw graph section; `null` counts as missing
    pub fn graph(&self) -> Option<&Value> {
        self.graph.as_ref().filter(|g| !g.is_null())
    }
}

/// Deserialize an optional field, mapping a value of the wrong shape to `None`
/// instead of rejecting the enclosing object.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
}

/// Like `lenient`, but also accepts whole-number floats such as `78.0`
fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    })
}
