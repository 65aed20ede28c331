/// Serde helper functions for custom serialization
use serde::Serializer;

/// Serialize an f64 percentage rounded to two decimals
pub mod percent_2dp {
    use super::*;

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(round_2dp(*value))
    }
}

/// Serialize Option<f64> percentages rounded to two decimals
pub mod optional_percent_2dp {
    use super::*;

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_some(&round_2dp(*v)),
            None => serializer.serialize_none(),
        }
    }
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Skip serializing if Option is None
pub fn is_none<T>(value: &Option<T>) -> bool {
    value.is_none()
}
