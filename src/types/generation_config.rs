use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Sampling parameters for a single generation call.
///
/// Serialized camelCase to match the Generative Language API
/// (`generationConfig` in the request body).  Only the knobs this crate
/// actually sets are modeled; everything else rides on the server defaults.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature, between 0.0 and 1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Hard cap on tokens generated for the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    /// Accept finite values in 0.0 through 1.0; NaN gets its own message.
    #[inline]
    fn check_unit_interval(value: f64, field: &str) -> Result<()> {
        if (0.0..=1.0).contains(&value) && value.is_finite() {
            return Ok(());
        }

        if value.is_nan() {
            return Err(Error::configuration(format!("{field} cannot be NaN")));
        }

        Err(Error::configuration(format!(
            "{field} must be between 0.0 and 1.0, got {value}"
        )))
    }

    /// An empty config: every knob on the server default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sampling temperature.  Values outside 0.0 through 1.0 are rejected.
    pub fn with_temperature(mut self, temperature: f64) -> Result<Self> {
        Self::check_unit_interval(temperature, "temperature")?;
        self.temperature = Some(temperature);
        Ok(self)
    }

    /// Cap the response length in tokens.
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}
