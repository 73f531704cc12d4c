use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The model choices offered to the user.
///
/// Each choice carries a user-facing label and a backend model id.  The two
/// usually coincide, but "gemini-2.0-experimental" is a display name only:
/// requests made with it go to the experimental flash build.  The mapping
/// lives in [`ModelChoice::backend_id`] so there is exactly one place to
/// update when the preview alias changes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelChoice {
    /// Gemini 1.5 Flash, the fast default.
    #[default]
    #[serde(rename = "gemini-1.5-flash")]
    Gemini15Flash,

    /// Gemini 1.5 Pro.
    #[serde(rename = "gemini-1.5-pro")]
    Gemini15Pro,

    /// The Gemini 2.0 preview, served under an experimental backend id.
    #[serde(rename = "gemini-2.0-experimental")]
    Gemini20Experimental,
}

impl ModelChoice {
    /// Every selectable model, in menu order.
    pub const ALL: [ModelChoice; 3] = [
        ModelChoice::Gemini15Flash,
        ModelChoice::Gemini15Pro,
        ModelChoice::Gemini20Experimental,
    ];

    /// The label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            ModelChoice::Gemini15Flash => "gemini-1.5-flash",
            ModelChoice::Gemini15Pro => "gemini-1.5-pro",
            ModelChoice::Gemini20Experimental => "gemini-2.0-experimental",
        }
    }

    /// The model id sent to the API.
    pub fn backend_id(&self) -> &'static str {
        match self {
            ModelChoice::Gemini15Flash => "gemini-1.5-flash",
            ModelChoice::Gemini15Pro => "gemini-1.5-pro",
            ModelChoice::Gemini20Experimental => "gemini-2.0-flash-exp",
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ModelChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gemini-1.5-flash" => Ok(ModelChoice::Gemini15Flash),
            "gemini-1.5-pro" => Ok(ModelChoice::Gemini15Pro),
            "gemini-2.0-experimental" => Ok(ModelChoice::Gemini20Experimental),
            _ => Err(Error::configuration(format!("unknown model: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization() {
        let model = ModelChoice::Gemini15Flash;
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""gemini-1.5-flash""#);

        let model = ModelChoice::Gemini20Experimental;
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""gemini-2.0-experimental""#);
    }

    #[test]
    fn deserialization() {
        let json = r#""gemini-1.5-pro""#;
        let model: ModelChoice = serde_json::from_str(json).unwrap();
        assert_eq!(model, ModelChoice::Gemini15Pro);
    }

    #[test]
    fn display_matches_label() {
        for model in ModelChoice::ALL {
            assert_eq!(model.to_string(), model.label());
        }
    }

    #[test]
    fn from_str_round_trips_labels() {
        for model in ModelChoice::ALL {
            assert_eq!(model, model.label().parse::<ModelChoice>().unwrap());
        }
    }

    #[test]
    fn from_str_rejects_unknown_labels() {
        let err = "gemini-3.0-ultra".parse::<ModelChoice>().unwrap_err();
        assert!(err.is_configuration());
        // Backend ids are not labels; the preview alias must not parse.
        let err = "gemini-2.0-flash-exp".parse::<ModelChoice>().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn experimental_label_maps_to_flash_exp_backend() {
        assert_eq!(
            ModelChoice::Gemini20Experimental.backend_id(),
            "gemini-2.0-flash-exp"
        );
        assert_eq!(ModelChoice::Gemini15Flash.backend_id(), "gemini-1.5-flash");
        assert_eq!(ModelChoice::Gemini15Pro.backend_id(), "gemini-1.5-pro");
    }

    #[test]
    fn default_is_flash() {
        assert_eq!(ModelChoice::default(), ModelChoice::Gemini15Flash);
    }
}
