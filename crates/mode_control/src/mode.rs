//! Mode names reported by the proxy's `/state` resource.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operating mode of the proxy.
///
/// The known modes get their own variants; any other name the service returns
/// is kept verbatim in [`Mode::Other`] so it round-trips unchanged.
///
/// Serialises as a plain lowercase string, e.g. `"virtualize"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    /// Serve recorded responses instead of the real upstream.
    #[default]
    Virtualize,
    /// Forward to the upstream and record what comes back.
    Capture,
    /// Serve responses from the simulation templates.
    Simulate,
    /// Forward, then rewrite requests/responses through middleware.
    Modify,
    /// Generate responses entirely through middleware.
    Synthesize,
    /// A mode name this client does not know about.
    Other(String),
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Virtualize => "virtualize",
            Mode::Capture => "capture",
            Mode::Simulate => "simulate",
            Mode::Modify => "modify",
            Mode::Synthesize => "synthesize",
            Mode::Other(name) => name,
        }
    }
}

impl From<String> for Mode {
    fn from(name: String) -> Self {
        match name.as_str() {
            "virtualize" => Mode::Virtualize,
            "capture" => Mode::Capture,
            "simulate" => Mode::Simulate,
            "modify" => Mode::Modify,
            "synthesize" => Mode::Synthesize,
            _ => Mode::Other(name),
        }
    }
}

impl From<&str> for Mode {
    fn from(name: &str) -> Self {
        Mode::from(name.to_string())
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Mode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mode::from(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of the `/state` response.
///
/// Only `mode` is read; any other fields the service sends are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeResponse {
    pub mode: Mode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_virtualize() {
        assert_eq!(Mode::default(), Mode::Virtualize);
        assert_eq!(Mode::default().to_string(), "virtualize");
    }

    #[test]
    fn test_known_names_parse_to_variants() {
        assert_eq!("capture".parse::<Mode>().unwrap(), Mode::Capture);
        assert_eq!("simulate".parse::<Mode>().unwrap(), Mode::Simulate);
        assert_eq!("modify".parse::<Mode>().unwrap(), Mode::Modify);
        assert_eq!("synthesize".parse::<Mode>().unwrap(), Mode::Synthesize);
    }

    #[test]
    fn test_unknown_name_is_preserved() {
        let mode: Mode = "observe".parse().unwrap();
        assert_eq!(mode, Mode::Other("observe".to_string()));
        assert_eq!(mode.to_string(), "observe");
        assert_eq!(String::from(mode), "observe");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        // The service only ever reports lowercase names.
        assert_eq!(Mode::from("Capture"), Mode::Other("Capture".to_string()));
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let body = r#"{"mode":"capture","destination":".","middleware":""}"#;
        let response: ModeResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.mode, Mode::Capture);
    }

    #[test]
    fn test_response_without_mode_fails_to_decode() {
        let result = serde_json::from_str::<ModeResponse>(r#"{"destination":"."}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_serialises_mode_as_string() {
        let response = ModeResponse { mode: Mode::Simulate };
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"mode":"simulate"}"#);
    }
}
