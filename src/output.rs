use serde::Serialize;
use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("POLYINCLUDE_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn from_flag(json: bool) -> Self {
        if json { OutputMode::Json } else { OutputMode::Human }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, OutputMode::Human)
    }
}

#[derive(Debug, Serialize)]
struct Envelope<'a, T: Serialize> {
    ok: bool,
    command: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorBody<'a>>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: String,
}

/// JSON envelope for a successful command
pub fn success_envelope<T: Serialize>(command: &str, data: T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Envelope {
        ok: true,
        command,
        data: Some(data),
        error: None,
    })
}

/// JSON envelope for a failed command
pub fn error_envelope(command: &str, code: &str, message: impl Into<String>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Envelope::<()> {
        ok: false,
        command,
        data: None,
        error: Some(ErrorBody {
            code,
            message: message.into(),
        }),
    })
}

/// Print `data` in the JSON envelope. Human output is the caller's job.
pub fn emit_success<T: Serialize>(mode: OutputMode, command: &str, data: T) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        println!("{}", success_envelope(command, data)?);
    }
    Ok(())
}

pub fn emit_error(mode: OutputMode, command: &str, code: &str, message: &str) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => println!("{}", error_envelope(command, code, message)?),
        OutputMode::Human => crate::ui::error(message),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let json = success_envelope("languages", vec!["react"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["command"], "languages");
        assert_eq!(value["data"][0], "react");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_error_envelope() {
        let json = error_envelope("resolve", "COMPONENT_NOT_FOUND", "Component \"X\" not found").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"]["code"], "COMPONENT_NOT_FOUND");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_output_mode() {
        assert!(OutputMode::from_flag(false).is_human());
        assert_eq!(OutputMode::from_flag(true), OutputMode::Json);
    }
}
