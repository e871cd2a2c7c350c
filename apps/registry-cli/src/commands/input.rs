//! JSON payload input and command output.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Payload given inline, from a file, or on stdin when neither flag is set.
#[derive(Debug, Clone, Default, Args)]
pub struct JsonInput {
    /// Inline JSON payload
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,

    /// Read the JSON payload from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl JsonInput {
    pub fn parse<T: DeserializeOwned>(&self) -> anyhow::Result<T> {
        let raw = match (&self.json, &self.file) {
            (Some(json), _) => json.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            (None, None) => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read payload from stdin")?;
                buf
            }
        };

        serde_json::from_str(&raw).context("payload is not valid JSON for this resource")
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the server echo of a create, or a plain acknowledgement when the
/// server sent none.
pub fn print_created<T: Serialize>(created: Option<T>) -> anyhow::Result<()> {
    match created {
        Some(value) => print_json(&value),
        None => print_json(&serde_json::json!({ "created": true })),
    }
}

pub fn print_ok() -> anyhow::Result<()> {
    print_json(&serde_json::json!({ "ok": true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry_shared::Project;
    use std::io::Write;

    #[test]
    fn test_inline_json() {
        let input = JsonInput {
            json: Some(r#"{"id":4,"name":"Atlas"}"#.to_string()),
            file: None,
        };

        let project: Project = input.parse().unwrap();
        assert_eq!(project.id, Some(4));
        assert_eq!(project.get("name").unwrap(), "Atlas");
    }

    #[test]
    fn test_json_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name":"Atlas"}}"#).unwrap();

        let input = JsonInput {
            json: None,
            file: Some(file.path().to_path_buf()),
        };

        let project: Project = input.parse().unwrap();
        assert_eq!(project.id, None);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let input = JsonInput {
            json: Some("{name:".to_string()),
            file: None,
        };
        assert!(input.parse::<Project>().is_err());

        let missing = JsonInput {
            json: None,
            file: Some(PathBuf::from("/nonexistent/registry/payload.json")),
        };
        assert!(missing.parse::<Project>().is_err());
    }
}
