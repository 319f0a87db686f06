use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

/// Response of `GET /repos/{owner}/{repo}/contents/{path}` for a file.
#[derive(Debug, Deserialize, Clone)]
pub struct GithubContent {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub encoding: Option<String>,
}

impl GithubContent {
    /// Decodes the payload to UTF-8 text. GitHub wraps base64 at 60 columns.
    pub fn decode(&self) -> Result<String, String> {
        match self.encoding.as_deref() {
            Some("base64") | None => {
                let compact: String = self.content.chars().filter(|c| !c.is_whitespace()).collect();
                let bytes = STANDARD.decode(compact).map_err(|e| e.to_string())?;
                String::from_utf8(bytes).map_err(|e| e.to_string())
            }
            Some("utf-8") => Ok(self.content.clone()),
            Some(other) => Err(format!("unsupported encoding '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wrapped_base64() {
        let content = GithubContent {
            content: "IyBEZW1v\nCg==\n".to_string(),
            encoding: Some("base64".to_string()),
        };
        assert_eq!(content.decode().unwrap(), "# Demo\n");
    }

    #[test]
    fn rejects_binary_payloads() {
        let content = GithubContent {
            content: STANDARD.encode([0xff, 0xfe, 0x00]),
            encoding: Some("base64".to_string()),
        };
        assert!(content.decode().is_err());
    }
}
