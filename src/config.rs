use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// On-disk shape of the credentials file
#[derive(Debug, Deserialize)]
struct TeachersFile {
    #[serde(default)]
    teachers: Vec<TeacherEntry>,
}

#[derive(Debug, Deserialize)]
struct TeacherEntry {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

/// Parse a credentials document into a username -> password map.
///
/// Entries missing a username or password (or with an empty one) are
/// skipped. Zero valid entries is an error.
pub fn parse_credentials(contents: &str) -> Result<HashMap<String, String>, String> {
    let file: TeachersFile = serde_json::from_str(contents)
        .map_err(|e| format!("Failed to parse credentials JSON: {}", e))?;

    let mut credentials = HashMap::new();

    for entry in file.teachers {
        if let (Some(username), Some(password)) = (entry.username, entry.password) {
            if !username.is_empty() && !password.is_empty() {
                credentials.insert(username, password);
            }
        }
    }

    if credentials.is_empty() {
        return Err("No valid teacher credentials found".to_string());
    }

    Ok(credentials)
}

/// Load teacher credentials from a JSON file
pub fn load_credentials<P: AsRef<Path>>(path: P) -> Result<Arc<HashMap<String, String>>, String> {
    let path = path.as_ref();
    info!("Loading teacher credentials from: {}", path.display());

    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read credentials file '{}': {}", path.display(), e))?;

    let credentials = parse_credentials(&contents)?;

    info!("Loaded {} teacher credential(s)", credentials.len());

    Ok(Arc::new(credentials))
}

/// Load teacher credentials with fallback options
pub fn load_credentials_with_fallback() -> Result<Arc<HashMap<String, String>>, String> {
    // Try loading from environment variable first
    if let Ok(path) = std::env::var("TEACHERS_PATH") {
        match load_credentials(&path) {
            Ok(credentials) => return Ok(credentials),
            Err(e) => warn!(
                "Failed to load credentials from TEACHERS_PATH ({}): {}",
                path, e
            ),
        }
    }

    // Try common credential file locations
    let paths = vec!["teachers.json", "./teachers.json", "src/teachers.json"];

    for path in paths {
        if Path::new(path).exists() {
            match load_credentials(path) {
                Ok(credentials) => return Ok(credentials),
                Err(e) => warn!("Failed to load credentials from '{}': {}", path, e),
            }
        }
    }

    Err(
        "No credentials file found. Please create a teachers.json file or set the TEACHERS_PATH \
        environment variable."
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_credentials() {
        let json = r#"
        {
            "teachers": [
                { "username": "mr.smith", "password": "secret" },
                { "username": "ms.garcia", "password": "mathrules" }
            ]
        }
        "#;

        let credentials = parse_credentials(json).unwrap();
        assert_eq!(credentials.len(), 2);
        assert_eq!(credentials.get("mr.smith"), Some(&"secret".to_string()));
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let json = r#"
        {
            "teachers": [
                { "username": "mr.smith", "password": "secret" },
                { "username": "no.password" },
                { "password": "no.username" },
                { "username": "", "password": "empty.username" }
            ]
        }
        "#;

        let credentials = parse_credentials(json).unwrap();
        assert_eq!(credentials.len(), 1);
        assert!(credentials.contains_key("mr.smith"));
    }

    #[test]
    fn test_zero_valid_entries_is_an_error() {
        let json = r#"{ "teachers": [ { "username": "only.name" } ] }"#;

        let result = parse_credentials(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("No valid teacher credentials"));
    }

    #[test]
    fn test_empty_document_is_an_error() {
        let result = parse_credentials("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = parse_credentials("not json");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to parse"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_credentials("/nonexistent/teachers.json");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to read"));
    }
}
