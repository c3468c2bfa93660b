use crate::utils::error::{HereError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(HereError::Config {
            field: field_name.to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(HereError::Config {
                field: field_name.to_string(),
                message: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(HereError::Config {
            field: field_name.to_string(),
            message: format!("Invalid URL format '{}': {}", url_str, e),
        }),
    }
}

pub fn validate_api_key(field_name: &str, key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(HereError::Config {
            field: field_name.to_string(),
            message: "API key cannot be empty".to_string(),
        });
    }

    // an unresolved ${VAR} placeholder means the environment variable was not set
    if key.contains("${") {
        return Err(HereError::Config {
            field: field_name.to_string(),
            message: format!("Unresolved environment placeholder: {}", key),
        });
    }

    Ok(())
}
