use crate::core::request::Endpoints;
use crate::utils::error::{HereError, Result};
use crate::utils::validation::{validate_api_key, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_LANGUAGE: &str = "ru-RU";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub client: ClientSection,
    #[serde(default)]
    pub endpoints: EndpointsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSection {
    pub api_key: String,
    pub language: Option<String>,
}

/// Optional endpoint overrides. `base_url` moves every operation under one host,
/// per-method entries win over it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointsSection {
    pub base_url: Option<String>,
    pub discover: Option<String>,
    pub geocode: Option<String>,
    pub autosuggest: Option<String>,
    pub browse: Option<String>,
    pub lookup: Option<String>,
    pub revgeocode: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: ClientSection {
                api_key: api_key.into(),
                language: None,
            },
            endpoints: EndpointsSection::default(),
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| HereError::Config {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn api_key(&self) -> &str {
        &self.client.api_key
    }

    pub fn language(&self) -> &str {
        self.client.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn endpoints(&self) -> Endpoints {
        let section = &self.endpoints;
        let mut endpoints = match &section.base_url {
            Some(base) => Endpoints::with_base(base),
            None => Endpoints::default(),
        };

        let overrides = [
            (&section.discover, &mut endpoints.discover),
            (&section.geocode, &mut endpoints.geocode),
            (&section.autosuggest, &mut endpoints.autosuggest),
            (&section.browse, &mut endpoints.browse),
            (&section.lookup, &mut endpoints.lookup),
            (&section.revgeocode, &mut endpoints.revgeocode),
        ];
        for (value, slot) in overrides {
            if let Some(url) = value {
                *slot = url.clone();
            }
        }

        endpoints
    }
}

/// 替換環境變數 (例如 ${HERE_API_KEY})，未設定的變數保持原樣
fn substitute_env_vars(content: &str) -> String {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("static regex is valid")
    });

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_api_key("client.api_key", &self.client.api_key)?;

        let section = &self.endpoints;
        let configured = [
            ("endpoints.base_url", &section.base_url),
            ("endpoints.discover", &section.discover),
            ("endpoints.geocode", &section.geocode),
            ("endpoints.autosuggest", &section.autosuggest),
            ("endpoints.browse", &section.browse),
            ("endpoints.lookup", &section.lookup),
            ("endpoints.revgeocode", &section.revgeocode),
        ];
        for (field, value) in configured {
            if let Some(url) = value {
                validate_url(field, url)?;
            }
        }

        Ok(())
    }
}
