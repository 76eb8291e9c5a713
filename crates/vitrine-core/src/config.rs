use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub motion: MotionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the HTTP API listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Value of the Access-Control-Allow-Origin header
    #[serde(default = "default_allow_origin")]
    pub allow_origin: String,
    /// Maximum accepted request body size in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// How contact submissions are validated
    #[serde(default)]
    pub contact_validation: ContactValidation,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            allow_origin: default_allow_origin(),
            max_body_bytes: default_max_body_bytes(),
            contact_validation: ContactValidation::default(),
        }
    }
}

/// Contact form validation mode
///
/// `Presence` only checks that the required fields are non-empty.
/// `Strict` also checks the email shape and that the service exists in the
/// catalog, and reports every failing field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactValidation {
    #[default]
    Presence,
    Strict,
}

/// Defaults for scroll-triggered animations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Quiet period used to coalesce bursts of visibility changes
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Enter transition duration in seconds
    #[serde(default = "default_duration_secs")]
    pub duration_secs: f64,
    /// Delay between consecutive children of a staggered group, in seconds
    #[serde(default = "default_stagger_secs")]
    pub stagger_secs: f64,
    /// Distance in pixels travelled by directional kinds
    #[serde(default = "default_travel_distance")]
    pub travel_distance: f64,
    /// Scale factor used by the `scale` kind
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
    /// Enter easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Fraction of the element that must be visible to trigger
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f64,
    /// Viewport edge bias, CSS margin syntax
    #[serde(default = "default_root_margin")]
    pub root_margin: String,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            duration_secs: default_duration_secs(),
            stagger_secs: default_stagger_secs(),
            travel_distance: default_travel_distance(),
            scale_factor: default_scale_factor(),
            easing: EasingType::default(),
            visibility_threshold: default_visibility_threshold(),
            root_margin: default_root_margin(),
        }
    }
}

/// Named easing curves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    Linear,
    #[default]
    #[serde(alias = "power2.out")]
    EaseOutQuad,
    #[serde(alias = "power2.in")]
    EaseInQuad,
    #[serde(alias = "power2.inOut")]
    EaseInOutQuad,
    #[serde(alias = "power3.out")]
    EaseOutCubic,
    #[serde(alias = "power5.out")]
    EaseOutQuint,
    #[serde(alias = "expo.out")]
    EaseOutExpo,
}

impl EasingType {
    pub const ALL: [EasingType; 7] = [
        EasingType::Linear,
        EasingType::EaseOutQuad,
        EasingType::EaseInQuad,
        EasingType::EaseInOutQuad,
        EasingType::EaseOutCubic,
        EasingType::EaseOutQuint,
        EasingType::EaseOutExpo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EasingType::Linear => "linear",
            EasingType::EaseOutQuad => "ease-out-quad",
            EasingType::EaseInQuad => "ease-in-quad",
            EasingType::EaseInOutQuad => "ease-in-out-quad",
            EasingType::EaseOutCubic => "ease-out-cubic",
            EasingType::EaseOutQuint => "ease-out-quint",
            EasingType::EaseOutExpo => "ease-out-expo",
        }
    }
}

impl FromStr for EasingType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let alias = match s {
            "power2.out" => Some(EasingType::EaseOutQuad),
            "power2.in" => Some(EasingType::EaseInQuad),
            "power2.inOut" => Some(EasingType::EaseInOutQuad),
            "power3.out" => Some(EasingType::EaseOutCubic),
            "power5.out" => Some(EasingType::EaseOutQuint),
            "expo.out" => Some(EasingType::EaseOutExpo),
            _ => None,
        };
        alias
            .or_else(|| EasingType::ALL.into_iter().find(|e| e.name() == s))
            .ok_or_else(|| crate::Error::Config(format!("unknown easing: {}", s)))
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_bind_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_allow_origin() -> String {
    "*".to_string()
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

fn default_debounce_ms() -> u64 {
    50
}

fn default_duration_secs() -> f64 {
    0.7
}

fn default_stagger_secs() -> f64 {
    0.06
}

fn default_travel_distance() -> f64 {
    40.0
}

fn default_scale_factor() -> f64 {
    0.97
}

fn default_visibility_threshold() -> f64 {
    0.2
}

fn default_root_margin() -> String {
    // Trigger 80px before the element reaches the bottom edge
    "0px 0px -80px 0px".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults
    /// when the file does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let path = expand_tilde(path);
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the given path
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        let path = expand_tilde(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Render configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/vitrine/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("vitrine")
            .join("config.toml")
    }
}
