//! Layered server configuration built on [`optional`].
//!
//! Each layer is a JSON [`ServerPatch`]. Fields a patch omits leave the
//! configuration alone, fields it carries are applied, and built-in fallbacks
//! only fill what no layer set. Because [`ServerConfig`] tracks presence per
//! field, an explicit `"port": 0` survives the fallback pass.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use optional::{AnyOptional, Optional};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "overlay";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_RATE: f64 = 100.0;

/// Request limits. Holds an `f64` and a map, so it is carried in an
/// [`AnyOptional`] rather than compared.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Limits {
    pub rate: f64,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub per_route: HashMap<String, u32>,
}

/// One configuration layer as it appears on disk.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<Limits>,
}

#[derive(Clone, Debug, Default)]
pub struct ServerConfig {
    pub name: Optional<String>,
    pub port: Optional<u16>,
    pub tls: Optional<bool>,
    pub limits: AnyOptional<Limits>,
}

impl ServerConfig {
    /// Applies one layer on top of `self`.
    ///
    /// An empty `name` in the patch clears the name, so a later layer can drop
    /// an earlier one's value and let the fallback apply.
    #[must_use]
    pub fn apply(&self, patch: &ServerPatch) -> Self {
        Self {
            name: match &patch.name {
                Some(name) => self.name.set_auto(name.clone()),
                None => self.name.clone(),
            },
            port: patch.port.map_or(self.port, |port| self.port.set(port)),
            tls: patch.tls.map_or(self.tls, |tls| self.tls.set(tls)),
            limits: match &patch.limits {
                Some(limits) => self.limits.set_ptr(Some(limits)),
                None => self.limits.clone(),
            },
        }
    }

    /// Fills every field no layer set with its built-in fallback.
    #[must_use]
    pub fn with_defaults(&self) -> Self {
        Self {
            name: self.name.set_default(DEFAULT_NAME.to_string()),
            port: self.port.set_default(DEFAULT_PORT),
            tls: self.tls.set_default(false),
            limits: self.limits.set_default(Limits {
                rate: DEFAULT_RATE,
                per_route: HashMap::new(),
            }),
        }
    }

    /// Names of the fields that carry a value.
    pub fn explicit_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_set() {
            fields.push("name");
        }
        if self.port.is_set() {
            fields.push("port");
        }
        if self.tls.is_set() {
            fields.push("tls");
        }
        if self.limits.is_set() {
            fields.push("limits");
        }
        fields
    }

    /// Converts back to the wire shape; unset fields become omitted ones.
    pub fn to_patch(&self) -> ServerPatch {
        ServerPatch {
            name: self.name.ptr().cloned(),
            port: self.port.ptr().copied(),
            tls: self.tls.ptr().copied(),
            limits: self.limits.ptr().cloned(),
        }
    }
}

#[derive(Debug)]
pub enum OverlayError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayError::Io(e) => write!(f, "read failed: {}", e),
            OverlayError::Json(e) => write!(f, "invalid patch: {}", e),
        }
    }
}

impl std::error::Error for OverlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OverlayError::Io(e) => Some(e),
            OverlayError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for OverlayError {
    fn from(e: std::io::Error) -> Self {
        OverlayError::Io(e)
    }
}

impl From<serde_json::Error> for OverlayError {
    fn from(e: serde_json::Error) -> Self {
        OverlayError::Json(e)
    }
}

/// Splits a command line into patch paths, or returns the usage line when
/// there are none. An empty argv falls back to `overlay` as the program name.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Vec<PathBuf>, String> {
    let mut args = args.into_iter();
    let program = args.next().unwrap_or_else(|| "overlay".to_string());
    let paths: Vec<PathBuf> = args.map(PathBuf::from).collect();
    if paths.is_empty() {
        return Err(format!("Usage: {} <patch.json>...", program));
    }
    Ok(paths)
}

pub fn parse_patch(json: &str) -> Result<ServerPatch, OverlayError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_patch(path: &Path) -> Result<ServerPatch, OverlayError> {
    let json = fs::read_to_string(path)?;
    parse_patch(&json)
}

/// Applies the patch files in order, starting from an empty configuration.
/// Fallbacks are not applied.
pub fn load_layers<P: AsRef<Path>>(paths: &[P]) -> Result<ServerConfig, OverlayError> {
    let mut config = ServerConfig::default();
    for path in paths {
        let patch = load_patch(path.as_ref())?;
        config = config.apply(&patch);
    }
    Ok(config)
}
