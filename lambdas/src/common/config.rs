use std::str::FromStr;
use thiserror::Error;

pub const TABLE_NAME_DEFAULT: &str = "todos";
pub const KEY_FIELD_DEFAULT: &str = "name";
pub const REPLY_MARKER_HEADER: &str = "X-MyCompany-Func-Reply";
pub const REPLY_MARKER_DEFAULT: &str = "hello-handler";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown store backend: {0}")]
pub struct UnknownBackend(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    DynamoDb,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dynamodb" => Ok(StoreBackend::DynamoDb),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(UnknownBackend(other.into())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub table_name: String,
    pub key_field: String,
    pub backend: StoreBackend,
    pub reply_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: TABLE_NAME_DEFAULT.into(),
            key_field: KEY_FIELD_DEFAULT.into(),
            backend: StoreBackend::DynamoDb,
            reply_marker: REPLY_MARKER_DEFAULT.into(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, UnknownBackend> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, UnknownBackend> {
        let backend = match lookup("STORE_BACKEND") {
            Some(val) => val.parse()?,
            None => StoreBackend::DynamoDb,
        };

        Ok(Self {
            table_name: lookup("TABLE_NAME").unwrap_or(TABLE_NAME_DEFAULT.into()),
            key_field: lookup("KEY_FIELD").unwrap_or(KEY_FIELD_DEFAULT.into()),
            backend,
            reply_marker: lookup("REPLY_MARKER").unwrap_or(REPLY_MARKER_DEFAULT.into()),
        })
    }
}
