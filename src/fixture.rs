//! Vehicle snapshot fixture
//!
//! Holds the telemetry snapshot as an opaque JSON value. Nothing in the crate
//! reads its fields; it is only pretty-printed for display.

pub mod fixture_render;

use std::path::Path;

use serde_json::Value;

use crate::error::SnackbarError;

/// The vehicle snapshot shipped with the binary
const BUILTIN_SNAPSHOT: &str = include_str!("../assets/vehicle_snapshot.json");

#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    value: Value,
}

impl Fixture {
    /// The built-in vehicle snapshot
    pub fn builtin() -> Self {
        // Embedded asset is checked by test_builtin_snapshot_parses
        Self::parse(BUILTIN_SNAPSHOT).unwrap_or_else(|_| Self { value: Value::Null })
    }

    /// Parse a fixture from JSON text
    pub fn parse(text: &str) -> Result<Self, SnackbarError> {
        let value = serde_json::from_str::<Value>(text)
            .map_err(|e| SnackbarError::InvalidFixture(e.to_string()))?;
        Ok(Self { value })
    }

    /// Read and parse a fixture file
    pub fn from_path(path: &Path) -> Result<Self, SnackbarError> {
        if !path.exists() {
            return Err(SnackbarError::FixtureNotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;

        #[cfg(debug_assertions)]
        log::debug!("Loaded fixture {:?}, {} bytes", path, contents.len());

        Self::parse(&contents)
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn to_pretty_string(&self) -> String {
        // Serializing a Value cannot fail
        serde_json::to_string_pretty(&self.value).unwrap_or_default()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::builtin()
    }
}
