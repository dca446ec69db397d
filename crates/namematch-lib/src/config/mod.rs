//! Build configuration consulted when deciding which `#if` clauses are active.
//!
//! Hosts pass the configuration as JSON (camelCase keys, every field optional):
//!
//! ```json
//! {
//!   "customConditions": ["DEBUG"],
//!   "importableModules": ["Foundation", "UIKit"],
//!   "targetOs": "iOS",
//!   "targetArch": "arm64",
//!   "targetEnvironment": "simulator",
//!   "languageVersion": "5.10",
//!   "compilerVersion": "6.0"
//! }
//! ```

mod eval;
mod version;

#[cfg(test)]
mod version_tests;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

pub use version::Version;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildConfiguration {
    /// Flags set with `-D`, tested by bare identifiers in conditions.
    pub custom_conditions: IndexSet<String>,
    /// Modules for which `canImport(..)` holds.
    pub importable_modules: IndexSet<String>,
    pub target_os: Option<String>,
    pub target_arch: Option<String>,
    pub target_environment: Option<String>,
    /// Compared by `swift(>=..)`.
    pub language_version: Version,
    /// Compared by `compiler(>=..)`.
    pub compiler_version: Version,
}

impl BuildConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_condition(mut self, name: impl Into<String>) -> Self {
        self.custom_conditions.insert(name.into());
        self
    }

    pub fn with_importable_module(mut self, name: impl Into<String>) -> Self {
        self.importable_modules.insert(name.into());
        self
    }

    pub fn with_target_os(mut self, os: impl Into<String>) -> Self {
        self.target_os = Some(os.into());
        self
    }

    pub fn with_target_arch(mut self, arch: impl Into<String>) -> Self {
        self.target_arch = Some(arch.into());
        self
    }

    pub fn with_target_environment(mut self, environment: impl Into<String>) -> Self {
        self.target_environment = Some(environment.into());
        self
    }

    pub fn with_language_version(mut self, version: Version) -> Self {
        self.language_version = version;
        self
    }

    pub fn with_compiler_version(mut self, version: Version) -> Self {
        self.compiler_version = version;
        self
    }
}
