//! Scenario files
//!
//! A scenario captures the full input surface of the pricing dashboard as a
//! YAML document: the solver request, the display currency and the engagement
//! period used for the monthly-revenue figure.

use std::{fs, path::Path};

use rusty_money::iso::{self, Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::request::PricingRequest;

/// Errors raised while loading a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// IO error reading the scenario file.
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("failed to parse scenario YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown ISO-4217 currency code.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

fn default_engagement_months() -> usize {
    12
}

/// A solver input set with its display currency and engagement period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,

    /// ISO-4217 currency code used when rendering prices.
    pub currency: String,

    /// Engagement period in months; defaults to a one-year engagement.
    #[serde(default = "default_engagement_months")]
    pub engagement_months: usize,

    /// Solver inputs.
    pub request: PricingRequest,
}

impl Scenario {
    /// Parses a scenario from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Yaml`] when the document does not describe a
    /// scenario.
    pub fn from_yaml(contents: &str) -> Result<Self, ScenarioError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Loads a scenario from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Io`] when the file cannot be read and
    /// [`ScenarioError::Yaml`] when it cannot be parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Resolves the scenario currency against the ISO-4217 table.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::UnknownCurrency`] for codes `rusty_money`
    /// does not know.
    pub fn currency(&self) -> Result<&'static Currency, ScenarioError> {
        iso::find(&self.currency)
            .ok_or_else(|| ScenarioError::UnknownCurrency(self.currency.clone()))
    }
}
