use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Exchange rates relative to a single anchor currency, as published by the
/// remote source.
///
/// The table is replaced wholesale on every re-sync, never merged. The
/// anchor's own rate is 1.0 by definition and is not part of `rates`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateTable {
    pub base: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub rates: HashMap<String, f64>,
}

impl RateTable {
    /// Resolves a currency code to its anchor-relative rate.
    pub fn rate_of(&self, code: &str) -> Result<f64, ConvertError> {
        if code == self.base {
            return Ok(1.0);
        }
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| ConvertError::UnknownCurrency(code.to_string()))
    }

    /// Converts `amount` from `base` to `target` through the anchor.
    ///
    /// `base` is resolved first, so when both codes are unknown the error
    /// names `base`.
    pub fn convert(&self, base: &str, target: &str, amount: f64) -> Result<f64, ConvertError> {
        let base_rate = self.rate_of(base)?;
        let target_rate = self.rate_of(target)?;
        Ok(target_rate / base_rate * amount)
    }

    /// All convertible currency codes, anchor included, sorted.
    pub fn currencies(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.rates.keys().map(String::as_str).collect();
        if !self.rates.contains_key(self.base.as_str()) {
            codes.push(&self.base);
        }
        codes.sort_unstable();
        codes
    }
}

/// Uppercases user input so lookups match the published code set.
pub fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
