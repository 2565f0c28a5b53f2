//! Default windows and the [`PadicParams`] configuration object.

use crate::error::{PadicError, Result};
use crate::stream::{check_base, PAdicInteger};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIME_BASE: u32 = 3;

/// Digits shown by `Display` and compared by `PartialEq`.
pub const DEFAULT_MAX_DIGITS: usize = 20;

/// Window used when a caller wants confidence that two values really differ.
pub const DEFAULT_INEQUALITY_DEPTH: usize = 1000;

/// Working parameters for p-adic computations.
///
/// Equality over unbounded digit streams is only ever judged over a finite
/// window, so the windows live here alongside the base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadicParams {
    pub p: u32,
    pub display_digits: usize,
    pub comparison_depth: usize,
    pub inequality_depth: usize,
}

impl Default for PadicParams {
    fn default() -> Self {
        Self {
            p: DEFAULT_PRIME_BASE,
            display_digits: DEFAULT_MAX_DIGITS,
            comparison_depth: DEFAULT_MAX_DIGITS,
            inequality_depth: DEFAULT_INEQUALITY_DEPTH,
        }
    }
}

impl PadicParams {
    pub fn with_base(p: u32) -> Self {
        Self {
            p,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_base(self.p)?;

        if self.comparison_depth == 0 {
            return Err(PadicError::InvalidParameter(
                "comparison_depth must be positive".to_string(),
            ));
        }

        if self.inequality_depth < self.comparison_depth {
            return Err(PadicError::InvalidParameter(format!(
                "inequality_depth {} is shallower than comparison_depth {}",
                self.inequality_depth, self.comparison_depth
            )));
        }

        Ok(())
    }

    /// Parse and validate parameters from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(text)?;
        params.validate()?;
        tracing::debug!(
            p = params.p,
            comparison_depth = params.comparison_depth,
            "Loaded p-adic parameters"
        );
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn zero(&self) -> Result<PAdicInteger> {
        PAdicInteger::zero(self.p)
    }

    pub fn one(&self) -> Result<PAdicInteger> {
        PAdicInteger::one(self.p)
    }

    pub fn from_integer(&self, n: i64) -> Result<PAdicInteger> {
        PAdicInteger::from_integer(n, self.p)
    }

    pub fn stable(&self, seed: u64) -> Result<PAdicInteger> {
        PAdicInteger::stable(self.p, seed)
    }

    /// Prefix equality over `comparison_depth` digits.
    pub fn equal(&self, x: &PAdicInteger, y: &PAdicInteger) -> bool {
        x.equal_prefix(y, self.comparison_depth)
    }

    /// True when a difference shows up within `inequality_depth` digits.
    pub fn differ(&self, x: &PAdicInteger, y: &PAdicInteger) -> bool {
        !x.equal_prefix(y, self.inequality_depth)
    }

    pub fn format(&self, x: &PAdicInteger) -> String {
        x.format_prefix(self.display_digits)
    }
}
