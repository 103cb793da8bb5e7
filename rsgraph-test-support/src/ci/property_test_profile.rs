//! Property-test case counts shared by every proptest suite.
//!
//! CI raises the count through the environment; local runs keep each
//! suite's own default.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const RSGRAPH_PBT_CASES_ENV_KEY: &str = "RSGRAPH_PBT_CASES";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
}

impl ProptestRunProfile {
    /// Reads [`RSGRAPH_PBT_CASES_ENV_KEY`], falling back to `default_cases`
    /// when it is unset or not a positive integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use rsgraph_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        let cases = env::var(RSGRAPH_PBT_CASES_ENV_KEY).map_or(default_cases, |raw| {
            parse_cases(&raw).unwrap_or_else(|reason| {
                tracing::warn!(
                    env = RSGRAPH_PBT_CASES_ENV_KEY,
                    raw = %raw,
                    reason = %reason,
                    "invalid property-test case override; using default",
                );
                default_cases
            })
        });
        Self { cases }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}
