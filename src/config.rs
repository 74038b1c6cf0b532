//! Startup configuration, as a plain serializable value.
//!
//! A plain `#[derive(Serialize, Deserialize)]` struct a caller can build
//! from a deserialized value instead of bare call arguments. No `Default`
//! impl is provided — there is no sensible default core count or policy to
//! fall back to.

use serde::{Deserialize, Serialize};

use crate::policy::Scheme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    pub cores: u32,
    pub scheme: Scheme,
}

impl SchedulerConfig {
    pub fn new(cores: u32, scheme: Scheme) -> Self {
        SchedulerConfig { cores, scheme }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_serde_round_trips() {
        let cfg = SchedulerConfig::new(4, Scheme::Ppri);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SchedulerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn config_json_shape() {
        let cfg = SchedulerConfig::new(2, Scheme::Rr);
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(json, r#"{"cores":2,"scheme":"rr"}"#);
    }
}
