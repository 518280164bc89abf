//! Pool sizes for the four berth categories.

use serde::{Deserialize, Serialize};

fn default_lower() -> u32 {
    21
}

fn default_middle() -> u32 {
    21
}

fn default_upper() -> u32 {
    21
}

fn default_side_lower() -> u32 {
    9
}

/// Number of berths to create in each category at startup.
///
/// Defaults match the single coach described in the spec: 21 Lower, 21
/// Middle, 21 Upper, 9 Side-Lower (18 RAC slots).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityConfig {
    #[serde(default = "default_lower")]
    pub lower: u32,
    #[serde(default = "default_middle")]
    pub middle: u32,
    #[serde(default = "default_upper")]
    pub upper: u32,
    #[serde(default = "default_side_lower")]
    pub side_lower: u32,
}

impl CapacityConfig {
    /// Total RAC slots backed by the Side-Lower pool (two per berth).
    pub fn rac_capacity(&self) -> u32 {
        self.side_lower * 2
    }
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            lower: default_lower(),
            middle: default_middle(),
            upper: default_upper(),
            side_lower: default_side_lower(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_single_coach_layout() {
        let cfg = CapacityConfig::default();
        assert_eq!(cfg.lower, 21);
        assert_eq!(cfg.middle, 21);
        assert_eq!(cfg.upper, 21);
        assert_eq!(cfg.side_lower, 9);
        assert_eq!(cfg.rac_capacity(), 18);
    }
}
