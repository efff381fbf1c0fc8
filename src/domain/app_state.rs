#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use super::entities::{GatewaySettings, Marketplace, Variation};
use super::pricing::DEFAULT_COMPETITOR_FACTOR;

/// Calculator defaults the user tweaks once and keeps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorPrefs {
    pub marketplace: Marketplace,
    pub packaging_cost: f64,
    /// 0 = auto mode.
    pub markup: f64,
    pub competitor_factor: f64,
}

impl Default for CalculatorPrefs {
    fn default() -> Self {
        Self {
            marketplace: Marketplace::default(),
            packaging_cost: 2.0,
            markup: 1.5,
            competitor_factor: DEFAULT_COMPETITOR_FACTOR,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub prefs: CalculatorPrefs,
    pub gateway: GatewaySettings,
    pub variations: Vec<Variation>,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.prefs = persisted.prefs;
        self.gateway = persisted.gateway;
        self.variations = persisted.variations;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            prefs: self.prefs.clone(),
            gateway: self.gateway,
            variations: self.variations.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub prefs: CalculatorPrefs,
    #[serde(default)]
    pub gateway: GatewaySettings,
    #[serde(default)]
    pub variations: Vec<Variation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_state_round_trips_through_json() {
        let mut state = AppState::default();
        state.prefs.packaging_cost = 3.5;
        state.variations.push(Variation {
            id: "var-1".to_string(),
            label: "P".to_string(),
            cost: 12.0,
            markup: 2.0,
        });

        let json = serde_json::to_string(&state.to_persisted()).unwrap();
        let restored: PersistedState = serde_json::from_str(&json).unwrap();

        let mut fresh = AppState::default();
        fresh.apply_persisted(restored);
        assert_eq!(fresh.prefs.packaging_cost, 3.5);
        assert_eq!(fresh.variations.len(), 1);
        assert_eq!(fresh.variations[0].label, "P");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let restored: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(restored.prefs.packaging_cost, 2.0);
        assert_eq!(restored.gateway, GatewaySettings::default());
        assert!(restored.variations.is_empty());
    }
}
