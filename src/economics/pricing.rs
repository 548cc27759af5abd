//! Item prices
//!
//! User-entered prices live in a [`PriceMap`] owned by the caller; tiers
//! carry a suggested default price used when no user price is set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::items::Tier;

/// Suggested gold price per tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierPrices {
    pub spark: f64,
    pub lightning: f64,
    pub inferno: f64,
}

impl TierPrices {
    pub fn get(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Spark => self.spark,
            Tier::Lightning => self.lightning,
            Tier::Inferno => self.inferno,
        }
    }
}

impl Default for TierPrices {
    fn default() -> Self {
        Self {
            spark: 10_000.0,
            lightning: 17_000.0,
            inferno: 30_000.0,
        }
    }
}

/// User-entered prices keyed by display name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceMap {
    prices: HashMap<String, f64>,
}

impl PriceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the price for an item
    pub fn set(&mut self, name: impl Into<String>, price: f64) {
        self.prices.insert(name.into(), price);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.prices.get(name).copied()
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.prices.remove(name)
    }

    /// Explicit reset
    pub fn clear(&mut self) {
        self.prices.clear();
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Price for an item: a positive user price wins, then the tier default
    pub fn resolve(&self, name: &str, tier: Tier, tier_prices: &TierPrices) -> f64 {
        match self.get(name) {
            Some(price) if price > 0.0 => price,
            _ => tier_prices.get(tier),
        }
    }
}
