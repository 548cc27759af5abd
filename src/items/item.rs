//! Training item definitions
//!
//! Tiers, weapon categories, bonus kinds and the catalog entry itself.

use serde::{Deserialize, Serialize};

/// Catalog stratification. Higher tiers have more charges and bigger bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Spark,
    Lightning,
    Inferno,
}

impl Tier {
    /// All tiers, lowest first
    pub const ALL: [Tier; 3] = [Tier::Spark, Tier::Lightning, Tier::Inferno];

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Spark => "Spark",
            Tier::Lightning => "Lightning",
            Tier::Inferno => "Inferno",
        }
    }

    /// Parse a tier name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Tier> {
        Tier::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Weapon subtypes found in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponCategory {
    Axe,
    Sword,
    Club,
    Rod,
    Wand,
    Spear,
    Shield,
}

impl WeaponCategory {
    pub const ALL: [WeaponCategory; 7] = [
        WeaponCategory::Axe,
        WeaponCategory::Sword,
        WeaponCategory::Club,
        WeaponCategory::Rod,
        WeaponCategory::Wand,
        WeaponCategory::Spear,
        WeaponCategory::Shield,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WeaponCategory::Axe => "Axe",
            WeaponCategory::Sword => "Sword",
            WeaponCategory::Club => "Club",
            WeaponCategory::Rod => "Rod",
            WeaponCategory::Wand => "Wand",
            WeaponCategory::Spear => "Spear",
            WeaponCategory::Shield => "Shield",
        }
    }

    /// Axe, sword and club train the same skill
    pub fn is_melee(&self) -> bool {
        matches!(self, WeaponCategory::Axe | WeaponCategory::Sword | WeaponCategory::Club)
    }

    /// Normalized category used for grouping
    pub fn family(&self) -> WeaponFamily {
        match self {
            WeaponCategory::Axe | WeaponCategory::Sword | WeaponCategory::Club => WeaponFamily::Melee,
            WeaponCategory::Rod => WeaponFamily::Rod,
            WeaponCategory::Wand => WeaponFamily::Wand,
            WeaponCategory::Spear => WeaponFamily::Spear,
            WeaponCategory::Shield => WeaponFamily::Shield,
        }
    }
}

/// Normalized weapon category: the three melee categories fuse into `Melee`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponFamily {
    Melee,
    Rod,
    Wand,
    Spear,
    Shield,
}

impl WeaponFamily {
    pub const ALL: [WeaponFamily; 5] = [
        WeaponFamily::Melee,
        WeaponFamily::Rod,
        WeaponFamily::Wand,
        WeaponFamily::Spear,
        WeaponFamily::Shield,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WeaponFamily::Melee => "Melee",
            WeaponFamily::Rod => "Rod",
            WeaponFamily::Wand => "Wand",
            WeaponFamily::Spear => "Spear",
            WeaponFamily::Shield => "Shield",
        }
    }

    /// Parse a family name (case-insensitive)
    pub fn from_name(name: &str) -> Option<WeaponFamily> {
        WeaponFamily::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Check whether a catalog category belongs to this family
    pub fn contains(&self, category: WeaponCategory) -> bool {
        category.family() == *self
    }
}

/// What an item's bonus affects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    /// Shortens the attack interval (negative percent = faster)
    AttackIntervalReduction,
    /// Multiplies shielding gained per action without changing speed
    ShieldingGain,
}

impl BonusKind {
    pub fn is_gain(&self) -> bool {
        matches!(self, BonusKind::ShieldingGain)
    }

    /// Display label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            BonusKind::AttackIntervalReduction => "Attack Interval",
            BonusKind::ShieldingGain => "Shielding Gain",
        }
    }
}

/// Coarse item kind shown next to each row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Shield,
}

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Weapon => "Weapon",
            ItemKind::Shield => "Shield",
        }
    }
}

/// A static catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingItem {
    /// Unique display name, e.g. "Inferno Training Axe"
    pub name: String,
    pub tier: Tier,
    pub category: WeaponCategory,
    pub attack: i32,
    pub defense: i32,
    /// 1 or 2, descriptive only
    pub hands: u8,
    /// Uses before the item is depleted
    pub charges: u32,
    pub weight: f64,
    pub bonus_kind: BonusKind,
    /// Signed percent, e.g. -20.0 or 20.0
    pub bonus_percent: f64,
}

impl TrainingItem {
    /// Canonical display name for a (tier, category) pair
    pub fn canonical_name(tier: Tier, category: WeaponCategory) -> String {
        format!("{} Training {}", tier.name(), category.name())
    }

    pub fn kind(&self) -> ItemKind {
        if self.bonus_kind.is_gain() {
            ItemKind::Shield
        } else {
            ItemKind::Weapon
        }
    }

    pub fn family(&self) -> WeaponFamily {
        self.category.family()
    }

    /// Human readable bonus, e.g. "Attack Interval -20%"
    pub fn bonus_text(&self) -> String {
        format!("{} {:+}%", self.bonus_kind.label(), self.bonus_percent)
    }
}
