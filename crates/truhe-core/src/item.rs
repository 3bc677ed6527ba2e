use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The kind of an item, which determines how an interaction with it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A weapon, used through attack and damage rolls.
    Weapon,
    /// A consumable, used through an ability check or saving throw.
    Consumable,
    /// Loot with no roll of its own; may trigger a named macro.
    Loot,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Consumable => write!(f, "consumable"),
            Self::Loot => write!(f, "loot"),
        }
    }
}

/// How a consumable item resolves when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Resolves through an ability check by the user.
    Check,
    /// Resolves through a saving throw by the user.
    Save,
    /// Resolves with no roll (trinkets, keys, oddities).
    Utility,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Check => write!(f, "check"),
            Self::Save => write!(f, "save"),
            Self::Utility => write!(f, "utility"),
        }
    }
}

/// One of the six ability keys used for checks and saving throws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    /// Raw physical power.
    Strength,
    /// Agility and reflexes.
    Dexterity,
    /// Endurance and vitality.
    Constitution,
    /// Reasoning and memory.
    Intelligence,
    /// Perception and willpower.
    Wisdom,
    /// Force of personality.
    Charisma,
}

impl Ability {
    /// Capitalized presentation label, e.g. `"Intelligence"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// Try to parse an ability from its lowercase name or three-letter key.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strength" | "str" => Some(Self::Strength),
            "dexterity" | "dex" => Some(Self::Dexterity),
            "constitution" | "con" => Some(Self::Constitution),
            "intelligence" | "int" => Some(Self::Intelligence),
            "wisdom" | "wis" => Some(Self::Wisdom),
            "charisma" | "cha" => Some(Self::Charisma),
            _ => None,
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strength => write!(f, "strength"),
            Self::Dexterity => write!(f, "dexterity"),
            Self::Constitution => write!(f, "constitution"),
            Self::Intelligence => write!(f, "intelligence"),
            Self::Wisdom => write!(f, "wisdom"),
            Self::Charisma => write!(f, "charisma"),
        }
    }
}

/// A damage expression such as `2d6+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceExpr {
    /// Number of dice rolled.
    pub count: u32,
    /// Sides per die.
    pub sides: u32,
    /// Flat bonus added after the dice.
    pub bonus: i32,
}

impl DiceExpr {
    /// Create a dice expression.
    pub fn new(count: u32, sides: u32, bonus: i32) -> Self {
        Self {
            count,
            sides,
            bonus,
        }
    }

    /// Parse an expression like `"2d6+1"`, `"d8"`, or `"1d4-1"`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let (count_str, rest) = s.split_once('d')?;
        let count = if count_str.is_empty() {
            1
        } else {
            count_str.parse().ok()?
        };

        let (sides_str, bonus) = if let Some((sides, b)) = rest.split_once('+') {
            (sides, b.parse::<i32>().ok()?)
        } else if let Some((sides, b)) = rest.split_once('-') {
            (sides, -b.parse::<i32>().ok()?)
        } else {
            (rest, 0)
        };

        let sides: u32 = sides_str.parse().ok()?;
        if sides == 0 || count == 0 {
            return None;
        }
        Some(Self {
            count,
            sides,
            bonus,
        })
    }
}

impl fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.bonus > 0 {
            write!(f, "+{}", self.bonus)?;
        } else if self.bonus < 0 {
            write!(f, "{}", self.bonus)?;
        }
        Ok(())
    }
}

/// An item carried by an actor.
///
/// Environment actors expose their items through the interaction dialog;
/// a copy of one item is temporarily embedded on the interacting actor for
/// the duration of a single action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// Display name of the item.
    pub name: String,
    /// The kind of this item.
    pub kind: ItemKind,
    /// How a consumable resolves. Ignored for weapons and loot.
    pub action: Option<ActionType>,
    /// Ability key for check consumables.
    pub ability: Option<Ability>,
    /// Ability key for save consumables.
    pub save: Option<Ability>,
    /// Flat attack bonus for weapons.
    pub attack_bonus: i32,
    /// Damage expression for weapons.
    pub damage: Option<DiceExpr>,
    /// Name of the macro a loot item triggers when taken.
    pub macro_name: Option<String>,
    /// Whether the wielder adds proficiency to attack rolls.
    pub proficient: bool,
    /// Sort index controlling presentation order (default 0).
    pub sort: i64,
}

impl Item {
    /// Create a new item of the given kind with a random ID.
    pub fn new(kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            kind,
            action: None,
            ability: None,
            save: None,
            attack_bonus: 0,
            damage: None,
            macro_name: None,
            proficient: false,
            sort: 0,
        }
    }

    /// Create a weapon with an attack bonus and damage expression.
    pub fn weapon(name: impl Into<String>, attack_bonus: i32, damage: DiceExpr) -> Self {
        let mut item = Self::new(ItemKind::Weapon, name);
        item.attack_bonus = attack_bonus;
        item.damage = Some(damage);
        item
    }

    /// Create a consumable resolved through an ability check.
    pub fn check(name: impl Into<String>, ability: Ability) -> Self {
        let mut item = Self::new(ItemKind::Consumable, name);
        item.action = Some(ActionType::Check);
        item.ability = Some(ability);
        item
    }

    /// Create a consumable resolved through a saving throw.
    pub fn save(name: impl Into<String>, ability: Ability) -> Self {
        let mut item = Self::new(ItemKind::Consumable, name);
        item.action = Some(ActionType::Save);
        item.save = Some(ability);
        item
    }

    /// Create a loot item, optionally triggering the named macro when taken.
    pub fn loot(name: impl Into<String>, macro_name: Option<String>) -> Self {
        let mut item = Self::new(ItemKind::Loot, name);
        item.macro_name = macro_name;
        item
    }

    /// Set the sort index.
    pub fn with_sort(mut self, sort: i64) -> Self {
        self.sort = sort;
        self
    }

    /// Return a deep copy of this item under a fresh ID.
    ///
    /// Used when embedding an environment item on another actor: the copy
    /// gets its own identity while the original stays untouched.
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        copy.id = ItemId::new();
        copy
    }
}
