//! Catalog building: bucketing and ordering an environment's items.
//!
//! The dialog mirrors a conventional character-sheet presentation: weapons
//! first, then ability-check and save consumables, then loot. Within each
//! bucket items sort ascending by their `sort` index; ties keep the actor's
//! item order.

use std::fmt;

use truhe_core::{ActionType, Actor, Item, ItemKind};

/// One of the four fixed presentation buckets, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Weapons, used through attack and damage rolls.
    Weapons,
    /// Consumables resolved through an ability check.
    Checks,
    /// Consumables resolved through a saving throw.
    Saves,
    /// Loot, taken outright.
    Loot,
}

impl Bucket {
    /// All buckets in display order.
    pub const ORDER: [Self; 4] = [Self::Weapons, Self::Checks, Self::Saves, Self::Loot];

    /// Presentation label for entries in this bucket.
    pub fn label(self) -> &'static str {
        match self {
            Self::Weapons => "Weapon",
            Self::Checks => "Ability Check",
            Self::Saves => "Saving Throw",
            Self::Loot => "Macro",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The bucket an item displays under, if any.
///
/// Loot is captured by kind; consumables are captured by their action type,
/// and consumables that neither check nor save are not displayed.
pub fn bucket_of(item: &Item) -> Option<Bucket> {
    match item.kind {
        ItemKind::Weapon => Some(Bucket::Weapons),
        ItemKind::Loot => Some(Bucket::Loot),
        ItemKind::Consumable => match item.action {
            Some(ActionType::Check) => Some(Bucket::Checks),
            Some(ActionType::Save) => Some(Bucket::Saves),
            _ => None,
        },
    }
}

/// Build the ordered display list for an environment actor's items.
pub fn build_display_list(actor: &Actor) -> Vec<&Item> {
    let mut list = Vec::new();
    for bucket in Bucket::ORDER {
        let mut group: Vec<&Item> = actor
            .items
            .iter()
            .filter(|item| bucket_of(item) == Some(bucket))
            .collect();
        group.sort_by_key(|item| item.sort);
        list.extend(group);
    }
    list
}
