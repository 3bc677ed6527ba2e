//! Dice rolls backing the dispatched actions.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;
use truhe_core::DiceExpr;

/// Flat proficiency bonus added to proficient attack rolls.
pub const PROFICIENCY_BONUS: i32 = 2;

fn d20(rng: &mut StdRng) -> u32 {
    rng.random_range(1..=20)
}

/// A d20 roll with a single modifier (ability checks and saving throws).
#[derive(Debug, Clone, Copy)]
pub struct CheckRoll {
    /// The raw d20 result.
    pub die: u32,
    /// The modifier applied.
    pub modifier: i32,
}

impl CheckRoll {
    /// The final total.
    pub fn total(&self) -> i32 {
        self.die as i32 + self.modifier
    }
}

impl fmt::Display for CheckRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d20 ({})", self.die)?;
        write_mod(f, self.modifier)?;
        write!(f, " = {}", self.total())
    }
}

/// A d20 attack roll with an attack bonus and optional proficiency.
#[derive(Debug, Clone, Copy)]
pub struct AttackRoll {
    /// The raw d20 result.
    pub die: u32,
    /// The weapon's attack bonus.
    pub bonus: i32,
    /// Proficiency bonus applied (0 when not proficient).
    pub proficiency: i32,
}

impl AttackRoll {
    /// The final total.
    pub fn total(&self) -> i32 {
        self.die as i32 + self.bonus + self.proficiency
    }
}

impl fmt::Display for AttackRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d20 ({})", self.die)?;
        write_mod(f, self.bonus)?;
        write_mod(f, self.proficiency)?;
        write!(f, " = {}", self.total())
    }
}

/// A damage roll: individual dice, flat bonus, critical flag.
#[derive(Debug, Clone)]
pub struct DamageRoll {
    /// Individual die results.
    pub dice: Vec<u32>,
    /// Flat bonus added once.
    pub bonus: i32,
    /// Whether this was a critical hit (dice doubled).
    pub critical: bool,
}

impl DamageRoll {
    /// The final total.
    pub fn total(&self) -> i32 {
        self.dice.iter().sum::<u32>() as i32 + self.bonus
    }
}

impl fmt::Display for DamageRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}]", values.join(", "))?;
        write_mod(f, self.bonus)?;
        write!(f, " = {}", self.total())?;
        if self.critical {
            write!(f, " (critical)")?;
        }
        Ok(())
    }
}

/// Roll an ability check or saving throw.
pub fn check(rng: &mut StdRng, modifier: i32) -> CheckRoll {
    CheckRoll {
        die: d20(rng),
        modifier,
    }
}

/// Roll an attack with the given bonus, adding proficiency if proficient.
pub fn attack(rng: &mut StdRng, bonus: i32, proficient: bool) -> AttackRoll {
    AttackRoll {
        die: d20(rng),
        bonus,
        proficiency: if proficient { PROFICIENCY_BONUS } else { 0 },
    }
}

/// Roll damage for an expression; a critical hit doubles the dice rolled.
pub fn damage(rng: &mut StdRng, expr: DiceExpr, critical: bool) -> DamageRoll {
    let count = if critical { expr.count * 2 } else { expr.count };
    let dice = (0..count).map(|_| rng.random_range(1..=expr.sides)).collect();
    DamageRoll {
        dice,
        bonus: expr.bonus,
        critical,
    }
}

fn write_mod(f: &mut fmt::Formatter<'_>, value: i32) -> fmt::Result {
    if value > 0 {
        write!(f, " + {value}")
    } else if value < 0 {
        write!(f, " - {}", -value)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn check_is_in_range_and_adds_modifier() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let roll = check(&mut rng, 3);
            assert!((1..=20).contains(&roll.die));
            assert_eq!(roll.total(), roll.die as i32 + 3);
        }
    }

    #[test]
    fn attack_applies_proficiency() {
        let mut rng = StdRng::seed_from_u64(42);
        let proficient = attack(&mut rng, 1, true);
        assert_eq!(proficient.proficiency, PROFICIENCY_BONUS);
        assert_eq!(
            proficient.total(),
            proficient.die as i32 + 1 + PROFICIENCY_BONUS
        );

        let unskilled = attack(&mut rng, 1, false);
        assert_eq!(unskilled.proficiency, 0);
    }

    #[test]
    fn damage_rolls_expression_dice() {
        let mut rng = StdRng::seed_from_u64(42);
        let roll = damage(&mut rng, DiceExpr::new(2, 6, 1), false);
        assert_eq!(roll.dice.len(), 2);
        assert!(roll.dice.iter().all(|d| (1..=6).contains(d)));
        assert_eq!(roll.total(), roll.dice.iter().sum::<u32>() as i32 + 1);
    }

    #[test]
    fn critical_doubles_dice_not_bonus() {
        let mut rng = StdRng::seed_from_u64(42);
        let roll = damage(&mut rng, DiceExpr::new(2, 6, 3), true);
        assert_eq!(roll.dice.len(), 4);
        assert_eq!(roll.bonus, 3);
        assert!(roll.critical);
    }

    #[test]
    fn deterministic_under_fixed_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(check(&mut a, 0).die, check(&mut b, 0).die);
    }

    #[test]
    fn display_shows_components() {
        let roll = CheckRoll {
            die: 14,
            modifier: 3,
        };
        assert_eq!(roll.to_string(), "d20 (14) + 3 = 17");

        let roll = CheckRoll {
            die: 14,
            modifier: -1,
        };
        assert_eq!(roll.to_string(), "d20 (14) - 1 = 13");

        let roll = AttackRoll {
            die: 9,
            bonus: 1,
            proficiency: 2,
        };
        assert_eq!(roll.to_string(), "d20 (9) + 1 + 2 = 12");

        let roll = DamageRoll {
            dice: vec![3, 5],
            bonus: 1,
            critical: false,
        };
        assert_eq!(roll.to_string(), "[3, 5] + 1 = 9");
    }
}
