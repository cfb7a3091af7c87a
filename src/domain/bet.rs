use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::wheel::{Pocket, PocketColor};

/// Выплата за угаданный номер (ставка x36).
pub const STRAIGHT_PAYOUT: u64 = 36;
/// Выплата за угаданный цвет (ставка x2).
pub const COLOR_PAYOUT: u64 = 2;

/// Цель ставки в рулетке. Либо конкретный карман, либо цвет.
/// На зелёный цвет ставить нельзя — такого варианта просто нет.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BetTarget {
    Pocket(Pocket),
    Red,
    Black,
}

impl BetTarget {
    /// Сыграла ли цель на выпавшем кармане.
    pub fn matches(&self, pocket: Pocket) -> bool {
        match self {
            BetTarget::Pocket(target) => *target == pocket,
            BetTarget::Red => pocket.color() == PocketColor::Red,
            BetTarget::Black => pocket.color() == PocketColor::Black,
        }
    }

    pub fn payout_multiplier(&self) -> u64 {
        match self {
            BetTarget::Pocket(_) => STRAIGHT_PAYOUT,
            BetTarget::Red | BetTarget::Black => COLOR_PAYOUT,
        }
    }
}

impl fmt::Display for BetTarget {
    /// Формат вида `17`, `All on Red`, `All on Black`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetTarget::Pocket(p) => write!(f, "{p}"),
            BetTarget::Red => write!(f, "All on Red"),
            BetTarget::Black => write!(f, "All on Black"),
        }
    }
}

/// Активная ставка: сколько поставлено и на что.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bet {
    pub amount: Chips,
    pub target: BetTarget,
}

impl Bet {
    pub fn new(amount: Chips, target: BetTarget) -> Self {
        Self { amount, target }
    }
}
