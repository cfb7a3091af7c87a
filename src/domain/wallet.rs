use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Кошелёк игрока. Один на сессию — блэкджек и рулетка тратят
/// и пополняют один и тот же баланс.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wallet {
    pub chips: Chips,
}

impl Wallet {
    pub fn new(chips: Chips) -> Self {
        Self { chips }
    }

    pub fn is_broke(&self) -> bool {
        self.chips.is_zero()
    }

    /// Хватает ли фишек на списание.
    pub fn can_afford(&self, amount: Chips) -> bool {
        self.chips >= amount
    }

    /// Списать фишки. Предусловие `can_afford` проверяет валидация,
    /// здесь только насыщающее вычитание.
    pub fn debit(&mut self, amount: Chips) {
        self.chips -= amount;
    }

    /// Зачислить фишки (выплата или возврат ставки).
    pub fn credit(&mut self, amount: Chips) {
        self.chips += amount;
    }

    /// Забрать весь остаток (для all-in). Кошелёк остаётся пустым.
    pub fn drain(&mut self) -> Chips {
        let taken = self.chips;
        self.chips = Chips::ZERO;
        taken
    }

    /// Восстановить баланс до стартового стека.
    pub fn recharge(&mut self, starting_stake: Chips) {
        self.chips = starting_stake;
    }
}
