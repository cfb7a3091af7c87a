use serde::{Deserialize, Serialize};

use crate::domain::bet::Bet;
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::PlayerHand;

/// Конфиг сессии: стартовый стек и номиналы фишек для ставок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CasinoConfig {
    /// Сколько фишек выдаётся на старте и при пополнении.
    pub starting_stake: Chips,
    /// Номиналы фишек, которыми набирается ставка.
    pub chip_values: Vec<Chips>,
}

impl Default for CasinoConfig {
    fn default() -> Self {
        Self {
            starting_stake: Chips(1000),
            chip_values: vec![Chips(10), Chips(50), Chips(100), Chips(200)],
        }
    }
}

/// Состояние блэкджек-стола.
///
/// Порядок карт дилера фиксирован: индекс 0 — закрытая карта,
/// индекс 1 — открытая. Руки игрока остаются на столе после расчёта,
/// чтобы их можно было показать; новая раздача всё сбрасывает.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlackjackTable {
    pub deck: Deck,

    pub dealer_hand: Vec<Card>,

    /// 0 рук до первой раздачи, 1–2 после (сплит даёт вторую).
    pub player_hands: Vec<PlayerHand>,

    /// Индекс руки, которая сейчас ходит.
    pub active_hand: usize,

    /// true между раундами: ставки и пополнение разрешены, ходы — нет.
    pub round_over: bool,

    /// Фишки, отложенные на следующий раунд. Кошелёк ещё не тронут —
    /// списание происходит при раздаче.
    pub staged_bet: Chips,
}

impl BlackjackTable {
    /// Пустой стол: колоды нет, раунд не идёт.
    pub fn new() -> Self {
        Self {
            deck: Deck { cards: Vec::new() },
            dealer_hand: Vec::new(),
            player_hands: Vec::new(),
            active_hand: 0,
            round_over: true,
            staged_bet: Chips::ZERO,
        }
    }

    /// Рука под индексом `active_hand`, если раунд идёт.
    pub fn current_hand(&self) -> Option<&PlayerHand> {
        if self.round_over {
            return None;
        }
        self.player_hands.get(self.active_hand)
    }

    pub fn current_hand_mut(&mut self) -> Option<&mut PlayerHand> {
        if self.round_over {
            return None;
        }
        self.player_hands.get_mut(self.active_hand)
    }
}

impl Default for BlackjackTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Состояние рулеточного стола: максимум одна активная ставка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouletteTable {
    /// Ставка ждёт вращения. Снимается спином или явной отменой.
    pub active_bet: Option<Bet>,
}

impl RouletteTable {
    pub fn new() -> Self {
        Self { active_bet: None }
    }

    pub fn has_active_bet(&self) -> bool {
        self.active_bet.is_some()
    }
}

impl Default for RouletteTable {
    fn default() -> Self {
        Self::new()
    }
}
