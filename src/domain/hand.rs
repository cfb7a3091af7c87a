use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};
use crate::domain::chips::Chips;

/// Верхняя граница очков: всё, что больше — перебор.
pub const BLACKJACK: u8 = 21;

/// Сумма очков набора карт с мягким тузом: каждый туз считается как 11,
/// затем по одному понижается до 1, пока сумма больше 21.
/// Пустой набор даёт 0.
pub fn hand_total(cards: &[Card]) -> u8 {
    let mut total: u8 = cards.iter().map(|c| c.blackjack_value()).sum();
    let mut aces = cards.iter().filter(|c| c.rank == Rank::Ace).count();

    while total > BLACKJACK && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}

/// Рука игрока в блэкджеке: карты плюс ставка и флаги хода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerHand {
    pub cards: Vec<Card>,
    /// Ставка, закреплённая за этой рукой (после сплита у каждой руки своя).
    pub bet: Chips,
    /// Рука закончила ход (stand, перебор или дабл).
    pub done: bool,
    /// По руке уже был double down — второй раз нельзя.
    pub doubled: bool,
}

impl PlayerHand {
    pub fn new(bet: Chips) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            done: false,
            doubled: false,
        }
    }

    pub fn total(&self) -> u8 {
        hand_total(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Пара для сплита: ровно две карты одного РАНГА.
    /// K и Q — это десятки по очкам, но НЕ пара.
    pub fn is_pair(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.rank == b.rank)
    }
}

/// Исход одной руки при расчёте раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandResult {
    Win,
    Push,
    Loss,
}

/// Результат конкретной руки: сколько очков набрала и сколько фишек вернулось.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandOutcome {
    pub hand_index: usize,
    pub total: u8,
    pub bet: Chips,
    pub result: HandResult,
    /// Зачисление в кошелёк: выигрыш = 2x ставки, пуш = возврат ставки,
    /// проигрыш = 0.
    pub payout: Chips,
}

/// Краткое описание завершённого раунда. Удобно для статуса/истории.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    pub dealer_total: u8,
    pub outcomes: Vec<HandOutcome>,
    pub wins: u32,
    pub pushes: u32,
    pub losses: u32,
    pub total_payout: Chips,
}
