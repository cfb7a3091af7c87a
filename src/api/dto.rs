use serde::{Deserialize, Serialize};

use crate::domain::bet::Bet;
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::RoundSummary;
use crate::engine::roulette::SpinReport;

/// DTO одной руки игрока.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerHandDto {
    pub cards: Vec<Card>,
    pub total: u8,
    pub bet: Chips,
    pub done: bool,
    pub doubled: bool,
    /// Именно эта рука сейчас ходит.
    pub is_active: bool,
}

/// DTO руки дилера.
///
/// Пока раунд идёт, закрытая карта отдаётся как `None`, а вместо полной
/// суммы фронт показывает очки открытой карты ("7 + ?"). После расчёта
/// видно всё.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DealerHandDto {
    /// Карты в порядке раздачи; `None` — закрытая карта.
    pub cards: Vec<Option<Card>>,
    /// Сумма всех карт. `None`, пока рука скрыта или пуста.
    pub total: Option<u8>,
    /// Очки открытой карты при живом раунде.
    pub up_card_value: Option<u8>,
}

/// Снапшот блэкджек-стола с флагами доступности кнопок.
/// Флаги считаются теми же проверками, что и команды,
/// поэтому "кнопка горит" означает "команда пройдёт".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlackjackViewDto {
    pub chips: Chips,
    pub staged_bet: Chips,
    pub round_over: bool,
    /// Номиналы фишек для кнопок ставки.
    pub chip_values: Vec<Chips>,
    pub dealer: DealerHandDto,
    pub hands: Vec<PlayerHandDto>,
    /// Индекс активной руки. `None` между раундами.
    pub active_hand: Option<usize>,

    pub can_stage: bool,
    pub can_clear_bet: bool,
    pub can_deal: bool,
    pub can_hit: bool,
    pub can_stand: bool,
    pub can_split: bool,
    pub can_double: bool,
    pub can_all_in: bool,
    pub can_recharge: bool,
}

/// Снапшот рулеточного стола.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouletteViewDto {
    pub chips: Chips,
    pub chip_values: Vec<Chips>,
    pub active_bet: Option<Bet>,

    pub can_place_bet: bool,
    pub can_spin: bool,
    pub can_clear_bet: bool,
    pub can_recharge: bool,
}

/// Ответ API на команду. Всегда несёт статусную строку для игрока
/// и снапшот состояния после команды.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CommandResponse {
    /// Состояние блэкджек-стола после команды.
    Blackjack {
        message: String,
        view: BlackjackViewDto,
        /// Итог раунда, если команда его завершила.
        summary: Option<RoundSummary>,
    },

    /// Состояние рулетки после команды.
    Roulette {
        message: String,
        view: RouletteViewDto,
        /// Итог вращения, если команда была спином.
        spin: Option<SpinReport>,
    },

    /// Кошелёк пополнен.
    Recharged { message: String, balance: Chips },
}

impl CommandResponse {
    /// Статусная строка любого варианта ответа.
    pub fn message(&self) -> &str {
        match self {
            CommandResponse::Blackjack { message, .. } => message,
            CommandResponse::Roulette { message, .. } => message,
            CommandResponse::Recharged { message, .. } => message,
        }
    }
}
