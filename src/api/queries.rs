use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::hand_total;
use crate::domain::table::BlackjackTable;
use crate::engine::session::CasinoSession;
use crate::engine::validation;

use super::dto::{BlackjackViewDto, DealerHandDto, PlayerHandDto, RouletteViewDto};

/// Запросы "только чтение".
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Снапшот блэкджек-стола.
    BlackjackView,

    /// Снапшот рулетки.
    RouletteView,

    /// Баланс общего кошелька.
    WalletBalance,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Blackjack(BlackjackViewDto),
    Roulette(RouletteViewDto),
    Balance(Chips),
}

pub fn answer_query(session: &CasinoSession, query: Query) -> QueryResponse {
    match query {
        Query::BlackjackView => QueryResponse::Blackjack(build_blackjack_view(session)),
        Query::RouletteView => QueryResponse::Roulette(build_roulette_view(session)),
        Query::WalletBalance => QueryResponse::Balance(session.wallet.chips),
    }
}

/// Сформировать DTO блэкджек-стола. Флаги кнопок считаются теми же
/// проверками валидации, что и сами команды.
pub fn build_blackjack_view(session: &CasinoSession) -> BlackjackViewDto {
    let table = &session.blackjack;
    let wallet = &session.wallet;

    let hands = table
        .player_hands
        .iter()
        .enumerate()
        .map(|(index, hand)| PlayerHandDto {
            cards: hand.cards.clone(),
            total: hand.total(),
            bet: hand.bet,
            done: hand.done,
            doubled: hand.doubled,
            is_active: !table.round_over && index == table.active_hand,
        })
        .collect();

    BlackjackViewDto {
        chips: wallet.chips,
        staged_bet: table.staged_bet,
        round_over: table.round_over,
        chip_values: session.config.chip_values.clone(),
        dealer: build_dealer_view(table),
        hands,
        active_hand: if table.round_over {
            None
        } else {
            Some(table.active_hand)
        },
        can_stage: validation::can_stage_more(table, wallet),
        can_clear_bet: validation::can_clear_staged(table),
        can_deal: validation::can_deal(table, wallet),
        can_hit: validation::can_hit(table),
        can_stand: validation::can_stand(table),
        can_split: validation::can_split(table, wallet),
        can_double: validation::can_double(table, wallet),
        can_all_in: validation::can_all_in(table, wallet),
        can_recharge: validation::can_recharge(wallet, table, &session.roulette),
    }
}

/// Рука дилера для фронта: пока раунд идёт, первая карта и полная сумма
/// скрыты, виден только номинал открытой карты.
fn build_dealer_view(table: &BlackjackTable) -> DealerHandDto {
    let concealed = !table.round_over;

    let cards = table
        .dealer_hand
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if concealed && index == 0 {
                None
            } else {
                Some(*card)
            }
        })
        .collect();

    let total = if concealed || table.dealer_hand.is_empty() {
        None
    } else {
        Some(hand_total(&table.dealer_hand))
    };

    let up_card_value = if concealed {
        table.dealer_hand.get(1).map(|card| card.blackjack_value())
    } else {
        None
    };

    DealerHandDto {
        cards,
        total,
        up_card_value,
    }
}

/// Сформировать DTO рулеточного стола.
pub fn build_roulette_view(session: &CasinoSession) -> RouletteViewDto {
    let table = &session.roulette;
    let wallet = &session.wallet;

    RouletteViewDto {
        chips: wallet.chips,
        chip_values: session.config.chip_values.clone(),
        active_bet: table.active_bet,
        can_place_bet: validation::can_place_any(table, wallet),
        can_spin: validation::can_spin(table),
        can_clear_bet: validation::can_clear_bet(table),
        can_recharge: validation::can_recharge(wallet, &session.blackjack, table),
    }
}
