//! Предусловия всех операций. Движок зовёт `ensure_*` ПЕРЕД любой мутацией,
//! DTO-слой строит из тех же проверок флаги доступности кнопок,
//! поэтому "кнопка активна" и "команда пройдёт" не могут разойтись.

use crate::domain::chips::Chips;
use crate::domain::hand::PlayerHand;
use crate::domain::table::{BlackjackTable, RouletteTable};
use crate::domain::wallet::Wallet;
use crate::engine::actions::BlackjackAction;
use crate::engine::errors::EngineError;

/// Проверка действия по активной руке при текущем состоянии стола.
pub fn validate_blackjack_action(
    table: &BlackjackTable,
    wallet: &Wallet,
    action: BlackjackAction,
) -> Result<(), EngineError> {
    match action {
        BlackjackAction::Hit => ensure_can_hit(table),
        BlackjackAction::Stand => ensure_can_stand(table),
        BlackjackAction::Split => ensure_can_split(table, wallet),
        BlackjackAction::DoubleDown => ensure_can_double(table, wallet),
        BlackjackAction::AllIn => ensure_can_all_in(table, wallet),
    }
}

/// Активная рука, если раунд вообще идёт.
fn active_hand(table: &BlackjackTable) -> Result<&PlayerHand, EngineError> {
    if table.round_over {
        return Err(EngineError::NoActiveRound);
    }
    table
        .player_hands
        .get(table.active_hand)
        .ok_or(EngineError::NoActiveRound)
}

pub fn ensure_can_stage_chip(
    table: &BlackjackTable,
    wallet: &Wallet,
    amount: Chips,
) -> Result<(), EngineError> {
    if !table.round_over {
        return Err(EngineError::RoundInProgress);
    }
    if amount.is_zero() {
        return Err(EngineError::ZeroBet);
    }
    if table.staged_bet + amount > wallet.chips {
        return Err(EngineError::NotEnoughChips);
    }
    Ok(())
}

pub fn ensure_can_clear_staged(table: &BlackjackTable) -> Result<(), EngineError> {
    if !table.round_over {
        return Err(EngineError::RoundInProgress);
    }
    Ok(())
}

pub fn ensure_can_start_round(
    table: &BlackjackTable,
    wallet: &Wallet,
    bet: Chips,
) -> Result<(), EngineError> {
    if !table.round_over {
        return Err(EngineError::RoundInProgress);
    }
    if bet.is_zero() {
        return Err(EngineError::NoStagedBet);
    }
    if !wallet.can_afford(bet) {
        return Err(EngineError::NotEnoughChips);
    }
    Ok(())
}

pub fn ensure_can_hit(table: &BlackjackTable) -> Result<(), EngineError> {
    let hand = active_hand(table)?;
    if hand.done {
        return Err(EngineError::HandAlreadyDone);
    }
    Ok(())
}

pub fn ensure_can_stand(table: &BlackjackTable) -> Result<(), EngineError> {
    ensure_can_hit(table)
}

pub fn ensure_can_split(table: &BlackjackTable, wallet: &Wallet) -> Result<(), EngineError> {
    let hand = active_hand(table)?;
    // Сплит только один раз за раунд и только на паре.
    if table.player_hands.len() != 1 || !hand.is_pair() {
        return Err(EngineError::CannotSplit);
    }
    if !wallet.can_afford(hand.bet) {
        return Err(EngineError::NotEnoughChips);
    }
    Ok(())
}

pub fn ensure_can_double(table: &BlackjackTable, wallet: &Wallet) -> Result<(), EngineError> {
    let hand = active_hand(table)?;
    if hand.done {
        return Err(EngineError::HandAlreadyDone);
    }
    if hand.cards.len() != 2 || hand.doubled {
        return Err(EngineError::CannotDouble);
    }
    if !wallet.can_afford(hand.bet) {
        return Err(EngineError::NotEnoughChips);
    }
    Ok(())
}

pub fn ensure_can_all_in(table: &BlackjackTable, wallet: &Wallet) -> Result<(), EngineError> {
    let hand = active_hand(table)?;
    if hand.done {
        return Err(EngineError::HandAlreadyDone);
    }
    if wallet.is_broke() {
        return Err(EngineError::NotEnoughChips);
    }
    Ok(())
}

pub fn ensure_can_place_bet(
    table: &RouletteTable,
    wallet: &Wallet,
    amount: Chips,
) -> Result<(), EngineError> {
    if table.has_active_bet() {
        return Err(EngineError::BetAlreadyPlaced);
    }
    if amount.is_zero() {
        return Err(EngineError::ZeroBet);
    }
    if !wallet.can_afford(amount) {
        return Err(EngineError::NotEnoughChips);
    }
    Ok(())
}

pub fn ensure_can_clear_bet(table: &RouletteTable) -> Result<(), EngineError> {
    if !table.has_active_bet() {
        return Err(EngineError::NoActiveBet);
    }
    Ok(())
}

pub fn ensure_can_spin(table: &RouletteTable) -> Result<(), EngineError> {
    if !table.has_active_bet() {
        return Err(EngineError::NoActiveBet);
    }
    Ok(())
}

/// Пополнение общее для обеих игр: кошелёк должен быть пуст,
/// блэкджек-раунд закончен, рулеточная ставка снята или разыграна.
pub fn ensure_can_recharge(
    wallet: &Wallet,
    blackjack: &BlackjackTable,
    roulette: &RouletteTable,
) -> Result<(), EngineError> {
    if !blackjack.round_over {
        return Err(EngineError::RoundInProgress);
    }
    if roulette.has_active_bet() {
        return Err(EngineError::BetStillPending);
    }
    if !wallet.is_broke() {
        return Err(EngineError::WalletNotEmpty);
    }
    Ok(())
}

// Булевы обёртки для флагов доступности в снапшотах.

pub fn can_hit(table: &BlackjackTable) -> bool {
    ensure_can_hit(table).is_ok()
}

pub fn can_stand(table: &BlackjackTable) -> bool {
    ensure_can_stand(table).is_ok()
}

pub fn can_split(table: &BlackjackTable, wallet: &Wallet) -> bool {
    ensure_can_split(table, wallet).is_ok()
}

pub fn can_double(table: &BlackjackTable, wallet: &Wallet) -> bool {
    ensure_can_double(table, wallet).is_ok()
}

pub fn can_all_in(table: &BlackjackTable, wallet: &Wallet) -> bool {
    ensure_can_all_in(table, wallet).is_ok()
}

/// Раздача пройдёт прямо сейчас с уже отложенной ставкой.
pub fn can_deal(table: &BlackjackTable, wallet: &Wallet) -> bool {
    ensure_can_start_round(table, wallet, table.staged_bet).is_ok()
}

/// Можно ли добавить хоть одну фишку к будущей ставке.
pub fn can_stage_more(table: &BlackjackTable, wallet: &Wallet) -> bool {
    table.round_over && table.staged_bet < wallet.chips
}

pub fn can_clear_staged(table: &BlackjackTable) -> bool {
    ensure_can_clear_staged(table).is_ok()
}

/// Можно ли поставить хоть что-то (без конкретной суммы).
pub fn can_place_any(table: &RouletteTable, wallet: &Wallet) -> bool {
    !table.has_active_bet() && !wallet.is_broke()
}

pub fn can_spin(table: &RouletteTable) -> bool {
    ensure_can_spin(table).is_ok()
}

pub fn can_clear_bet(table: &RouletteTable) -> bool {
    ensure_can_clear_bet(table).is_ok()
}

pub fn can_recharge(
    wallet: &Wallet,
    blackjack: &BlackjackTable,
    roulette: &RouletteTable,
) -> bool {
    ensure_can_recharge(wallet, blackjack, roulette).is_ok()
}
