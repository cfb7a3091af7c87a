use serde::{Deserialize, Serialize};

use crate::domain::bet::{Bet, BetTarget};
use crate::domain::chips::Chips;
use crate::domain::table::RouletteTable;
use crate::domain::wallet::Wallet;
use crate::domain::wheel::{Pocket, PocketColor};
use crate::engine::errors::EngineError;
use crate::engine::validation;
use crate::engine::RandomSource;

/// Итог одного вращения. Состояние стола результат не хранит —
/// после спина активной ставки уже нет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpinReport {
    pub pocket: Pocket,
    pub color: PocketColor,
    pub amount: Chips,
    pub target: BetTarget,
    /// Зачисление в кошелёк: 0 при проигрыше (ставка списана при размещении).
    pub payout: Chips,
    pub won: bool,
}

/// Поставить фишки на номер или цвет. Списывает сразу.
pub fn place_bet(
    table: &mut RouletteTable,
    wallet: &mut Wallet,
    amount: Chips,
    target: BetTarget,
) -> Result<(), EngineError> {
    validation::ensure_can_place_bet(table, wallet, amount)?;

    wallet.debit(amount);
    table.active_bet = Some(Bet::new(amount, target));

    Ok(())
}

/// Снять активную ставку с полным возвратом фишек.
pub fn clear_bet(table: &mut RouletteTable, wallet: &mut Wallet) -> Result<Chips, EngineError> {
    validation::ensure_can_clear_bet(table)?;

    let bet = table
        .active_bet
        .take()
        .ok_or(EngineError::Internal("ставка исчезла после проверки"))?;
    wallet.credit(bet.amount);

    Ok(bet.amount)
}

/// Крутануть колесо: равновероятный карман из 38, расчёт ставки,
/// ставка снимается при любом исходе. Каждый спин независим.
pub fn spin<R: RandomSource>(
    table: &mut RouletteTable,
    wallet: &mut Wallet,
    rng: &mut R,
) -> Result<SpinReport, EngineError> {
    validation::ensure_can_spin(table)?;

    let bet = table
        .active_bet
        .take()
        .ok_or(EngineError::Internal("ставка исчезла после проверки"))?;

    let pocket = Pocket::ALL[rng.pick_index(Pocket::ALL.len())];
    let payout = resolve_bet(&bet, pocket);
    let won = !payout.is_zero();

    if won {
        wallet.credit(payout);
    }

    Ok(SpinReport {
        pocket,
        color: pocket.color(),
        amount: bet.amount,
        target: bet.target,
        payout,
        won,
    })
}

/// Чистый расчёт ставки по выпавшему карману: сумма выплаты,
/// 0 при проигрыше. Номер платит 36 к 1 от ставки, цвет — 2 к 1.
pub fn resolve_bet(bet: &Bet, pocket: Pocket) -> Chips {
    if bet.target.matches(pocket) {
        bet.amount.saturating_mul(bet.target.payout_multiplier())
    } else {
        Chips::ZERO
    }
}
