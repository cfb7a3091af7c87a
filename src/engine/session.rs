use serde::{Deserialize, Serialize};

use crate::domain::bet::BetTarget;
use crate::domain::chips::Chips;
use crate::domain::table::{BlackjackTable, CasinoConfig, RouletteTable};
use crate::domain::wallet::Wallet;
use crate::engine::actions::BlackjackAction;
use crate::engine::blackjack::{self, RoundStatus};
use crate::engine::errors::EngineError;
use crate::engine::roulette::{self, SpinReport};
use crate::engine::validation;
use crate::engine::RandomSource;

/// Игровая сессия: один кошелёк и оба стола.
///
/// Объект принадлежит вызывающему коду — никаких глобальных синглтонов.
/// Методы оборачивают свободные функции движка, RNG передаётся в каждый
/// вызов, которому нужна случайность.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CasinoSession {
    pub config: CasinoConfig,
    pub wallet: Wallet,
    pub blackjack: BlackjackTable,
    pub roulette: RouletteTable,
}

impl CasinoSession {
    /// Новая сессия со стартовым стеком из конфига.
    pub fn new(config: CasinoConfig) -> Self {
        let wallet = Wallet::new(config.starting_stake);
        Self {
            config,
            wallet,
            blackjack: BlackjackTable::new(),
            roulette: RouletteTable::new(),
        }
    }

    // --- Блэкджек ---

    /// Добавить фишку к ставке на следующий раунд.
    pub fn stage_chip(&mut self, amount: Chips) -> Result<(), EngineError> {
        blackjack::stage_chip(&mut self.blackjack, &self.wallet, amount)
    }

    /// Сбросить отложенную ставку.
    pub fn clear_staged_bet(&mut self) -> Result<(), EngineError> {
        blackjack::clear_staged_bet(&mut self.blackjack)
    }

    /// Раздать карты на отложенную ставку.
    pub fn deal<R: RandomSource>(&mut self, rng: &mut R) -> Result<RoundStatus, EngineError> {
        let bet = self.blackjack.staged_bet;
        blackjack::start_round(&mut self.blackjack, &mut self.wallet, rng, bet)
    }

    /// Раздать карты на явную ставку, минуя стейджинг.
    pub fn start_round<R: RandomSource>(
        &mut self,
        rng: &mut R,
        bet: Chips,
    ) -> Result<RoundStatus, EngineError> {
        blackjack::start_round(&mut self.blackjack, &mut self.wallet, rng, bet)
    }

    /// Ход по активной руке.
    pub fn apply_action<R: RandomSource>(
        &mut self,
        rng: &mut R,
        action: BlackjackAction,
    ) -> Result<RoundStatus, EngineError> {
        blackjack::apply_action(&mut self.blackjack, &mut self.wallet, rng, action)
    }

    // --- Рулетка ---

    /// Поставить на номер или цвет.
    pub fn place_roulette_bet(
        &mut self,
        amount: Chips,
        target: BetTarget,
    ) -> Result<(), EngineError> {
        roulette::place_bet(&mut self.roulette, &mut self.wallet, amount, target)
    }

    /// Снять активную ставку с возвратом. Возвращает сумму возврата.
    pub fn clear_roulette_bet(&mut self) -> Result<Chips, EngineError> {
        roulette::clear_bet(&mut self.roulette, &mut self.wallet)
    }

    /// Крутануть колесо.
    pub fn spin<R: RandomSource>(&mut self, rng: &mut R) -> Result<SpinReport, EngineError> {
        roulette::spin(&mut self.roulette, &mut self.wallet, rng)
    }

    // --- Общее ---

    /// Пополнить пустой кошелёк до стартового стека.
    /// Отложенная блэкджек-ставка при этом сбрасывается.
    pub fn recharge(&mut self) -> Result<(), EngineError> {
        validation::ensure_can_recharge(&self.wallet, &self.blackjack, &self.roulette)?;

        self.wallet.recharge(self.config.starting_stake);
        self.blackjack.staged_bet = Chips::ZERO;

        Ok(())
    }
}
