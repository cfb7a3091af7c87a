use serde::{Deserialize, Serialize};

use crate::domain::bet::BetTarget;
use crate::domain::chips::Chips;
use crate::domain::hand::RoundSummary;
use crate::domain::wallet::Wallet;
use crate::engine::actions::BlackjackAction;
use crate::engine::blackjack::RoundStatus;
use crate::engine::session::CasinoSession;
use crate::engine::RandomSource;

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::{build_blackjack_view, build_roulette_view};

/// Команда верхнего уровня.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Команда блэкджек-столу.
    Blackjack(BlackjackCommand),

    /// Команда рулеточному столу.
    Roulette(RouletteCommand),

    /// Пополнить пустой кошелёк. Общая команда для обеих игр.
    Recharge,
}

/// Команды блэкджека. Повторяют кнопки стола один в один.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum BlackjackCommand {
    /// Добавить фишку к ставке следующего раунда.
    StageChip { amount: Chips },

    /// Сбросить отложенную ставку.
    ClearBet,

    /// Раздать карты на отложенную ставку.
    Deal,

    Hit,
    Stand,
    Split,
    DoubleDown,
    AllIn,
}

/// Команды рулетки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum RouletteCommand {
    /// Поставить на номер или цвет. Фишки списываются сразу.
    PlaceBet { amount: Chips, target: BetTarget },

    /// Снять ставку с полным возвратом.
    ClearBet,

    /// Крутануть колесо.
    Spin,
}

/// Выполнить команду над сессией.
///
/// При отказе состояние не меняется, а причина уходит клиенту строкой.
/// При успехе ответ несёт статусную строку и свежий снапшот.
pub fn execute_command<R: RandomSource>(
    session: &mut CasinoSession,
    rng: &mut R,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::Blackjack(cmd) => execute_blackjack(session, rng, cmd),
        Command::Roulette(cmd) => execute_roulette(session, rng, cmd),
        Command::Recharge => {
            session.recharge()?;
            Ok(CommandResponse::Recharged {
                message: format!("Кошелёк пополнен до {}.", session.wallet.chips),
                balance: session.wallet.chips,
            })
        }
    }
}

fn execute_blackjack<R: RandomSource>(
    session: &mut CasinoSession,
    rng: &mut R,
    command: BlackjackCommand,
) -> Result<CommandResponse, ApiError> {
    let (message, summary) = match command {
        BlackjackCommand::StageChip { amount } => {
            session.stage_chip(amount)?;
            (
                format!(
                    "Ставка набрана: {}. Жмите Deal, когда будете готовы.",
                    session.blackjack.staged_bet
                ),
                None,
            )
        }

        BlackjackCommand::ClearBet => {
            session.clear_staged_bet()?;
            (
                "Ставка сброшена. Сделайте новую, чтобы играть.".to_string(),
                None,
            )
        }

        BlackjackCommand::Deal => {
            let status = session.deal(rng)?;
            describe_after_action(session, status, 0)
        }

        BlackjackCommand::Hit => {
            let before = session.blackjack.active_hand;
            let status = session.apply_action(rng, BlackjackAction::Hit)?;
            describe_after_action(session, status, before)
        }

        BlackjackCommand::Stand => {
            let before = session.blackjack.active_hand;
            let status = session.apply_action(rng, BlackjackAction::Stand)?;
            describe_after_action(session, status, before)
        }

        BlackjackCommand::Split => {
            session.apply_action(rng, BlackjackAction::Split)?;
            ("Сплит сделан. Сначала играет рука 1.".to_string(), None)
        }

        BlackjackCommand::DoubleDown => {
            let before = session.blackjack.active_hand;
            let status = session.apply_action(rng, BlackjackAction::DoubleDown)?;
            describe_after_action(session, status, before)
        }

        BlackjackCommand::AllIn => {
            let moved = session.wallet.chips;
            let hand_no = session.blackjack.active_hand + 1;
            session.apply_action(rng, BlackjackAction::AllIn)?;
            (format!("Рука {hand_no} в олл-ине (+{moved})."), None)
        }
    };

    Ok(CommandResponse::Blackjack {
        message,
        view: build_blackjack_view(session),
        summary,
    })
}

/// Статус после хода: либо раунд продолжается (той же рукой или
/// следующей), либо закончился и есть итог.
fn describe_after_action(
    session: &CasinoSession,
    status: RoundStatus,
    previous_hand: usize,
) -> (String, Option<RoundSummary>) {
    match status {
        RoundStatus::Finished(summary) => {
            let message = round_over_message(&summary, &session.wallet);
            (message, Some(summary))
        }
        RoundStatus::Ongoing => {
            if session.blackjack.active_hand != previous_hand {
                (
                    format!("Играет рука {}.", session.blackjack.active_hand + 1),
                    None,
                )
            } else {
                (
                    "Ваш ход: Hit, Stand, Split, Double Down или All In.".to_string(),
                    None,
                )
            }
        }
    }
}

fn round_over_message(summary: &RoundSummary, wallet: &Wallet) -> String {
    let base = format!(
        "Раунд окончен: побед {}, пушей {}, поражений {}.",
        summary.wins, summary.pushes, summary.losses
    );

    if wallet.is_broke() {
        format!("{base} Фишки кончились. Жмите Recharge.")
    } else {
        format!("{base} Делайте следующую ставку.")
    }
}

fn execute_roulette<R: RandomSource>(
    session: &mut CasinoSession,
    rng: &mut R,
    command: RouletteCommand,
) -> Result<CommandResponse, ApiError> {
    let (message, spin) = match command {
        RouletteCommand::PlaceBet { amount, target } => {
            session.place_roulette_bet(amount, target)?;
            (
                format!("Ставка принята: {amount} на {target}. Жмите Spin."),
                None,
            )
        }

        RouletteCommand::ClearBet => {
            let refunded = session.clear_roulette_bet()?;
            (format!("Ставка снята, возврат {refunded} фишек."), None)
        }

        RouletteCommand::Spin => {
            let report = session.spin(rng)?;
            let message = if report.won {
                format!(
                    "Шарик упал на {}. Выигрыш {} фишек!",
                    report.pocket, report.payout
                )
            } else {
                format!(
                    "Шарик упал на {}. Потеряно {} фишек.",
                    report.pocket, report.amount
                )
            };
            (message, Some(report))
        }
    };

    Ok(CommandResponse::Roulette {
        message,
        view: build_roulette_view(session),
        spin,
    })
}
