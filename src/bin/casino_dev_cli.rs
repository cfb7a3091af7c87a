// src/bin/casino_dev_cli.rs

use casino_engine::api::{
    answer_query, execute_command, BlackjackCommand, Command, CommandResponse, Query,
    QueryResponse, RouletteCommand,
};
use casino_engine::domain::bet::BetTarget;
use casino_engine::domain::card::Card;
use casino_engine::domain::chips::Chips;
use casino_engine::domain::table::CasinoConfig;
use casino_engine::engine::CasinoSession;
use casino_engine::infra::SystemRng;

fn main() {
    println!("casino_dev_cli: стартуем dev-CLI казино…");

    // 1. Инициализация RNG и сессии
    let mut rng = SystemRng::default();
    let mut session = CasinoSession::new(CasinoConfig::default());

    println!(
        "[CLI] Сессия создана: баланс={}, номиналы фишек: {}.",
        session.wallet.chips,
        fmt_chip_values(&session.config.chip_values),
    );

    // 2. Блэкджек: набираем ставку из двух фишек и раздаём
    println!();
    println!("================ BLACKJACK ROUND =================");

    run_command(
        &mut session,
        &mut rng,
        Command::Blackjack(BlackjackCommand::StageChip {
            amount: Chips::new(50),
        }),
    );
    run_command(
        &mut session,
        &mut rng,
        Command::Blackjack(BlackjackCommand::StageChip {
            amount: Chips::new(50),
        }),
    );
    run_command(&mut session, &mut rng, Command::Blackjack(BlackjackCommand::Deal));
    debug_print_blackjack_state(&session);

    play_blackjack_round(&mut session, &mut rng);
    debug_print_blackjack_state(&session);

    // 3. Отказы: ход вне раунда движок должен отклонить
    println!();
    println!("================ REJECTION CHECK =================");
    run_command(&mut session, &mut rng, Command::Blackjack(BlackjackCommand::Hit));

    // 4. Рулетка: ставка на красное и спин
    println!();
    println!("================ ROULETTE SPIN =================");

    run_command(
        &mut session,
        &mut rng,
        Command::Roulette(RouletteCommand::PlaceBet {
            amount: Chips::new(100),
            target: BetTarget::Red,
        }),
    );
    debug_print_roulette_state(&session);

    if let Some(CommandResponse::Roulette {
        spin: Some(report), ..
    }) = run_command(&mut session, &mut rng, Command::Roulette(RouletteCommand::Spin))
    {
        println!(
            "[CLI] Спин: карман={} ({}), ставка {} на {}, выплата={}, победа={}.",
            report.pocket, report.color, report.amount, report.target, report.payout, report.won,
        );
    }
    debug_print_roulette_state(&session);

    // 5. Recharge на непустом кошельке: ждём отказ движка
    println!();
    println!("================ RECHARGE CHECK =================");
    run_command(&mut session, &mut rng, Command::Recharge);

    // 6. Финальный снапшот блэкджек-стола в JSON
    println!();
    println!("================ JSON DUMP =================");
    match answer_query(&session, Query::BlackjackView) {
        QueryResponse::Blackjack(view) => match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{json}"),
            Err(e) => println!("[CLI] ОШИБКА сериализации вью: {e}"),
        },
        other => println!("[CLI] BUG: неожиданный ответ на BlackjackView: {other:?}"),
    }

    println!();
    println!("[CLI] Завершение работы dev-CLI.");
}

/// Выполнить команду и напечатать статус либо причину отказа.
fn run_command(
    session: &mut CasinoSession,
    rng: &mut SystemRng,
    command: Command,
) -> Option<CommandResponse> {
    println!("[CLI] -> {command:?}");
    match execute_command(session, rng, command) {
        Ok(response) => {
            println!("[CLI] {}", response.message());
            Some(response)
        }
        Err(e) => {
            println!("[CLI] ОТКАЗ: {}", e.reason());
            None
        }
    }
}

/// Доигрывание раунда простейшей стратегией: тянем до 17, дальше стоим.
fn play_blackjack_round(session: &mut CasinoSession, rng: &mut SystemRng) {
    const MAX_STEPS: u32 = 30;
    let mut step: u32 = 0;

    loop {
        step += 1;
        if step > MAX_STEPS {
            println!("[CLI] Превышен лимит шагов ({MAX_STEPS}), выходим.");
            break;
        }

        let view = match answer_query(session, Query::BlackjackView) {
            QueryResponse::Blackjack(v) => v,
            other => {
                println!("[CLI] BUG: неожиданный ответ на BlackjackView: {other:?}");
                break;
            }
        };

        if view.round_over {
            println!("[CLI] Раунд уже завершён логикой движка.");
            break;
        }

        let hand = match view.active_hand.and_then(|i| view.hands.get(i)) {
            Some(h) => h,
            None => {
                println!("[CLI] BUG: активная рука не найдена в снапшоте.");
                break;
            }
        };

        let command = if hand.total < 17 && view.can_hit {
            BlackjackCommand::Hit
        } else {
            BlackjackCommand::Stand
        };

        println!(
            "[CLI][step={}] рука {}: {} (total={}) -> {:?}",
            step,
            view.active_hand.map(|i| i + 1).unwrap_or(0),
            fmt_cards(&hand.cards),
            hand.total,
            command,
        );

        match execute_command(session, rng, Command::Blackjack(command)) {
            Ok(response) => {
                println!("[CLI] {}", response.message());
                if let CommandResponse::Blackjack {
                    summary: Some(summary),
                    ..
                } = response
                {
                    println!("=== РАУНД ЗАВЕРШЁН ===");
                    println!(
                        "дилер={} побед={} пушей={} поражений={} выплата={}",
                        summary.dealer_total,
                        summary.wins,
                        summary.pushes,
                        summary.losses,
                        summary.total_payout,
                    );
                    for outcome in &summary.outcomes {
                        println!(
                            "  рука {} | total={} | ставка={} | {:?} | выплата={}",
                            outcome.hand_index + 1,
                            outcome.total,
                            outcome.bet,
                            outcome.result,
                            outcome.payout,
                        );
                    }
                    break;
                }
            }
            Err(e) => {
                println!("[CLI] ОШИБКА в команде блэкджека: {}", e.reason());
                break;
            }
        }
    }
}

// Печать состояния блэкджек-стола через API-слой (DTO).
fn debug_print_blackjack_state(session: &CasinoSession) {
    let view = match answer_query(session, Query::BlackjackView) {
        QueryResponse::Blackjack(v) => v,
        other => {
            println!("[DEBUG] неожиданный ответ на BlackjackView: {other:?}");
            return;
        }
    };

    println!("================ BLACKJACK STATE ================");
    println!(
        "chips={} staged_bet={} round_over={} active_hand={:?}",
        view.chips, view.staged_bet, view.round_over, view.active_hand,
    );
    println!(
        "дилер: {} | total={:?} | открытая карта={:?}",
        fmt_dealer_cards(&view.dealer.cards),
        view.dealer.total,
        view.dealer.up_card_value,
    );
    println!("руки игрока:");
    for (i, hand) in view.hands.iter().enumerate() {
        println!(
            "  рука {} | {} | total={} | bet={} | done={} | doubled={} | active={}",
            i + 1,
            fmt_cards(&hand.cards),
            hand.total,
            hand.bet,
            hand.done,
            hand.doubled,
            hand.is_active,
        );
    }
    println!(
        "кнопки: stage={} clear={} deal={} hit={} stand={} split={} double={} all_in={} recharge={}",
        view.can_stage,
        view.can_clear_bet,
        view.can_deal,
        view.can_hit,
        view.can_stand,
        view.can_split,
        view.can_double,
        view.can_all_in,
        view.can_recharge,
    );
    println!("=================================================");
}

// Печать состояния рулетки через API-слой (DTO).
fn debug_print_roulette_state(session: &CasinoSession) {
    let view = match answer_query(session, Query::RouletteView) {
        QueryResponse::Roulette(v) => v,
        other => {
            println!("[DEBUG] неожиданный ответ на RouletteView: {other:?}");
            return;
        }
    };

    println!("================ ROULETTE STATE ================");
    match &view.active_bet {
        Some(bet) => println!(
            "chips={} | ставка {} на {}",
            view.chips, bet.amount, bet.target
        ),
        None => println!("chips={} | ставки нет", view.chips),
    }
    println!(
        "кнопки: place={} spin={} clear={} recharge={}",
        view.can_place_bet, view.can_spin, view.can_clear_bet, view.can_recharge,
    );
    println!("================================================");
}

/// Карты руки одной строкой: "A♠ 10♦".
fn fmt_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "пусто".to_string();
    }
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Карты дилера; закрытая карта печатается как "??".
fn fmt_dealer_cards(cards: &[Option<Card>]) -> String {
    if cards.is_empty() {
        return "пусто".to_string();
    }
    cards
        .iter()
        .map(|c| match c {
            Some(card) => card.to_string(),
            None => "??".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn fmt_chip_values(values: &[Chips]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
