// tests/engine_error_tests.rs
//
// Отказы движка. Мы тестируем:
//  1) Ставки вне своего окна: стейджинг и раздача посреди раунда
//  2) Нулевые и неподъёмные ставки в блэкджеке
//  3) Ходы без активного раунда и по закрытой руке
//  4) Сплит: не пара, вторая рука, нехватка фишек
//  5) Дабл: не две карты, повторный дабл, нехватка фишек
//  6) All-in с пустым кошельком
//  7) Рулетка: двойная ставка, нулевая ставка, спин и отмена без ставки
//  8) Recharge: непустой кошелёк, живой раунд, висящая ставка рулетки
//
// Отдельно проверяем, что отклонённая команда не меняет состояние.

use casino_engine::domain::bet::BetTarget;
use casino_engine::domain::card::{Card, Rank, Suit};
use casino_engine::domain::chips::Chips;
use casino_engine::domain::deck::Deck;
use casino_engine::domain::hand::PlayerHand;
use casino_engine::domain::table::{BlackjackTable, RouletteTable};
use casino_engine::domain::wallet::Wallet;
use casino_engine::engine::actions::BlackjackAction;
use casino_engine::engine::blackjack::{apply_action, stage_chip, start_round};
use casino_engine::engine::errors::EngineError;
use casino_engine::engine::roulette::{clear_bet, place_bet, spin};
use casino_engine::engine::validation::ensure_can_recharge;
use casino_engine::engine::RandomSource;

/// Простой детерминированный RNG для тестов:
/// shuffle ничего не делает, pick_index всегда отдаёт 0.
#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }

    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}

/// Утилита: карта удобным конструктором.
fn card(rank: Rank, suit: Suit) -> Card {
    Card { rank, suit }
}

/// Утилита: живой раунд с одной рукой и заданным остатком колоды.
fn live_round(player_cards: Vec<Card>, bet: u64, deck_cards: Vec<Card>) -> BlackjackTable {
    let mut hand = PlayerHand::new(Chips(bet));
    hand.cards = player_cards;

    let mut table = BlackjackTable::new();
    table.deck = Deck { cards: deck_cards };
    table.dealer_hand = vec![
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Seven, Suit::Diamonds),
    ];
    table.player_hands = vec![hand];
    table.active_hand = 0;
    table.round_over = false;
    table
}

//
// 1) Ставки вне своего окна
//

#[test]
fn staging_is_rejected_mid_round() {
    let table_before = live_round(
        vec![card(Rank::Five, Suit::Spades), card(Rank::Six, Suit::Spades)],
        100,
        Vec::new(),
    );
    let mut table = table_before.clone();
    let wallet = Wallet::new(Chips(900));

    let result = stage_chip(&mut table, &wallet, Chips(50));
    assert!(matches!(result, Err(EngineError::RoundInProgress)));

    // отказ ничего не изменил
    assert_eq!(table, table_before);
}

#[test]
fn deal_is_rejected_mid_round() {
    let mut table = live_round(
        vec![card(Rank::Five, Suit::Spades), card(Rank::Six, Suit::Spades)],
        100,
        Vec::new(),
    );
    let mut wallet = Wallet::new(Chips(900));
    let mut rng = DummyRng;

    let result = start_round(&mut table, &mut wallet, &mut rng, Chips(100));
    assert!(matches!(result, Err(EngineError::RoundInProgress)));
    assert_eq!(wallet.chips, Chips(900));
}

//
// 2) Нулевые и неподъёмные ставки
//

#[test]
fn zero_and_oversized_bets_are_rejected() {
    let mut table = BlackjackTable::new();
    let mut wallet = Wallet::new(Chips(100));
    let mut rng = DummyRng;

    let result = stage_chip(&mut table, &wallet, Chips::ZERO);
    assert!(matches!(result, Err(EngineError::ZeroBet)));

    // стейджинг сверх кошелька
    stage_chip(&mut table, &wallet, Chips(100)).unwrap();
    let result = stage_chip(&mut table, &wallet, Chips(10));
    assert!(matches!(result, Err(EngineError::NotEnoughChips)));
    assert_eq!(table.staged_bet, Chips(100));

    // раздача без ставки и раздача не по карману
    table.staged_bet = Chips::ZERO;
    let result = start_round(&mut table, &mut wallet, &mut rng, Chips::ZERO);
    assert!(matches!(result, Err(EngineError::NoStagedBet)));

    let result = start_round(&mut table, &mut wallet, &mut rng, Chips(101));
    assert!(matches!(result, Err(EngineError::NotEnoughChips)));
    assert_eq!(wallet.chips, Chips(100));
    assert!(table.round_over);
}

//
// 3) Ходы вне раунда и по закрытой руке
//

#[test]
fn actions_require_an_active_round() {
    let mut table = BlackjackTable::new();
    let mut wallet = Wallet::new(Chips(1000));
    let mut rng = DummyRng;

    for action in [
        BlackjackAction::Hit,
        BlackjackAction::Stand,
        BlackjackAction::Split,
        BlackjackAction::DoubleDown,
        BlackjackAction::AllIn,
    ] {
        let result = apply_action(&mut table, &mut wallet, &mut rng, action);
        assert!(
            matches!(result, Err(EngineError::NoActiveRound)),
            "action {action:?} must be rejected without a round"
        );
    }

    assert_eq!(wallet.chips, Chips(1000));
}

#[test]
fn finished_hand_cannot_act_again() {
    let mut table = live_round(
        vec![card(Rank::Ten, Suit::Spades), card(Rank::Nine, Suit::Spades)],
        100,
        Vec::new(),
    );
    // рука закрыта, но раунд формально ещё жив (вторая рука играла бы дальше)
    table.player_hands[0].done = true;
    let mut second = PlayerHand::new(Chips(100));
    second.cards = vec![card(Rank::Five, Suit::Clubs), card(Rank::Six, Suit::Clubs)];
    table.player_hands.push(second);

    let mut wallet = Wallet::new(Chips(800));
    let mut rng = DummyRng;

    let result = apply_action(&mut table, &mut wallet, &mut rng, BlackjackAction::Hit);
    assert!(matches!(result, Err(EngineError::HandAlreadyDone)));

    let result = apply_action(&mut table, &mut wallet, &mut rng, BlackjackAction::DoubleDown);
    assert!(matches!(result, Err(EngineError::HandAlreadyDone)));

    let result = apply_action(&mut table, &mut wallet, &mut rng, BlackjackAction::AllIn);
    assert!(matches!(result, Err(EngineError::HandAlreadyDone)));
}

//
// 4) Сплит
//

#[test]
fn split_rejects_unequal_ranks_even_with_equal_values() {
    // K♠ и Q♠ оба стоят 10 очков, но это не пара
    let mut table = live_round(
        vec![card(Rank::King, Suit::Spades), card(Rank::Queen, Suit::Spades)],
        100,
        Vec::new(),
    );
    let mut wallet = Wallet::new(Chips(900));
    let mut rng = DummyRng;

    let result = apply_action(&mut table, &mut wallet, &mut rng, BlackjackAction::Split);
    assert!(matches!(result, Err(EngineError::CannotSplit)));
    assert_eq!(table.player_hands.len(), 1);
    assert_eq!(wallet.chips, Chips(900));
}

#[test]
fn split_rejects_three_card_hands_and_needs_chips() {
    let mut table = live_round(
        vec![
            card(Rank::Eight, Suit::Spades),
            card(Rank::Eight, Suit::Hearts),
            card(Rank::Two, Suit::Clubs),
        ],
        100,
        Vec::new(),
    );
    let mut wallet = Wallet::new(Chips(900));
    let mut rng = DummyRng;

    let result = apply_action(&mut table, &mut wallet, &mut rng, BlackjackAction::Split);
    assert!(matches!(result, Err(EngineError::CannotSplit)));

    // пара есть, но на вторую ставку не хватает: ставка 100, в кошельке 60
    let mut table = live_round(
        vec![card(Rank::Eight, Suit::Spades), card(Rank::Eight, Suit::Hearts)],
        100,
        Vec::new(),
    );
    let mut wallet = Wallet::new(Chips(60));

    let result = apply_action(&mut table, &mut wallet, &mut rng, BlackjackAction::Split);
    assert!(matches!(result, Err(EngineError::NotEnoughChips)));
    assert_eq!(table.player_hands.len(), 1);
    assert_eq!(wallet.chips, Chips(60));
}

//
// 5) Дабл
//

#[test]
fn double_down_needs_exactly_two_cards_and_chips() {
    let mut rng = DummyRng;

    // три карты
    let mut table = live_round(
        vec![
            card(Rank::Two, Suit::Spades),
            card(Rank::Three, Suit::Spades),
            card(Rank::Four, Suit::Spades),
        ],
        100,
        Vec::new(),
    );
    let mut wallet = Wallet::new(Chips(900));
    let result = apply_action(&mut table, &mut wallet, &mut rng, BlackjackAction::DoubleDown);
    assert!(matches!(result, Err(EngineError::CannotDouble)));

    // нехватка фишек на удвоение
    let mut table = live_round(
        vec![card(Rank::Five, Suit::Spades), card(Rank::Four, Suit::Spades)],
        100,
        Vec::new(),
    );
    let mut wallet = Wallet::new(Chips(40));
    let result = apply_action(&mut table, &mut wallet, &mut rng, BlackjackAction::DoubleDown);
    assert!(matches!(result, Err(EngineError::NotEnoughChips)));
    assert_eq!(wallet.chips, Chips(40));
    assert_eq!(table.player_hands[0].bet, Chips(100));
}

#[test]
fn double_down_flag_blocks_a_second_double() {
    // рука с двумя картами, но doubled уже стоит
    let mut table = live_round(
        vec![card(Rank::Five, Suit::Spades), card(Rank::Four, Suit::Spades)],
        100,
        Vec::new(),
    );
    table.player_hands[0].doubled = true;
    let mut wallet = Wallet::new(Chips(900));
    let mut rng = DummyRng;

    let result = apply_action(&mut table, &mut wallet, &mut rng, BlackjackAction::DoubleDown);
    assert!(matches!(result, Err(EngineError::CannotDouble)));
}

//
// 6) All-in
//

#[test]
fn all_in_with_empty_wallet_is_rejected() {
    let mut table = live_round(
        vec![card(Rank::Five, Suit::Spades), card(Rank::Six, Suit::Spades)],
        100,
        Vec::new(),
    );
    let mut wallet = Wallet::new(Chips::ZERO);
    let mut rng = DummyRng;

    let result = apply_action(&mut table, &mut wallet, &mut rng, BlackjackAction::AllIn);
    assert!(matches!(result, Err(EngineError::NotEnoughChips)));
    assert_eq!(table.player_hands[0].bet, Chips(100));
}

//
// 7) Рулетка
//

#[test]
fn second_roulette_bet_is_rejected() {
    let mut table = RouletteTable::new();
    let mut wallet = Wallet::new(Chips(1000));

    place_bet(&mut table, &mut wallet, Chips(100), BetTarget::Red).unwrap();
    let result = place_bet(&mut table, &mut wallet, Chips(50), BetTarget::Black);

    assert!(matches!(result, Err(EngineError::BetAlreadyPlaced)));
    assert_eq!(wallet.chips, Chips(900));
}

#[test]
fn roulette_bet_must_be_positive_and_affordable() {
    let mut table = RouletteTable::new();
    let mut wallet = Wallet::new(Chips(100));

    let result = place_bet(&mut table, &mut wallet, Chips::ZERO, BetTarget::Red);
    assert!(matches!(result, Err(EngineError::ZeroBet)));

    let result = place_bet(&mut table, &mut wallet, Chips(101), BetTarget::Red);
    assert!(matches!(result, Err(EngineError::NotEnoughChips)));

    assert!(!table.has_active_bet());
    assert_eq!(wallet.chips, Chips(100));
}

#[test]
fn spin_and_clear_require_an_active_bet() {
    let mut table = RouletteTable::new();
    let mut wallet = Wallet::new(Chips(1000));
    let mut rng = DummyRng;

    let result = spin(&mut table, &mut wallet, &mut rng);
    assert!(matches!(result, Err(EngineError::NoActiveBet)));

    let result = clear_bet(&mut table, &mut wallet);
    assert!(matches!(result, Err(EngineError::NoActiveBet)));

    assert_eq!(wallet.chips, Chips(1000));
}

//
// 8) Recharge
//

#[test]
fn recharge_needs_an_empty_wallet() {
    let blackjack = BlackjackTable::new();
    let roulette = RouletteTable::new();
    let wallet = Wallet::new(Chips(1));

    let result = ensure_can_recharge(&wallet, &blackjack, &roulette);
    assert!(matches!(result, Err(EngineError::WalletNotEmpty)));
}

#[test]
fn recharge_waits_for_the_blackjack_round() {
    let mut blackjack = BlackjackTable::new();
    blackjack.round_over = false;
    let roulette = RouletteTable::new();
    let wallet = Wallet::new(Chips::ZERO);

    let result = ensure_can_recharge(&wallet, &blackjack, &roulette);
    assert!(matches!(result, Err(EngineError::RoundInProgress)));
}

#[test]
fn recharge_waits_for_the_roulette_bet() {
    let blackjack = BlackjackTable::new();
    let mut roulette = RouletteTable::new();
    let mut wallet = Wallet::new(Chips(100));

    // весь кошелёк ушёл в ставку: фишек ноль, но ставка ещё висит
    place_bet(&mut roulette, &mut wallet, Chips(100), BetTarget::Red).unwrap();
    assert!(wallet.is_broke());

    let result = ensure_can_recharge(&wallet, &blackjack, &roulette);
    assert!(matches!(result, Err(EngineError::BetStillPending)));

    // после отмены ставки кошелёк снова не пуст
    clear_bet(&mut roulette, &mut wallet).unwrap();
    let result = ensure_can_recharge(&wallet, &blackjack, &roulette);
    assert!(matches!(result, Err(EngineError::WalletNotEmpty)));
}

#[test]
fn error_messages_speak_to_the_player() {
    assert_eq!(EngineError::RoundInProgress.to_string(), "Раунд уже идёт");
    assert_eq!(EngineError::NoActiveRound.to_string(), "Раунд не идёт");
    assert_eq!(
        EngineError::NotEnoughChips.to_string(),
        "Недостаточно фишек для этой ставки"
    );
    assert_eq!(
        EngineError::WalletNotEmpty.to_string(),
        "Пополнение доступно только при пустом кошельке"
    );
}
