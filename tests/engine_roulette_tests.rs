//! Интеграционные тесты рулетки: ставка, отмена, спин, расчёт.

use casino_engine::domain::bet::{Bet, BetTarget};
use casino_engine::domain::chips::Chips;
use casino_engine::domain::table::RouletteTable;
use casino_engine::domain::wallet::Wallet;
use casino_engine::domain::wheel::{Pocket, PocketColor};
use casino_engine::engine::errors::EngineError;
use casino_engine::engine::roulette::{clear_bet, place_bet, resolve_bet, spin};
use casino_engine::engine::RandomSource;

/// RNG с заранее выбранным карманом: pick_index всегда отдаёт `index`.
/// Индексы идут по Pocket::ALL: 0 -> "0", 1 -> "00", n+1 -> номер n.
struct FixedIndexRng {
    index: usize,
}

impl RandomSource for FixedIndexRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.index % len
    }
}

//
// Размещение и отмена
//

#[test]
fn place_bet_debits_wallet_immediately() {
    let mut table = RouletteTable::new();
    let mut wallet = Wallet::new(Chips(1000));

    place_bet(&mut table, &mut wallet, Chips(100), BetTarget::Red).unwrap();

    assert_eq!(wallet.chips, Chips(900));
    assert_eq!(
        table.active_bet,
        Some(Bet::new(Chips(100), BetTarget::Red))
    );
}

#[test]
fn clear_bet_refunds_the_full_amount() {
    let mut table = RouletteTable::new();
    let mut wallet = Wallet::new(Chips(1000));

    place_bet(&mut table, &mut wallet, Chips(100), BetTarget::Red).unwrap();
    let refunded = clear_bet(&mut table, &mut wallet).unwrap();

    assert_eq!(refunded, Chips(100));
    assert_eq!(wallet.chips, Chips(1000));
    assert!(!table.has_active_bet());
}

//
// Спин и выплаты
//

#[test]
fn straight_bet_pays_thirty_six_to_one() {
    let mut table = RouletteTable::new();
    let mut wallet = Wallet::new(Chips(1000));
    let mut rng = FixedIndexRng { index: 18 }; // карман 17

    place_bet(
        &mut table,
        &mut wallet,
        Chips(10),
        BetTarget::Pocket(Pocket::Number(17)),
    )
    .unwrap();
    let report = spin(&mut table, &mut wallet, &mut rng).unwrap();

    assert_eq!(report.pocket, Pocket::Number(17));
    assert_eq!(report.color, PocketColor::Black);
    assert_eq!(report.amount, Chips(10));
    assert!(report.won);
    assert_eq!(report.payout, Chips(360));

    // 1000 - 10 ставка + 360 выплата
    assert_eq!(wallet.chips, Chips(1350));
    assert!(!table.has_active_bet());
}

#[test]
fn color_bet_pays_two_to_one() {
    let mut table = RouletteTable::new();
    let mut wallet = Wallet::new(Chips(1000));
    let mut rng = FixedIndexRng { index: 15 }; // карман 14, красный

    place_bet(&mut table, &mut wallet, Chips(100), BetTarget::Red).unwrap();
    let report = spin(&mut table, &mut wallet, &mut rng).unwrap();

    assert_eq!(report.pocket, Pocket::Number(14));
    assert_eq!(report.color, PocketColor::Red);
    assert!(report.won);
    assert_eq!(report.payout, Chips(200));
    assert_eq!(wallet.chips, Chips(1100));
}

#[test]
fn losing_spin_keeps_the_stake() {
    let mut table = RouletteTable::new();
    let mut wallet = Wallet::new(Chips(1000));
    let mut rng = FixedIndexRng { index: 0 }; // зеро, зелёный

    place_bet(&mut table, &mut wallet, Chips(100), BetTarget::Red).unwrap();
    let report = spin(&mut table, &mut wallet, &mut rng).unwrap();

    assert_eq!(report.pocket, Pocket::Zero);
    assert_eq!(report.color, PocketColor::Green);
    assert!(!report.won);
    assert_eq!(report.payout, Chips::ZERO);

    // ставка списана при размещении и не возвращается
    assert_eq!(wallet.chips, Chips(900));
    assert!(!table.has_active_bet());
}

#[test]
fn each_spin_needs_a_fresh_bet() {
    let mut table = RouletteTable::new();
    let mut wallet = Wallet::new(Chips(1000));
    let mut rng = FixedIndexRng { index: 0 };

    place_bet(&mut table, &mut wallet, Chips(50), BetTarget::Black).unwrap();
    spin(&mut table, &mut wallet, &mut rng).unwrap();

    // ставка снята спином, второй спин без новой ставки невозможен
    let again = spin(&mut table, &mut wallet, &mut rng);
    assert!(matches!(again, Err(EngineError::NoActiveBet)));
}

//
// Чистый расчёт
//

#[test]
fn resolve_bet_pays_by_target_kind() {
    let straight = Bet::new(Chips(10), BetTarget::Pocket(Pocket::Number(7)));
    assert_eq!(resolve_bet(&straight, Pocket::Number(7)), Chips(360));
    assert_eq!(resolve_bet(&straight, Pocket::Number(8)), Chips::ZERO);
    assert_eq!(resolve_bet(&straight, Pocket::Zero), Chips::ZERO);

    let red = Bet::new(Chips(100), BetTarget::Red);
    assert_eq!(resolve_bet(&red, Pocket::Number(14)), Chips(200));
    assert_eq!(resolve_bet(&red, Pocket::Number(17)), Chips::ZERO);

    let black = Bet::new(Chips(100), BetTarget::Black);
    assert_eq!(resolve_bet(&black, Pocket::Number(17)), Chips(200));
    assert_eq!(resolve_bet(&black, Pocket::Number(14)), Chips::ZERO);

    // зелёные карманы бьют обе цветовые ставки
    assert_eq!(resolve_bet(&red, Pocket::Zero), Chips::ZERO);
    assert_eq!(resolve_bet(&black, Pocket::DoubleZero), Chips::ZERO);
}
