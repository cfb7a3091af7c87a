use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::{hand_total, HandOutcome, HandResult, PlayerHand, RoundSummary, BLACKJACK};
use crate::domain::table::BlackjackTable;
use crate::domain::wallet::Wallet;
use crate::engine::actions::BlackjackAction;
use crate::engine::errors::EngineError;
use crate::engine::validation;
use crate::engine::RandomSource;

/// Дилер добирает карты, пока его сумма меньше 17. На любых 17 стоит,
/// мягкие включительно.
pub const DEALER_STANDS_AT: u8 = 17;

/// Статус раунда для внешнего кода.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    Ongoing,
    Finished(RoundSummary),
}

/// Отложить фишки на следующий раунд. Кошелёк не трогаем —
/// списание произойдёт при раздаче.
pub fn stage_chip(
    table: &mut BlackjackTable,
    wallet: &Wallet,
    amount: Chips,
) -> Result<(), EngineError> {
    validation::ensure_can_stage_chip(table, wallet, amount)?;
    table.staged_bet += amount;
    Ok(())
}

/// Сбросить отложенную ставку. Возвращать нечего — фишки не списывались.
pub fn clear_staged_bet(table: &mut BlackjackTable) -> Result<(), EngineError> {
    validation::ensure_can_clear_staged(table)?;
    table.staged_bet = Chips::ZERO;
    Ok(())
}

/// Старт нового раунда:
/// - списывает ставку из кошелька;
/// - собирает свежую перемешанную колоду;
/// - раздаёт в порядке игрок-дилер-игрок-дилер;
/// - при 21 с раздачи рука автоматически стоит, и раунд
///   доигрывается сразу (дилер + расчёт).
pub fn start_round<R: RandomSource>(
    table: &mut BlackjackTable,
    wallet: &mut Wallet,
    rng: &mut R,
    bet: Chips,
) -> Result<RoundStatus, EngineError> {
    validation::ensure_can_start_round(table, wallet, bet)?;

    wallet.debit(bet);
    table.staged_bet = Chips::ZERO;

    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);
    table.deck = deck;

    table.dealer_hand.clear();
    table.player_hands = vec![PlayerHand::new(bet)];
    table.active_hand = 0;
    table.round_over = false;

    // Порядок как у живого дилера: игроку, дилеру, игроку, дилеру.
    // Первая карта дилера (индекс 0) останется закрытой до расчёта.
    deal_to_player(table, 0, rng);
    deal_to_dealer(table, rng);
    deal_to_player(table, 0, rng);
    deal_to_dealer(table, rng);

    if table.player_hands[0].total() == BLACKJACK {
        return stand_active(table, wallet, rng);
    }

    Ok(RoundStatus::Ongoing)
}

/// Применить действие игрока. Возвращает статус раунда (идёт / закончился).
pub fn apply_action<R: RandomSource>(
    table: &mut BlackjackTable,
    wallet: &mut Wallet,
    rng: &mut R,
    action: BlackjackAction,
) -> Result<RoundStatus, EngineError> {
    validation::validate_blackjack_action(table, wallet, action)?;

    match action {
        BlackjackAction::Hit => hit_active(table, wallet, rng),
        BlackjackAction::Stand => stand_active(table, wallet, rng),
        BlackjackAction::Split => split_active(table, wallet, rng),
        BlackjackAction::DoubleDown => double_down_active(table, wallet, rng),
        BlackjackAction::AllIn => all_in_active(table, wallet),
    }
}

/// Взять карту из колоды. Если колода кончилась посреди раунда —
/// замешивается свежая полная (руки при этом не сбрасываются).
fn draw_card<R: RandomSource>(deck: &mut Deck, rng: &mut R) -> Card {
    if let Some(card) = deck.draw_one() {
        return card;
    }
    *deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);
    deck.draw_one()
        .expect("в только что собранной колоде 52 карты")
}

fn deal_to_player<R: RandomSource>(table: &mut BlackjackTable, index: usize, rng: &mut R) {
    let card = draw_card(&mut table.deck, rng);
    if let Some(hand) = table.player_hands.get_mut(index) {
        hand.cards.push(card);
    }
}

fn deal_to_dealer<R: RandomSource>(table: &mut BlackjackTable, rng: &mut R) {
    let card = draw_card(&mut table.deck, rng);
    table.dealer_hand.push(card);
}

fn hit_active<R: RandomSource>(
    table: &mut BlackjackTable,
    wallet: &mut Wallet,
    rng: &mut R,
) -> Result<RoundStatus, EngineError> {
    let card = draw_card(&mut table.deck, rng);
    let index = table.active_hand;
    let hand = table
        .player_hands
        .get_mut(index)
        .ok_or(EngineError::Internal("активная рука потеряна"))?;

    hand.cards.push(card);

    if hand.is_busted() {
        hand.done = true;
        return advance(table, wallet, rng);
    }

    // Ровно 21 после добора НЕ останавливает руку — решает игрок.
    Ok(RoundStatus::Ongoing)
}

fn stand_active<R: RandomSource>(
    table: &mut BlackjackTable,
    wallet: &mut Wallet,
    rng: &mut R,
) -> Result<RoundStatus, EngineError> {
    let index = table.active_hand;
    let hand = table
        .player_hands
        .get_mut(index)
        .ok_or(EngineError::Internal("активная рука потеряна"))?;

    hand.done = true;
    advance(table, wallet, rng)
}

/// Сплит: вторая карта пары уходит в новую руку с той же ставкой,
/// обе руки добирают по карте и играются по очереди, начиная с первой.
fn split_active<R: RandomSource>(
    table: &mut BlackjackTable,
    wallet: &mut Wallet,
    rng: &mut R,
) -> Result<RoundStatus, EngineError> {
    let index = table.active_hand;
    let (bet, moved) = {
        let hand = table
            .player_hands
            .get_mut(index)
            .ok_or(EngineError::Internal("активная рука потеряна"))?;
        let moved = hand
            .cards
            .pop()
            .ok_or(EngineError::Internal("в паре нет второй карты"))?;
        hand.done = false;
        hand.doubled = false;
        (hand.bet, moved)
    };

    wallet.debit(bet);

    deal_to_player(table, index, rng);

    let mut split_hand = PlayerHand::new(bet);
    split_hand.cards.push(moved);
    let card = draw_card(&mut table.deck, rng);
    split_hand.cards.push(card);

    table.player_hands.push(split_hand);

    Ok(RoundStatus::Ongoing)
}

/// Дабл: ставка удваивается, рука получает ровно одну карту и
/// заканчивает ход независимо от результата.
fn double_down_active<R: RandomSource>(
    table: &mut BlackjackTable,
    wallet: &mut Wallet,
    rng: &mut R,
) -> Result<RoundStatus, EngineError> {
    let index = table.active_hand;
    let bet = table
        .player_hands
        .get(index)
        .ok_or(EngineError::Internal("активная рука потеряна"))?
        .bet;

    wallet.debit(bet);

    let card = draw_card(&mut table.deck, rng);
    let hand = table
        .player_hands
        .get_mut(index)
        .ok_or(EngineError::Internal("активная рука потеряна"))?;
    hand.bet += bet;
    hand.doubled = true;
    hand.cards.push(card);
    hand.done = true;

    advance(table, wallet, rng)
}

/// All-in: весь остаток кошелька уходит в ставку активной руки.
/// Ход НЕ заканчивается — можно дальше брать карты или остановиться.
fn all_in_active(
    table: &mut BlackjackTable,
    wallet: &mut Wallet,
) -> Result<RoundStatus, EngineError> {
    let index = table.active_hand;
    let moved = wallet.drain();
    let hand = table
        .player_hands
        .get_mut(index)
        .ok_or(EngineError::Internal("активная рука потеряна"))?;

    hand.bet += moved;

    Ok(RoundStatus::Ongoing)
}

/// Передать ход следующей незаконченной руке правее активной;
/// если такой нет — очередь дилера и расчёт.
fn advance<R: RandomSource>(
    table: &mut BlackjackTable,
    wallet: &mut Wallet,
    rng: &mut R,
) -> Result<RoundStatus, EngineError> {
    let next = table
        .player_hands
        .iter()
        .enumerate()
        .find(|(i, hand)| *i > table.active_hand && !hand.done)
        .map(|(i, _)| i);

    if let Some(index) = next {
        table.active_hand = index;
        return Ok(RoundStatus::Ongoing);
    }

    Ok(RoundStatus::Finished(dealer_and_settle(table, wallet, rng)))
}

/// Очередь дилера и расчёт всех рук:
/// - дилер добирает до 17;
/// - перебор руки — проигрыш без выплаты;
/// - перебор дилера или больше очков — выигрыш 2x ставки;
/// - равенство — пуш, возврат ставки;
/// - иначе проигрыш.
fn dealer_and_settle<R: RandomSource>(
    table: &mut BlackjackTable,
    wallet: &mut Wallet,
    rng: &mut R,
) -> RoundSummary {
    while hand_total(&table.dealer_hand) < DEALER_STANDS_AT {
        deal_to_dealer(table, rng);
    }

    let dealer_total = hand_total(&table.dealer_hand);
    let dealer_busted = dealer_total > BLACKJACK;

    let mut outcomes = Vec::with_capacity(table.player_hands.len());
    let mut wins: u32 = 0;
    let mut pushes: u32 = 0;
    let mut losses: u32 = 0;
    let mut total_payout = Chips::ZERO;

    for (hand_index, hand) in table.player_hands.iter().enumerate() {
        let total = hand.total();

        let (result, payout) = if total > BLACKJACK {
            (HandResult::Loss, Chips::ZERO)
        } else if dealer_busted || total > dealer_total {
            (HandResult::Win, hand.bet.saturating_mul(2))
        } else if total == dealer_total {
            (HandResult::Push, hand.bet)
        } else {
            (HandResult::Loss, Chips::ZERO)
        };

        match result {
            HandResult::Win => wins += 1,
            HandResult::Push => pushes += 1,
            HandResult::Loss => losses += 1,
        }

        wallet.credit(payout);
        total_payout += payout;

        outcomes.push(HandOutcome {
            hand_index,
            total,
            bet: hand.bet,
            result,
            payout,
        });
    }

    // Руки остаются на столе до следующей раздачи, чтобы их можно было показать.
    table.round_over = true;
    table.staged_bet = Chips::ZERO;

    RoundSummary {
        dealer_total,
        outcomes,
        wins,
        pushes,
        losses,
        total_payout,
    }
}
