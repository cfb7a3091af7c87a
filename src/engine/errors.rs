use thiserror::Error;

/// Ошибки движка казино. Текст ошибки — это то, что показывается игроку,
/// поэтому формулировки человеческие, а не технические.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Раунд уже идёт")]
    RoundInProgress,

    #[error("Раунд не идёт")]
    NoActiveRound,

    #[error("Сначала сделайте ставку (10, 50, 100 или 200)")]
    NoStagedBet,

    #[error("Ставка должна быть больше нуля")]
    ZeroBet,

    #[error("Недостаточно фишек для этой ставки")]
    NotEnoughChips,

    #[error("Эта рука уже закончила ход")]
    HandAlreadyDone,

    #[error("Сплит доступен только на паре из двух карт одного ранга")]
    CannotSplit,

    #[error("Дабл доступен только на руке из двух карт и только один раз")]
    CannotDouble,

    #[error("Ставка уже на столе")]
    BetAlreadyPlaced,

    #[error("Нет активной ставки")]
    NoActiveBet,

    #[error("Пополнение доступно только при пустом кошельке")]
    WalletNotEmpty,

    #[error("Сначала разыграйте или снимите активную ставку")]
    BetStillPending,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
