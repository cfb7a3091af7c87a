use serde::{Deserialize, Serialize};

/// Действие игрока по активной руке в блэкджеке.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BlackjackAction {
    /// Взять ещё одну карту.
    Hit,
    /// Остановиться и передать ход дальше.
    Stand,
    /// Разбить пару на две руки с той же ставкой на каждой.
    Split,
    /// Удвоить ставку, взять ровно одну карту и закончить ход.
    DoubleDown,
    /// Добавить весь остаток кошелька к ставке. Ход НЕ заканчивается.
    AllIn,
}
