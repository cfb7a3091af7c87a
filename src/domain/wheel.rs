use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Красные номера американского колеса (18 штук). Остальные номера —
/// чёрные, зеро и дабл-зеро — зелёные.
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Карман американской рулетки: 0, 00 и номера 1..=36, всего 38.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Pocket {
    Zero,
    DoubleZero,
    /// Обычный номер. Инвариант 1..=36 поддерживают `ALL` и `FromStr`.
    Number(u8),
}

/// Цвет кармана.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PocketColor {
    Green,
    Red,
    Black,
}

impl Pocket {
    /// Все 38 карманов в порядке колеса: 0, 00, затем 1..36.
    pub const ALL: [Pocket; 38] = [
        Pocket::Zero,
        Pocket::DoubleZero,
        Pocket::Number(1),
        Pocket::Number(2),
        Pocket::Number(3),
        Pocket::Number(4),
        Pocket::Number(5),
        Pocket::Number(6),
        Pocket::Number(7),
        Pocket::Number(8),
        Pocket::Number(9),
        Pocket::Number(10),
        Pocket::Number(11),
        Pocket::Number(12),
        Pocket::Number(13),
        Pocket::Number(14),
        Pocket::Number(15),
        Pocket::Number(16),
        Pocket::Number(17),
        Pocket::Number(18),
        Pocket::Number(19),
        Pocket::Number(20),
        Pocket::Number(21),
        Pocket::Number(22),
        Pocket::Number(23),
        Pocket::Number(24),
        Pocket::Number(25),
        Pocket::Number(26),
        Pocket::Number(27),
        Pocket::Number(28),
        Pocket::Number(29),
        Pocket::Number(30),
        Pocket::Number(31),
        Pocket::Number(32),
        Pocket::Number(33),
        Pocket::Number(34),
        Pocket::Number(35),
        Pocket::Number(36),
    ];

    pub fn color(&self) -> PocketColor {
        match self {
            Pocket::Zero | Pocket::DoubleZero => PocketColor::Green,
            Pocket::Number(n) => {
                if RED_NUMBERS.contains(n) {
                    PocketColor::Red
                } else {
                    PocketColor::Black
                }
            }
        }
    }
}

impl fmt::Display for Pocket {
    /// Формат вида `0`, `00`, `17`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pocket::Zero => write!(f, "0"),
            Pocket::DoubleZero => write!(f, "00"),
            Pocket::Number(n) => write!(f, "{n}"),
        }
    }
}

impl fmt::Display for PocketColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PocketColor::Green => "green",
            PocketColor::Red => "red",
            PocketColor::Black => "black",
        };
        write!(f, "{s}")
    }
}

/// Парсинг строки вида "0", "00", "17".
impl FromStr for Pocket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Pocket::Zero),
            "00" => Ok(Pocket::DoubleZero),
            other => {
                let n: u8 = other
                    .parse()
                    .map_err(|_| format!("Invalid pocket: {other}"))?;
                if (1..=36).contains(&n) {
                    Ok(Pocket::Number(n))
                } else {
                    Err(format!("Pocket number out of range: {n}"))
                }
            }
        }
    }
}
