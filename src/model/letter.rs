//! The 47 pictograph letters and their structural classes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

/// Symbolic letter naming a pictograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    // Type 1: dual-shift
    A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V,
    // Type 2: shift
    W, X, Y, Z, Sigma, Delta, Theta, Omega,
    // Type 3: cross-shift
    WDash, XDash, YDash, ZDash, SigmaDash, DeltaDash, ThetaDash, OmegaDash,
    // Type 4: dash
    Phi, Psi, Lambda,
    // Type 5: dual-dash
    PhiDash, PsiDash, LambdaDash,
    // Type 6: static
    Alpha, Beta, Gamma,
}

/// Structural category grouping letters by motion-pairing pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterType {
    /// Both motions shift.
    Type1,
    /// One shift, one static.
    Type2,
    /// One shift, one dash.
    Type3,
    /// One dash, one static.
    Type4,
    /// Both motions dash.
    Type5,
    /// Both motions static.
    Type6,
}

impl LetterType {
    pub fn description(self) -> &'static str {
        match self {
            LetterType::Type1 => "Dual-Shift",
            LetterType::Type2 => "Shift",
            LetterType::Type3 => "Cross-Shift",
            LetterType::Type4 => "Dash",
            LetterType::Type5 => "Dual-Dash",
            LetterType::Type6 => "Static",
        }
    }
}

/// Relative hand position a letter ends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndingPosition {
    /// Hands on opposite points.
    Alpha,
    /// Hands on the same point.
    Beta,
    /// Hands on perpendicular points.
    Gamma,
}

impl EndingPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            EndingPosition::Alpha => "alpha",
            EndingPosition::Beta => "beta",
            EndingPosition::Gamma => "gamma",
        }
    }
}

impl fmt::Display for EndingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Letter {
    pub const ALL: [Letter; 47] = [
        Letter::A, Letter::B, Letter::C, Letter::D, Letter::E, Letter::F,
        Letter::G, Letter::H, Letter::I, Letter::J, Letter::K, Letter::L,
        Letter::M, Letter::N, Letter::O, Letter::P, Letter::Q, Letter::R,
        Letter::S, Letter::T, Letter::U, Letter::V,
        Letter::W, Letter::X, Letter::Y, Letter::Z,
        Letter::Sigma, Letter::Delta, Letter::Theta, Letter::Omega,
        Letter::WDash, Letter::XDash, Letter::YDash, Letter::ZDash,
        Letter::SigmaDash, Letter::DeltaDash, Letter::ThetaDash, Letter::OmegaDash,
        Letter::Phi, Letter::Psi, Letter::Lambda,
        Letter::PhiDash, Letter::PsiDash, Letter::LambdaDash,
        Letter::Alpha, Letter::Beta, Letter::Gamma,
    ];

    /// The letter as written in data files and file names.
    pub fn symbol(self) -> &'static str {
        match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::H => "H",
            Letter::I => "I",
            Letter::J => "J",
            Letter::K => "K",
            Letter::L => "L",
            Letter::M => "M",
            Letter::N => "N",
            Letter::O => "O",
            Letter::P => "P",
            Letter::Q => "Q",
            Letter::R => "R",
            Letter::S => "S",
            Letter::T => "T",
            Letter::U => "U",
            Letter::V => "V",
            Letter::W => "W",
            Letter::X => "X",
            Letter::Y => "Y",
            Letter::Z => "Z",
            Letter::Sigma => "Σ",
            Letter::Delta => "Δ",
            Letter::Theta => "θ",
            Letter::Omega => "Ω",
            Letter::WDash => "W-",
            Letter::XDash => "X-",
            Letter::YDash => "Y-",
            Letter::ZDash => "Z-",
            Letter::SigmaDash => "Σ-",
            Letter::DeltaDash => "Δ-",
            Letter::ThetaDash => "θ-",
            Letter::OmegaDash => "Ω-",
            Letter::Phi => "Φ",
            Letter::Psi => "Ψ",
            Letter::Lambda => "Λ",
            Letter::PhiDash => "Φ-",
            Letter::PsiDash => "Ψ-",
            Letter::LambdaDash => "Λ-",
            Letter::Alpha => "α",
            Letter::Beta => "β",
            Letter::Gamma => "Γ",
        }
    }

    /// Symbol with any trailing dash marker removed (`"W-"` → `"W"`).
    pub fn base_symbol(self) -> &'static str {
        let symbol = self.symbol();
        symbol.strip_suffix('-').unwrap_or(symbol)
    }

    pub fn letter_type(self) -> LetterType {
        use Letter::*;
        match self {
            A | B | C | D | E | F | G | H | I | J | K | L | M | N | O | P | Q | R | S | T
            | U | V => LetterType::Type1,
            W | X | Y | Z | Sigma | Delta | Theta | Omega => LetterType::Type2,
            WDash | XDash | YDash | ZDash | SigmaDash | DeltaDash | ThetaDash | OmegaDash => {
                LetterType::Type3
            }
            Phi | Psi | Lambda => LetterType::Type4,
            PhiDash | PsiDash | LambdaDash => LetterType::Type5,
            Alpha | Beta | Gamma => LetterType::Type6,
        }
    }

    pub fn ending_position(self) -> EndingPosition {
        use Letter::*;
        match self {
            A | B | C | D | E | F | W | X | WDash | XDash | Phi | PhiDash | Alpha => {
                EndingPosition::Alpha
            }
            G | H | I | J | K | L | Y | Z | YDash | ZDash | Psi | PsiDash | Beta => {
                EndingPosition::Beta
            }
            M | N | O | P | Q | R | S | T | U | V | Sigma | Delta | Theta | Omega
            | SigmaDash | DeltaDash | ThetaDash | OmegaDash | Lambda | LambdaDash | Gamma => {
                EndingPosition::Gamma
            }
        }
    }

    /// Type 3 and Type 5 letters carry a dash variant in default tables.
    pub fn has_dash_variant(self) -> bool {
        matches!(self.letter_type(), LetterType::Type3 | LetterType::Type5)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Letter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Letter::ALL
            .into_iter()
            .find(|l| l.symbol() == trimmed)
            .ok_or_else(|| Error::InvalidValue { kind: "letter", value: s.to_string() })
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Letter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
