use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The four daily mini-games. Finishing all four distinct kinds in one
/// day makes Señor Pollo ready to eat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Quiz,
    Memory,
    FoodSort,
    Plate,
}

impl GameKind {
    pub fn all() -> Vec<GameKind> {
        vec![
            GameKind::Quiz,
            GameKind::Memory,
            GameKind::FoodSort,
            GameKind::Plate,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Quiz => "quiz",
            GameKind::Memory => "memory",
            GameKind::FoodSort => "foodsort",
            GameKind::Plate => "plate",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GameKind::Quiz => "Quiz Nutritivo",
            GameKind::Memory => "Memoria de Alimentos",
            GameKind::FoodSort => "Clasifica la Comida",
            GameKind::Plate => "Arma tu Plato",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for GameKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiz" => Ok(GameKind::Quiz),
            "memory" | "memoria" => Ok(GameKind::Memory),
            "foodsort" | "sort" | "clasifica" => Ok(GameKind::FoodSort),
            "plate" | "plato" => Ok(GameKind::Plate),
            _ => Err(anyhow::anyhow!("Unknown game: {}", s)),
        }
    }
}

/// One finished mini-game as recorded in the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub id: Option<i64>,
    pub game: GameKind,
    pub date: String,
    pub correct: u32,
    pub total: u32,
    pub time_bonus: u32,
    pub score: u32,
    pub perfect: bool,
}
