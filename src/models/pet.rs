use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DailyActivityFacts, DATE_FMT};

/// Where the pet sits in its daily cycle. `Fed` lasts until the local
/// day rolls over, which the caller detects by comparing the stored
/// last-fed date against today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetPhase {
    Hungry,
    ReadyToFeed,
    Fed,
}

impl PetPhase {
    pub fn display_name(&self) -> &'static str {
        match self {
            PetPhase::Hungry => "Tiene hambre",
            PetPhase::ReadyToFeed => "¡Listo para comer!",
            PetPhase::Fed => "Satisfecho",
        }
    }
}

impl std::fmt::Display for PetPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Pet state as the engine hands it back. Transient; the caller is
/// responsible for writing it through `PetRepo` before the next
/// evaluation cycle or the feed event is lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetState {
    pub happiness_level: u8,
    pub fed_today: bool,
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl PetState {
    /// Mirror the pet-facing fields of a fact snapshot, unchanged.
    pub fn from_facts(facts: &DailyActivityFacts) -> Self {
        PetState {
            happiness_level: facts.happiness_level,
            fed_today: facts.fed_today,
            current_streak: facts.current_streak,
            longest_streak: facts.longest_streak,
        }
    }
}

/// The single persisted pet row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PetRecord {
    pub happiness_level: u8,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// `YYYY-MM-DD` of the last feed event, if any.
    pub last_fed_date: Option<String>,
}

impl PetRecord {
    pub fn fed_on(&self, date: NaiveDate) -> bool {
        self.last_fed_date.as_deref() == Some(date.format(DATE_FMT).to_string().as_str())
    }

    /// Whether feeding today would continue the streak: the previous
    /// local day must carry a feed event.
    pub fn fed_day_before(&self, today: NaiveDate) -> bool {
        match today.pred_opt() {
            Some(yesterday) => self.fed_on(yesterday),
            None => false,
        }
    }
}
