use serde::{Deserialize, Serialize};

/// How a finished mission ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Victory { rating: i32 },
    Defeat(DefeatReason),
    Resigned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefeatReason {
    ShipDestroyed,
    TimeExpired,
    StarbasesLost,
    /// Own torpedo destroyed a starbase.
    RelievedOfCommand,
}

impl Outcome {
    pub fn is_victory(&self) -> bool {
        matches!(self, Outcome::Victory { .. })
    }
}
