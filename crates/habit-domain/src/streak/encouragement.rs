use serde::{Deserialize, Serialize};

/// Encouragement tiers, ordered by the streak length that unlocks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EncouragementTier {
    StartJourney,
    GreatStart,
    FantasticProgress,
    ExcellentWork,
    AmazingCommitment,
    IncredibleDedication,
    OutstandingAchievement,
}

impl EncouragementTier {
    pub fn for_streak(current_streak: u32) -> Self {
        match current_streak {
            0 => Self::StartJourney,
            1..=2 => Self::GreatStart,
            3..=6 => Self::FantasticProgress,
            7..=13 => Self::ExcellentWork,
            14..=20 => Self::AmazingCommitment,
            21..=49 => Self::IncredibleDedication,
            _ => Self::OutstandingAchievement,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::StartJourney => "Start your journey today! Every expert was once a beginner.",
            Self::GreatStart => "Great start! You're building momentum.",
            Self::FantasticProgress => "Fantastic progress! Keep the momentum going.",
            Self::ExcellentWork => "Excellent work! You're forming a strong habit.",
            Self::AmazingCommitment => "Amazing commitment! You have built a life-changing habit.",
            Self::IncredibleDedication => "Incredible dedication! You're truly consistent.",
            Self::OutstandingAchievement => {
                "Outstanding achievement! You're an inspiration to others."
            }
        }
    }
}

pub fn message_for(current_streak: u32) -> &'static str {
    EncouragementTier::for_streak(current_streak).message()
}
