use std::fmt;
use std::str::FromStr;

/// Discrete visual state of the orb, chosen by the host page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mood {
    #[default]
    Idle,
    Listening,
    Speaking,
    Thinking,
}

/// Derived rendering constants for a mood.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoodParams {
    /// Base hue in degrees.
    pub base_hue: f32,
    pub intensity: f32,
    pub rotation_speed: f32,
    pub pulse_speed: f32,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Idle, Mood::Listening, Mood::Speaking, Mood::Thinking];

    /// Fixed lookup table from mood to color and speed parameters.
    pub const fn params(self) -> MoodParams {
        match self {
            Mood::Idle => MoodParams {
                base_hue: 220.0, // blue
                intensity: 1.0,
                rotation_speed: 1.0,
                pulse_speed: 1.0,
            },
            Mood::Thinking => MoodParams {
                base_hue: 270.0, // violet
                intensity: 1.2,
                rotation_speed: 2.0,
                pulse_speed: 1.0,
            },
            Mood::Listening => MoodParams {
                base_hue: 170.0, // teal
                intensity: 1.1,
                rotation_speed: 1.0,
                pulse_speed: 2.0,
            },
            Mood::Speaking => MoodParams {
                base_hue: 200.0, // cyan
                intensity: 1.3,
                rotation_speed: 1.0,
                pulse_speed: 3.0,
            },
        }
    }

    /// Mood for a page's activity flags. Pending work (typing or analysing)
    /// takes precedence over capturing user input.
    pub fn from_activity(busy: bool, listening: bool) -> Self {
        if busy {
            Mood::Thinking
        } else if listening {
            Mood::Listening
        } else {
            Mood::Idle
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Idle => "idle",
            Mood::Listening => "listening",
            Mood::Speaking => "speaking",
            Mood::Thinking => "thinking",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown orb mood `{0}` (expected idle, listening, speaking or thinking)")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}
