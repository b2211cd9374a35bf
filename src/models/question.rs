use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Assessment context that shapes question content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    Career,
    Academic,
}

impl Track {
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Career => "career",
            Track::Academic => "academic",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "easy",
            Level::Medium => "medium",
            Level::Hard => "hard",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Level::Easy),
            "medium" => Ok(Level::Medium),
            "hard" => Ok(Level::Hard),
            other => Err(format!("unknown level '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetencyDomain {
    Logic,
    Creativity,
    Interpersonal,
    Practical,
    Strategy,
}

impl CompetencyDomain {
    /// Fixed domain order, used for fallback cycling and aggregate reporting.
    pub const ALL: [CompetencyDomain; 5] = [
        CompetencyDomain::Logic,
        CompetencyDomain::Creativity,
        CompetencyDomain::Interpersonal,
        CompetencyDomain::Practical,
        CompetencyDomain::Strategy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompetencyDomain::Logic => "logic",
            CompetencyDomain::Creativity => "creativity",
            CompetencyDomain::Interpersonal => "interpersonal",
            CompetencyDomain::Practical => "practical",
            CompetencyDomain::Strategy => "strategy",
        }
    }
}

impl fmt::Display for CompetencyDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompetencyDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CompetencyDomain::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| format!("unknown competency domain '{}'", wanted))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::A => "A",
            OptionKey::B => "B",
            OptionKey::C => "C",
            OptionKey::D => "D",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(OptionKey::A),
            "B" => Ok(OptionKey::B),
            "C" => Ok(OptionKey::C),
            "D" => Ok(OptionKey::D),
            other => Err(format!("unknown option key '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McqOption {
    pub key: OptionKey,
    pub text: String,
}

impl McqOption {
    pub fn placeholder(key: OptionKey) -> Self {
        Self {
            key,
            text: format!("Option {}", key),
        }
    }
}

/// A multiple-choice question. `id` is opaque and only used by clients to
/// correlate a question with its later answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub id: String,
    pub question: String,
    pub options: Vec<McqOption>,
    pub answer: OptionKey,
    pub competency_domain: CompetencyDomain,
    pub level: Level,
}

impl QuestionItem {
    pub fn has_canonical_options(&self) -> bool {
        self.options.len() == OptionKey::ALL.len()
            && self
                .options
                .iter()
                .zip(OptionKey::ALL)
                .all(|(opt, key)| opt.key == key)
    }
}
