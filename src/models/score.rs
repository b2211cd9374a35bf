use super::question::CompetencyDomain;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub id: String,
    pub score: i32,
    pub feedback: String,
    pub domain: Option<CompetencyDomain>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DomainFeedback {
    pub logic: Option<String>,
    pub creativity: Option<String>,
    pub interpersonal: Option<String>,
    pub practical: Option<String>,
    pub strategy: Option<String>,
}

impl DomainFeedback {
    pub fn set(&mut self, domain: CompetencyDomain, text: String) {
        let slot = match domain {
            CompetencyDomain::Logic => &mut self.logic,
            CompetencyDomain::Creativity => &mut self.creativity,
            CompetencyDomain::Interpersonal => &mut self.interpersonal,
            CompetencyDomain::Practical => &mut self.practical,
            CompetencyDomain::Strategy => &mut self.strategy,
        };
        *slot = Some(text);
    }

    pub fn get(&self, domain: CompetencyDomain) -> Option<&str> {
        match domain {
            CompetencyDomain::Logic => self.logic.as_deref(),
            CompetencyDomain::Creativity => self.creativity.as_deref(),
            CompetencyDomain::Interpersonal => self.interpersonal.as_deref(),
            CompetencyDomain::Practical => self.practical.as_deref(),
            CompetencyDomain::Strategy => self.strategy.as_deref(),
        }
    }
}

/// Per-domain score lists collected while scoring one submission.
#[derive(Debug, Clone, Default)]
pub struct DomainScores {
    scores: HashMap<CompetencyDomain, Vec<i32>>,
}

impl DomainScores {
    pub fn record(&mut self, domain: CompetencyDomain, score: i32) {
        self.scores.entry(domain).or_default().push(score);
    }

    /// Integer-truncated average for each domain, 0 where nothing was scored.
    /// Returned in the fixed domain order.
    pub fn averages(&self) -> Vec<(CompetencyDomain, i32)> {
        CompetencyDomain::ALL
            .into_iter()
            .map(|domain| {
                let avg = match self.scores.get(&domain) {
                    Some(v) if !v.is_empty() => {
                        let sum: i64 = v.iter().map(|s| i64::from(*s)).sum();
                        (sum / v.len() as i64) as i32
                    }
                    _ => 0,
                };
                (domain, avg)
            })
            .collect()
    }

    pub fn overall(averages: &[(CompetencyDomain, i32)]) -> i32 {
        if averages.is_empty() {
            return 0;
        }
        let sum: i64 = averages.iter().map(|(_, a)| i64::from(*a)).sum();
        (sum / averages.len() as i64) as i32
    }
}
