use crate::models::career::{CareerCategory, CareerOption};
use crate::quiz::catalog::{profile, QUESTIONS};

/// At most this many ranked categories are attached to a result.
pub const MAX_CAREER_OPTIONS: usize = 3;

/// Accumulated points per category, indexed by `CareerCategory::index`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryScores([u32; 3]);

impl CategoryScores {
    pub fn get(&self, category: CareerCategory) -> u32 {
        self.0[category.index()]
    }

    fn add(&mut self, category: CareerCategory, points: u32) {
        self.0[category.index()] += points;
    }
}

/// Scores answers positionally against the fixed questions.
/// Unknown values and answers beyond the last question score nothing.
pub fn score_answers(answers: &[String]) -> CategoryScores {
    let mut scores = CategoryScores::default();
    for (question, answer) in QUESTIONS.iter().zip(answers) {
        if let Some(option) = question.options.iter().find(|o| o.value == answer) {
            scores.add(option.category, question.weight);
        }
    }
    scores
}

/// Orders categories by descending score. The sort is stable, so ties keep
/// declaration order (technical, creative, business).
pub fn rank_categories(scores: &CategoryScores) -> Vec<CareerOption> {
    let mut ranked = CareerCategory::ALL.to_vec();
    ranked.sort_by(|a, b| scores.get(*b).cmp(&scores.get(*a)));
    ranked
        .into_iter()
        .take(MAX_CAREER_OPTIONS)
        .map(|category| profile(category).with_score(scores.get(category)))
        .collect()
}
