//! Static reference data: the four quiz questions and the three career
//! category profiles. Compiled in; never read from storage.

use serde::Serialize;

use crate::models::career::{CareerCategory, CareerOption};

#[derive(Debug, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
    /// Bucket that picking this option scores for.
    #[serde(skip)]
    pub category: CareerCategory,
}

#[derive(Debug, Serialize)]
pub struct Question {
    pub id: u32,
    pub question: &'static str,
    pub options: [QuestionOption; 3],
    /// Points awarded to the chosen option's category.
    #[serde(skip)]
    pub weight: u32,
}

pub static QUESTIONS: [Question; 4] = [
    Question {
        id: 1,
        question: "How do you prefer to solve problems?",
        weight: 3,
        options: [
            QuestionOption {
                value: "logical",
                label: "Through logical analysis and systematic approaches",
                category: CareerCategory::Technical,
            },
            QuestionOption {
                value: "creative",
                label: "Through creative thinking and innovative solutions",
                category: CareerCategory::Creative,
            },
            QuestionOption {
                value: "strategic",
                label: "Through strategic planning and team collaboration",
                category: CareerCategory::Business,
            },
        ],
    },
    Question {
        id: 2,
        question: "What work environment appeals to you most?",
        weight: 2,
        options: [
            QuestionOption {
                value: "computer",
                label: "Working with computers and technology",
                category: CareerCategory::Technical,
            },
            QuestionOption {
                value: "studio",
                label: "Creative studio or design workspace",
                category: CareerCategory::Creative,
            },
            QuestionOption {
                value: "office",
                label: "Professional office with team meetings",
                category: CareerCategory::Business,
            },
        ],
    },
    Question {
        id: 3,
        question: "Which skills would you like to develop further?",
        weight: 3,
        options: [
            QuestionOption {
                value: "coding",
                label: "Programming and technical skills",
                category: CareerCategory::Technical,
            },
            QuestionOption {
                value: "design",
                label: "Design and creative skills",
                category: CareerCategory::Creative,
            },
            QuestionOption {
                value: "management",
                label: "Leadership and management skills",
                category: CareerCategory::Business,
            },
        ],
    },
    Question {
        id: 4,
        question: "What motivates you most in your career?",
        weight: 2,
        options: [
            QuestionOption {
                value: "innovation",
                label: "Creating innovative solutions and products",
                category: CareerCategory::Technical,
            },
            QuestionOption {
                value: "expression",
                label: "Expressing creativity and artistic vision",
                category: CareerCategory::Creative,
            },
            QuestionOption {
                value: "leadership",
                label: "Leading teams and driving business success",
                category: CareerCategory::Business,
            },
        ],
    },
];

#[derive(Debug)]
pub struct CareerProfile {
    pub id: CareerCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub careers: &'static [&'static str],
    pub growth: &'static str,
}

impl CareerProfile {
    pub fn with_score(&self, score: u32) -> CareerOption {
        CareerOption {
            id: self.id,
            title: self.title.to_string(),
            description: self.description.to_string(),
            skills: self.skills.iter().map(|s| s.to_string()).collect(),
            careers: self.careers.iter().map(|s| s.to_string()).collect(),
            growth: self.growth.to_string(),
            score,
        }
    }
}

/// Indexed by `CareerCategory::index`.
static CAREER_PROFILES: [CareerProfile; 3] = [
    CareerProfile {
        id: CareerCategory::Technical,
        title: "Software Development & Technology",
        description: "Perfect for logical thinkers who enjoy problem-solving and creating digital solutions.",
        skills: &["Programming", "Problem Solving", "Analytical Thinking", "Innovation"],
        careers: &[
            "Software Engineer",
            "Data Scientist",
            "Cybersecurity Specialist",
            "AI/ML Engineer",
        ],
        growth: "High demand with excellent growth prospects in the digital economy.",
    },
    CareerProfile {
        id: CareerCategory::Creative,
        title: "Creative & Design",
        description: "Ideal for artistic minds who want to express creativity and design beautiful experiences.",
        skills: &["Creativity", "Visual Design", "Communication", "Innovation"],
        careers: &[
            "UX/UI Designer",
            "Graphic Designer",
            "Content Creator",
            "Digital Marketer",
        ],
        growth: "Growing field with opportunities in digital media and user experience.",
    },
    CareerProfile {
        id: CareerCategory::Business,
        title: "Business & Management",
        description: "Great for leaders who enjoy strategy, team management, and driving business growth.",
        skills: &["Leadership", "Strategic Thinking", "Communication", "Analysis"],
        careers: &[
            "Product Manager",
            "Business Analyst",
            "Consultant",
            "Entrepreneur",
        ],
        growth: "Stable career path with opportunities for leadership and business impact.",
    },
];

pub fn profile(category: CareerCategory) -> &'static CareerProfile {
    &CAREER_PROFILES[category.index()]
}
