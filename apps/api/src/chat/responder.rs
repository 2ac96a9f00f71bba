//! Rule-based career chat.
//!
//! `ScriptedResponder` is the default `ChatResponder`: it lower-cases the
//! message, walks an ordered list of keyword rules, and returns the first
//! matching canned reply. Only the career/job rule is personalised, using the
//! user's top-ranked career option. Conversation history is accepted at the
//! trait boundary so a model-backed responder can use it; the scripted one
//! ignores it.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::career::CareerOption;

pub const MAX_SUGGESTIONS: usize = 6;

const CAREER_GENERIC: &str = "I'd be happy to help with career guidance! To give you personalized advice, could you tell me about your interests, skills, or the career path you're considering?";

const SKILLS_REPLY: &str = "Developing new skills is crucial for career growth! Based on current market trends, I recommend focusing on: 1) Digital literacy and tech skills, 2) Communication and collaboration, 3) Problem-solving and critical thinking, 4) Adaptability and continuous learning. Which area interests you most?";

pub const RESUME_REPLY: &str = "A strong resume should highlight your relevant experience, skills, and achievements. Key tips: 1) Tailor it to each job application, 2) Use action verbs and quantify achievements, 3) Keep it concise (1-2 pages), 4) Include relevant keywords from job descriptions. Would you like help with a specific section?";

const INTERVIEW_REPLY: &str = "Interview preparation is key to success! Here are essential tips: 1) Research the company and role thoroughly, 2) Practice common interview questions, 3) Prepare specific examples using the STAR method, 4) Ask thoughtful questions about the role and company, 5) Follow up with a thank-you email. What aspect of interviewing would you like to focus on?";

const SALARY_REPLY: &str = "Salary negotiation is an important career skill! Research market rates for your role and location using sites like Glassdoor or PayScale. Consider the total compensation package, not just base salary. Present your value proposition clearly and be prepared to discuss your achievements. Would you like tips on how to approach this conversation?";

const NETWORK_REPLY: &str = "Networking is crucial for career success! Start by: 1) Optimizing your LinkedIn profile, 2) Attending industry events and webinars, 3) Joining professional associations, 4) Reaching out to alumni and colleagues, 5) Offering value before asking for help. Quality connections matter more than quantity. How can I help you build your network?";

const TRANSITION_REPLY: &str = "Career transitions can be exciting opportunities for growth! Key steps: 1) Assess your transferable skills, 2) Research your target industry thoroughly, 3) Build relevant skills through courses or projects, 4) Network with professionals in your target field, 5) Consider transitional roles or freelance work. What type of career change are you considering?";

const GREETING_REPLY: &str = "Hello! I'm your AI career guidance assistant. I'm here to help you with career planning, skill development, job search strategies, and professional growth. What career topic would you like to explore today?";

const THANKS_REPLY: &str = "You're very welcome! I'm here whenever you need career guidance or have questions about your professional development. Best of luck with your career journey!";

pub const DEFAULT_REPLY: &str = "I'm here to help with your career development! I can assist with career planning, skill development, resume writing, interview preparation, networking, and job search strategies. What specific career topic would you like to discuss?";

const BASE_SUGGESTIONS: [&str; 4] = [
    "How can I improve my resume?",
    "What skills should I develop for my career?",
    "Tell me about networking strategies",
    "How do I prepare for job interviews?",
];

/// Keyword rules after the career rule, checked in order. Matching is by
/// substring, so "hi" also matches inside longer words.
const RULES: &[(&[&str], &str)] = &[
    (&["skill", "learn"], SKILLS_REPLY),
    (&["resume", "cv"], RESUME_REPLY),
    (&["interview"], INTERVIEW_REPLY),
    (&["salary", "negotiate"], SALARY_REPLY),
    (&["network", "connect"], NETWORK_REPLY),
    (&["change", "transition"], TRANSITION_REPLY),
    (&["hello", "hi", "hey"], GREETING_REPLY),
    (&["thank"], THANKS_REPLY),
];

fn career_reply(career_options: &[CareerOption]) -> String {
    match career_options.first() {
        Some(top) => format!(
            "Based on your career assessment, you showed strong alignment with {}. This field focuses on {} Key skills to develop include: {}. Would you like specific advice on getting started in this field?",
            top.title,
            top.description.to_lowercase(),
            top.skills.join(", ")
        ),
        None => CAREER_GENERIC.to_string(),
    }
}

/// Returns the canned reply for `message`.
pub fn respond(message: &str, career_options: &[CareerOption]) -> String {
    let lower = message.to_lowercase();

    if lower.contains("career") || lower.contains("job") {
        return career_reply(career_options);
    }

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, reply)| reply.to_string())
        .unwrap_or_else(|| DEFAULT_REPLY.to_string())
}

/// Prompt suggestions, led by two about the user's top career when known.
pub fn suggestions(career_options: &[CareerOption]) -> Vec<String> {
    let mut out = Vec::with_capacity(MAX_SUGGESTIONS);
    if let Some(top) = career_options.first() {
        out.push(format!("What skills do I need for {}?", top.title));
        out.push(format!("Tell me more about {} career path", top.title));
    }
    out.extend(BASE_SUGGESTIONS.iter().map(|s| s.to_string()));
    out.truncate(MAX_SUGGESTIONS);
    out
}

/// Produces a chat reply. Swap the implementation in `AppState` to change
/// how replies are generated without touching the handlers.
#[async_trait]
pub trait ChatResponder: Send + Sync {
    async fn reply(
        &self,
        message: &str,
        history: &[Value],
        career_options: &[CareerOption],
    ) -> Result<String, AppError>;
}

/// Default keyword-rule responder. Stateless.
pub struct ScriptedResponder;

#[async_trait]
impl ChatResponder for ScriptedResponder {
    async fn reply(
        &self,
        message: &str,
        _history: &[Value],
        career_options: &[CareerOption],
    ) -> Result<String, AppError> {
        Ok(respond(message, career_options))
    }
}
