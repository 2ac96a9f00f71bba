// Quiz Engine: the fixed question set, answer scoring and category ranking,
// and persistence of results.

pub mod catalog;
pub mod engine;
pub mod handlers;
pub mod scoring;
