// Chat Responder: keyword-matched career advice behind a pluggable trait,
// plus the mock history/stats endpoints.

pub mod handlers;
pub mod responder;
