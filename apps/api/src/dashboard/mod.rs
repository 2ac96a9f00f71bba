// Dashboard Aggregator: read-time view models derived from the stored user,
// plus the static mock endpoints.

pub mod aggregator;
pub mod handlers;
pub mod mock;
