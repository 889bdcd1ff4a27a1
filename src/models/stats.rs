//! Headline statistics shown on the landing page.

use serde::Serialize;

/// Fixed snapshot. Never persisted and never read from the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub successful_submissions: i64,
    pub project_weeks_saved: i64,
    pub client_satisfaction: f64,
    pub countries_served: i64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            successful_submissions: 870,
            project_weeks_saved: 4000,
            client_satisfaction: 98.5,
            countries_served: 47,
        }
    }
}
