// AI demo widgets: offline keyword heuristics, no model and no network calls.
// The rule engines are pure; handlers add the cosmetic latency.

pub mod classifier;
pub mod handlers;
pub mod latency;
pub mod recommender;

/// Canned client email offered by the "try a sample" button.
pub const SAMPLE_EMAIL: &str = "Hi Jordan,

Hope you're doing well! I wanted to touch base regarding our contract renewal coming up in Q1.

We've been really happy with the solution, but I need to discuss a few concerns with my team before we finalize. The CEO has some questions about ROI and wants to explore additional modules for our European operations.

Can we schedule a call this week to discuss? This is somewhat urgent as we need to present to the board next Friday.

Thanks,
Sarah Johnson
VP Operations";
