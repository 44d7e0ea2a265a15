//! Keyword routing for canned assistant replies

/// Keyword groups checked in order; the first group with a hit wins
const ROUTES: [(&[&str], &str); 7] = [
    (&["health"], "healthInsuranceResponse"),
    (&["life"], "lifeInsuranceResponse"),
    (&["vehicle", "car", "auto"], "vehicleInsuranceResponse"),
    (&["home", "property"], "homeInsuranceResponse"),
    (&["claim"], "claimResponse"),
    (&["premium"], "premiumResponse"),
    (&["community", "pool"], "communityPoolResponse"),
];

pub const DEFAULT_REPLY_KEY: &str = "defaultBotResponse";

/// Pick the translation key of the reply for a user message
pub fn route_reply(message: &str) -> &'static str {
    let message = message.to_lowercase();
    ROUTES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
        .map(|(_, key)| *key)
        .unwrap_or(DEFAULT_REPLY_KEY)
}

/// Translation keys for the quick-reply chips
pub const QUICK_REPLY_KEYS: [&str; 4] = [
    "compareHealthPlans",
    "claimProcess",
    "premiumCalculator",
    "communityPools",
];
