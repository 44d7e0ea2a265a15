//! Screen selection for the app shell

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Dashboard,
    RiskProfiler,
    Comparison,
    Community,
    InsuranceSearch,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Dashboard,
        Screen::RiskProfiler,
        Screen::Comparison,
        Screen::Community,
        Screen::InsuranceSearch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Dashboard => "dashboard",
            Screen::RiskProfiler => "risk-profiler",
            Screen::Comparison => "comparison",
            Screen::Community => "community",
            Screen::InsuranceSearch => "insurance-search",
        }
    }

    /// Unknown names land on the dashboard
    pub fn from_name(name: &str) -> Self {
        Screen::ALL
            .into_iter()
            .find(|s| s.as_str() == name)
            .unwrap_or_default()
    }

    /// Translation key for the navigation label
    pub fn label_key(&self) -> &'static str {
        match self {
            Screen::Dashboard => "dashboard",
            Screen::RiskProfiler => "riskProfiler",
            Screen::Comparison => "compare",
            Screen::Community => "community",
            Screen::InsuranceSearch => "searchPlans",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Holds the current screen; every screen's back action returns to the dashboard
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn navigate(&mut self, screen: Screen) {
        log::debug!("navigate {} -> {}", self.current, screen);
        self.current = screen;
    }

    pub fn navigate_to(&mut self, name: &str) {
        self.navigate(Screen::from_name(name));
    }

    pub fn back(&mut self) {
        self.navigate(Screen::Dashboard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_names() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_name(screen.as_str()), screen);
        }
        assert_eq!(Screen::from_name("settings"), Screen::Dashboard);
    }

    #[test]
    fn test_navigation() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), Screen::Dashboard);

        nav.navigate_to("insurance-search");
        assert_eq!(nav.current(), Screen::InsuranceSearch);

        nav.back();
        assert_eq!(nav.current(), Screen::Dashboard);

        nav.navigate_to("nowhere");
        assert_eq!(nav.current(), Screen::Dashboard);
    }
}
