//! Badge signal derivation.
//!
//! A page's badge shows its event count (capped at "99+") colored by the
//! worst status across its platform summaries.

use crate::model::event::EventStatus;
use crate::model::state::PageState;
use crate::summary::worst_status;

/// Badge color, one per status level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Ok,
    Warning,
    Error,
}

impl BadgeColor {
    pub fn as_hex(&self) -> &'static str {
        match self {
            BadgeColor::Ok => "#10b981",
            BadgeColor::Warning => "#f59e0b",
            BadgeColor::Error => "#ef4444",
        }
    }
}

impl From<EventStatus> for BadgeColor {
    fn from(status: EventStatus) -> Self {
        match status {
            EventStatus::Ok => BadgeColor::Ok,
            EventStatus::Warning => BadgeColor::Warning,
            EventStatus::Error => BadgeColor::Error,
        }
    }
}

/// Derived badge state for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSignal {
    /// Display text: empty for zero events, "99+" past the display cap.
    pub text: String,
    pub color: BadgeColor,
}

impl BadgeSignal {
    /// Signal for an empty page.
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            color: BadgeColor::Ok,
        }
    }
}

/// Derive the badge signal from a page's state.
pub fn badge_signal(state: &PageState) -> BadgeSignal {
    let count = state.events.len();
    let text = if count > 99 {
        "99+".to_string()
    } else if count > 0 {
        count.to_string()
    } else {
        String::new()
    };

    BadgeSignal {
        text,
        color: worst_status(&state.platforms).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::test_event;
    use crate::model::platform::Platform;
    use crate::summary::summarize;

    #[test]
    fn test_empty_page() {
        let state = PageState::empty(1);
        assert_eq!(badge_signal(&state), BadgeSignal::empty());
    }

    #[test]
    fn test_count_and_color() {
        let mut state = PageState::empty(1);
        let mut warn = test_event(Platform::Meta, "Purchase");
        warn.push_warning("dup");
        state.events = vec![test_event(Platform::Meta, "PageView"), warn];
        state.platforms = summarize(&state.events);

        let signal = badge_signal(&state);
        assert_eq!(signal.text, "2");
        assert_eq!(signal.color, BadgeColor::Warning);
        assert_eq!(signal.color.as_hex(), "#f59e0b");
    }

    #[test]
    fn test_display_cap() {
        let mut state = PageState::empty(1);
        for _ in 0..120 {
            state.events.push(test_event(Platform::Ga4, "page_view"));
        }
        state.platforms = summarize(&state.events);
        assert_eq!(badge_signal(&state).text, "99+");
    }
}
