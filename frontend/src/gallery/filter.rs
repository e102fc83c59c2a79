use crate::gallery::item::{FilterControl, GalleryItem};

/// Token of the control that shows every item.
pub const ALL_TOKEN: &str = "all";

/// The active gallery filter. Exactly one is active at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FilterToken {
    #[default]
    All,
    Category(String),
}

impl FilterToken {
    pub fn parse(token: &str) -> Self {
        if token == ALL_TOKEN {
            Self::All
        } else {
            Self::Category(token.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_TOKEN,
            Self::Category(category) => category,
        }
    }

    /// Exact, case-sensitive match. An unknown category simply matches nothing.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => wanted == category,
        }
    }
}

/// Show/hide decision for every item, in document order.
pub fn decide(items: &[GalleryItem], token: &FilterToken) -> Vec<bool> {
    items.iter().map(|item| token.matches(&item.category)).collect()
}

/// Position of the control highlighted for `token`. The first control with a
/// matching token wins, so at most one button is ever active.
pub fn active_control(controls: &[FilterControl], token: &FilterToken) -> Option<usize> {
    controls
        .iter()
        .position(|control| control.token == token.as_str())
}
