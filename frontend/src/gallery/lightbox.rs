//! Lightbox open/close and navigation state.
//!
//! Commands are reduced one at a time through `use_reducer`, so a burst of
//! clicks on "next" is just a sequence of pure transitions.

use std::rc::Rc;

use yew::Reducible;

/// Transient state of an open lightbox.
///
/// The snapshot is frozen when the lightbox opens; filtering underneath does
/// not change what prev/next walk through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxSession {
    snapshot: Vec<usize>,
    index: usize,
}

impl LightboxSession {
    /// Starts a session on `item`, or `None` when `item` is not part of the
    /// visible snapshot.
    pub fn open(item: usize, snapshot: Vec<usize>) -> Option<Self> {
        let index = snapshot.iter().position(|&candidate| candidate == item)?;
        Some(Self { snapshot, index })
    }

    /// Gallery index of the displayed item.
    pub fn current(&self) -> usize {
        self.snapshot[self.index]
    }

    /// Position of the displayed item within the snapshot.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// Prev/next only make sense with more than one item.
    pub fn has_navigation(&self) -> bool {
        self.snapshot.len() > 1
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.snapshot.len();
    }

    pub fn previous(&mut self) {
        let len = self.snapshot.len();
        self.index = (self.index + len - 1) % len;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LightboxCommand {
    Open { item: usize, snapshot: Vec<usize> },
    Next,
    Previous,
    Close,
}

impl LightboxCommand {
    /// Keyboard shortcuts while the lightbox is open.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(LightboxSession),
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open(_))
    }

    pub fn session(&self) -> Option<&LightboxSession> {
        match self {
            LightboxState::Open(session) => Some(session),
            LightboxState::Closed => None,
        }
    }

    /// Applies one command. Navigation and close are ignored while closed.
    pub fn apply(&self, command: LightboxCommand) -> LightboxState {
        match (self, command) {
            (_, LightboxCommand::Open { item, snapshot }) => {
                match LightboxSession::open(item, snapshot) {
                    Some(session) => LightboxState::Open(session),
                    None => {
                        log::warn!("gallery item {} is not visible, lightbox stays closed", item);
                        self.clone()
                    }
                }
            }
            (LightboxState::Closed, _) => LightboxState::Closed,
            (LightboxState::Open(session), LightboxCommand::Next) => {
                let mut session = session.clone();
                session.next();
                LightboxState::Open(session)
            }
            (LightboxState::Open(session), LightboxCommand::Previous) => {
                let mut session = session.clone();
                session.previous();
                LightboxState::Open(session)
            }
            (LightboxState::Open(_), LightboxCommand::Close) => LightboxState::Closed,
        }
    }
}

impl Reducible for LightboxState {
    type Action = LightboxCommand;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
