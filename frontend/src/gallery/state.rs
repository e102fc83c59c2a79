use std::rc::Rc;

use yew::Reducible;

use crate::config::MotionPreference;
use crate::gallery::filter::{decide, FilterToken};
use crate::gallery::item::{FilterControl, GalleryItem, GalleryManifest};
use crate::gallery::motion::{plan, ItemPatch, ItemPresentation};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// A deferred patch issued by one filter application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledPatch {
    pub generation: u64,
    pub item: usize,
    pub delay_ms: u32,
    pub patch: ItemPatch,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    pub status: LoadStatus,
    pub items: Rc<Vec<GalleryItem>>,
    pub controls: Rc<Vec<FilterControl>>,
    pub filter: FilterToken,
    pub presentations: Vec<ItemPresentation>,
    /// Bumped by every filter application; deferred patches from older
    /// generations are dropped.
    pub generation: u64,
    /// Deferred patches of the current generation, waiting to be timed.
    pub pending: Rc<Vec<ScheduledPatch>>,
}

pub enum GalleryAction {
    Loaded(GalleryManifest),
    LoadFailed,
    ApplyFilter {
        token: FilterToken,
        motion: MotionPreference,
    },
    Settle(ScheduledPatch),
}

impl GalleryState {
    /// Items whose visibility marker is not `false`, in document order.
    pub fn visible_snapshot(&self) -> Vec<usize> {
        self.presentations
            .iter()
            .enumerate()
            .filter(|(_, presentation)| presentation.marker)
            .map(|(index, _)| index)
            .collect()
    }

    fn apply_filter(&mut self, token: FilterToken, motion: MotionPreference) {
        self.generation += 1;
        let generation = self.generation;
        let mut pending = Vec::new();

        for (index, show) in decide(&self.items, &token).into_iter().enumerate() {
            let plan = plan(index, show, motion);
            if let Some(presentation) = self.presentations.get_mut(index) {
                presentation.apply(&plan.immediate);
            }
            if let Some(deferred) = plan.deferred {
                pending.push(ScheduledPatch {
                    generation,
                    item: index,
                    delay_ms: deferred.delay_ms,
                    patch: deferred.patch,
                });
            }
        }

        log::debug!(
            "gallery filter '{}' (generation {}), {} deferred patches",
            token.as_str(),
            generation,
            pending.len()
        );
        self.filter = token;
        self.pending = Rc::new(pending);
    }

    fn settle(&mut self, scheduled: &ScheduledPatch) -> bool {
        if scheduled.generation != self.generation {
            log::debug!(
                "dropping stale patch from generation {} (current {})",
                scheduled.generation,
                self.generation
            );
            return false;
        }
        match self.presentations.get_mut(scheduled.item) {
            Some(presentation) => {
                presentation.apply(&scheduled.patch);
                true
            }
            None => false,
        }
    }
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            GalleryAction::Loaded(manifest) => Rc::new(GalleryState {
                status: LoadStatus::Ready,
                presentations: vec![ItemPresentation::default(); manifest.items.len()],
                controls: Rc::new(manifest.filter_controls()),
                items: Rc::new(manifest.items),
                ..GalleryState::default()
            }),
            GalleryAction::LoadFailed => Rc::new(GalleryState {
                status: LoadStatus::Failed,
                ..GalleryState::default()
            }),
            GalleryAction::ApplyFilter { token, motion } => {
                let mut next = (*self).clone();
                next.apply_filter(token, motion);
                Rc::new(next)
            }
            GalleryAction::Settle(scheduled) => {
                let mut next = (*self).clone();
                if next.settle(&scheduled) {
                    Rc::new(next)
                } else {
                    self
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(categories: &[&str]) -> Rc<GalleryState> {
        let items = categories
            .iter()
            .map(|category| GalleryItem {
                category: category.to_string(),
                thumbnail: format!("/img/{category}.jpg"),
                full_image: None,
                title: None,
                alt: String::new(),
            })
            .collect();
        Rc::new(GalleryState::default()).reduce(GalleryAction::Loaded(GalleryManifest {
            filters: Vec::new(),
            items,
        }))
    }

    fn filter(state: Rc<GalleryState>, token: &str, motion: MotionPreference) -> Rc<GalleryState> {
        state.reduce(GalleryAction::ApplyFilter {
            token: FilterToken::parse(token),
            motion,
        })
    }

    fn settle_all(mut state: Rc<GalleryState>) -> Rc<GalleryState> {
        let pending = state.pending.clone();
        for scheduled in pending.iter() {
            state = state.reduce(GalleryAction::Settle(scheduled.clone()));
        }
        state
    }

    fn markers(state: &GalleryState) -> Vec<bool> {
        state.presentations.iter().map(|p| p.marker).collect()
    }

    #[test]
    fn loading_marks_every_item_visible() {
        let state = loaded(&["A", "A", "B"]);
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(state.visible_snapshot(), vec![0, 1, 2]);
        assert_eq!(state.filter, FilterToken::All);
    }

    #[test]
    fn filter_then_all_round_trip_with_reduced_motion() {
        let state = loaded(&["A", "A", "B"]);
        let state = filter(state, "A", MotionPreference::Reduced);
        assert!(state.pending.is_empty());
        assert_eq!(markers(&state), vec![true, true, false]);

        let state = filter(state, "all", MotionPreference::Reduced);
        assert_eq!(markers(&state), vec![true, true, true]);
    }

    #[test]
    fn filter_then_all_round_trip_with_motion() {
        let state = loaded(&["A", "A", "B"]);
        let state = filter(state, "A", MotionPreference::Full);
        assert_eq!(markers(&state), vec![true, true, true]);

        let state = settle_all(state);
        assert_eq!(markers(&state), vec![true, true, false]);
        assert_eq!(state.visible_snapshot(), vec![0, 1]);

        let state = filter(state, "all", MotionPreference::Full);
        assert_eq!(markers(&state), vec![true, true, true]);
        let state = settle_all(state);
        assert_eq!(markers(&state), vec![true, true, true]);
        assert!(state.presentations.iter().all(|p| p.laid_out));
    }

    #[test]
    fn stale_hide_does_not_override_newer_show() {
        let state = loaded(&["A", "B"]);
        let state = filter(state, "A", MotionPreference::Full);
        let stale_hide = state
            .pending
            .iter()
            .find(|scheduled| scheduled.item == 1)
            .cloned()
            .expect("item 1 has a deferred hide");

        let state = filter(state, "all", MotionPreference::Full);
        let state = state.reduce(GalleryAction::Settle(stale_hide));
        assert_eq!(markers(&state), vec![true, true]);
        assert!(state.presentations[1].laid_out);
    }

    #[test]
    fn unknown_filter_empties_the_gallery() {
        let state = settle_all(filter(loaded(&["A", "B"]), "Z", MotionPreference::Full));
        assert!(state.visible_snapshot().is_empty());
    }

    #[test]
    fn generations_increase_per_filter() {
        let state = loaded(&["A"]);
        let state = filter(state, "A", MotionPreference::Full);
        let first = state.generation;
        let state = filter(state, "A", MotionPreference::Full);
        assert_eq!(state.generation, first + 1);
        assert!(state.pending.iter().all(|s| s.generation == state.generation));
    }
}
