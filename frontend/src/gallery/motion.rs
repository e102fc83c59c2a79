//! Presentation patches for showing and hiding gallery items.
//!
//! The filter decides *whether* an item is shown; this module decides *how* the
//! change reaches the page. With motion allowed a show is marked visible at once
//! and faded in after a stagger, while a hide fades out first and only flips the
//! marker once it has left the layout.

use crate::config::{MotionPreference, HIDE_DELAY_MS, SHOW_STAGGER_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// `opacity: 0; transform: scale(0.8)`
    Collapsed,
    /// `opacity: 1; transform: scale(1)`
    Expanded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    FadeOut,
    FadeIn,
}

impl Transition {
    fn css(self) -> &'static str {
        match self {
            Transition::FadeOut => "opacity 0.2s ease, transform 0.2s ease",
            Transition::FadeIn => "opacity 0.3s ease, transform 0.3s ease",
        }
    }
}

/// What one grid item currently looks like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemPresentation {
    /// `false` renders `display: none`.
    pub laid_out: bool,
    /// Rendered as `data-visible`; the lightbox builds its snapshot from it.
    pub marker: bool,
    pub stage: Option<Stage>,
    pub transition: Option<Transition>,
}

impl Default for ItemPresentation {
    fn default() -> Self {
        Self {
            laid_out: true,
            marker: true,
            stage: None,
            transition: None,
        }
    }
}

impl ItemPresentation {
    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(laid_out) = patch.laid_out {
            self.laid_out = laid_out;
        }
        if let Some(marker) = patch.marker {
            self.marker = marker;
        }
        if let Some(stage) = patch.stage {
            self.stage = stage;
        }
        if let Some(transition) = patch.transition {
            self.transition = transition;
        }
    }

    /// Inline style for the item element.
    pub fn style(&self) -> String {
        let mut style = String::new();
        if !self.laid_out {
            style.push_str("display: none; ");
        }
        if let Some(transition) = self.transition {
            style.push_str("transition: ");
            style.push_str(transition.css());
            style.push_str("; ");
        }
        match self.stage {
            Some(Stage::Collapsed) => style.push_str("opacity: 0; transform: scale(0.8);"),
            Some(Stage::Expanded) => style.push_str("opacity: 1; transform: scale(1);"),
            None => {}
        }
        style.trim_end().to_string()
    }
}

/// A partial update; `None` fields leave the presentation untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub laid_out: Option<bool>,
    pub marker: Option<bool>,
    pub stage: Option<Option<Stage>>,
    pub transition: Option<Option<Transition>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deferred {
    pub delay_ms: u32,
    pub patch: ItemPatch,
}

/// The immediate patch for a filter change and, with motion, the one that
/// follows after a delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPlan {
    pub immediate: ItemPatch,
    pub deferred: Option<Deferred>,
}

/// Plans the show or hide of the item at `position` in the full, unfiltered list.
pub fn plan(position: usize, show: bool, motion: MotionPreference) -> TransitionPlan {
    if motion.is_reduced() {
        return TransitionPlan {
            immediate: ItemPatch {
                laid_out: Some(show),
                marker: Some(show),
                stage: Some(None),
                transition: Some(None),
            },
            deferred: None,
        };
    }

    if show {
        TransitionPlan {
            immediate: ItemPatch {
                laid_out: Some(true),
                marker: Some(true),
                stage: Some(Some(Stage::Collapsed)),
                transition: Some(None),
            },
            deferred: Some(Deferred {
                delay_ms: stagger_delay(position),
                patch: ItemPatch {
                    stage: Some(Some(Stage::Expanded)),
                    transition: Some(Some(Transition::FadeIn)),
                    ..ItemPatch::default()
                },
            }),
        }
    } else {
        TransitionPlan {
            immediate: ItemPatch {
                stage: Some(Some(Stage::Collapsed)),
                transition: Some(Some(Transition::FadeOut)),
                ..ItemPatch::default()
            },
            deferred: Some(Deferred {
                delay_ms: HIDE_DELAY_MS,
                patch: ItemPatch {
                    laid_out: Some(false),
                    marker: Some(false),
                    ..ItemPatch::default()
                },
            }),
        }
    }
}

fn stagger_delay(position: usize) -> u32 {
    u32::try_from(position)
        .unwrap_or(u32::MAX)
        .saturating_mul(SHOW_STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(plan: &TransitionPlan) -> ItemPresentation {
        let mut presentation = ItemPresentation::default();
        presentation.apply(&plan.immediate);
        if let Some(deferred) = &plan.deferred {
            presentation.apply(&deferred.patch);
        }
        presentation
    }

    #[test]
    fn reduced_motion_applies_final_state_synchronously() {
        for show in [true, false] {
            let plan = plan(3, show, MotionPreference::Reduced);
            assert!(plan.deferred.is_none());

            let mut presentation = ItemPresentation::default();
            presentation.apply(&plan.immediate);
            assert_eq!(presentation.marker, show);
            assert_eq!(presentation.laid_out, show);
            assert_eq!(presentation.stage, None);
            assert_eq!(presentation.transition, None);
        }
    }

    #[test]
    fn hide_marker_flips_only_after_delay() {
        let plan = plan(0, false, MotionPreference::Full);

        let mut presentation = ItemPresentation::default();
        presentation.apply(&plan.immediate);
        assert!(presentation.marker, "marker must stay true while fading out");
        assert!(presentation.laid_out);
        assert_eq!(presentation.stage, Some(Stage::Collapsed));

        let deferred = plan.deferred.expect("hide is deferred");
        assert_eq!(deferred.delay_ms, HIDE_DELAY_MS);
        presentation.apply(&deferred.patch);
        assert!(!presentation.marker);
        assert!(!presentation.laid_out);
    }

    #[test]
    fn show_marks_visible_immediately_and_fades_in_later() {
        let plan = plan(4, true, MotionPreference::Full);

        let mut presentation = ItemPresentation {
            laid_out: false,
            marker: false,
            stage: Some(Stage::Collapsed),
            transition: Some(Transition::FadeOut),
        };
        presentation.apply(&plan.immediate);
        assert!(presentation.marker);
        assert!(presentation.laid_out);
        assert_eq!(presentation.stage, Some(Stage::Collapsed));
        assert_eq!(presentation.transition, None);

        let deferred = plan.deferred.expect("show is staggered");
        assert_eq!(deferred.delay_ms, 4 * SHOW_STAGGER_MS);
        presentation.apply(&deferred.patch);
        assert_eq!(presentation.stage, Some(Stage::Expanded));
        assert_eq!(presentation.transition, Some(Transition::FadeIn));
    }

    #[test]
    fn stagger_is_monotonic_in_document_order() {
        let delays: Vec<u32> = (0..6)
            .map(|position| {
                plan(position, true, MotionPreference::Full)
                    .deferred
                    .map(|d| d.delay_ms)
                    .unwrap_or_default()
            })
            .collect();
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(delays[0], 0);
    }

    #[test]
    fn settled_states_match_the_decision() {
        assert!(settled(&plan(1, true, MotionPreference::Full)).marker);
        assert!(!settled(&plan(1, false, MotionPreference::Full)).marker);
    }

    #[test]
    fn style_renders_layout_transition_and_stage() {
        let hidden = ItemPresentation {
            laid_out: false,
            marker: false,
            stage: Some(Stage::Collapsed),
            transition: Some(Transition::FadeOut),
        };
        assert_eq!(
            hidden.style(),
            "display: none; transition: opacity 0.2s ease, transform 0.2s ease; opacity: 0; transform: scale(0.8);"
        );
        assert_eq!(ItemPresentation::default().style(), "");
    }
}
