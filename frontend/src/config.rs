//! Site-wide constants and the motion preference read once at startup.

/// Where the gallery content manifest is served from.
pub const GALLERY_MANIFEST_PATH: &str = "/assets/gallery.json";

/// Delay before a hidden gallery item leaves the layout and flips its marker.
pub const HIDE_DELAY_MS: u32 = 200;

/// Per-position stagger for items fading back in.
pub const SHOW_STAGGER_MS: u32 = 50;

/// How long the contact form pretends to be sending.
pub const SUBMIT_SIMULATION_MS: u32 = 1_500;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Whether the visitor asked the system for reduced motion.
///
/// Read once when the app mounts and handed down through a context, so a change
/// of the OS setting mid-session is not picked up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn detect() -> Self {
        let reduced = web_sys::window()
            .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false);
        log::debug!("prefers-reduced-motion: {}", reduced);
        if reduced {
            Self::Reduced
        } else {
            Self::Full
        }
    }

    pub fn is_reduced(self) -> bool {
        self == Self::Reduced
    }
}
