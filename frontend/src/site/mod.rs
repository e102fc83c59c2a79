//! Page-wide interactions: navigation marker, scroll reveal, lazy images and
//! the contact form.

pub mod contact;
pub mod lazy_image;
pub mod nav;
pub mod reveal;
pub mod viewport;

pub use contact::ContactForm;
pub use lazy_image::LazyImage;
pub use nav::Header;
pub use reveal::Reveal;
