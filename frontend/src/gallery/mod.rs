//! Filterable image gallery with a lightbox viewer.

pub mod filter;
pub mod grid;
pub mod item;
pub mod lightbox;
pub mod motion;
pub mod state;
pub mod viewer;

pub use grid::Gallery;
