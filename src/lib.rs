//! Curio Gallery: a personal collection shown as a grid, a list, or a
//! scattered canvas of tilted images.
//!
//! The library holds everything but the window: the seeded layout engine,
//! the drag/shuffle session over it, the catalog with its filters and
//! prices, view and detail navigation state, motion curves, image decoding,
//! and configuration. The `curio-gallery` binary paints it with egui.

pub mod layout;
pub mod interaction;
pub mod catalog;
pub mod price;
pub mod view;
pub mod detail;
pub mod motion;
pub mod assets;
pub mod config;
