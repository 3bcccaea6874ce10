//! Library exports for the pagemark annotation overlay core.
//!
//! Exposes the stroke model, the Cairo renderer, the pointer state machine,
//! and the overlay facade so host shells (browser bridges, test harnesses,
//! the bundled replay binary) can drive the same engine.

pub mod config;
pub mod draw;
pub mod input;
pub mod overlay;
pub mod script;
pub mod util;

pub use config::Config;
pub use overlay::Overlay;
