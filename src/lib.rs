//! Scroll-synchronised portfolio page. The state modules build on every
//! target; `browser` and `frontend` need `wasm32`.

pub mod config;
pub mod contact;
pub mod content;
pub mod controller;
pub mod events;
pub mod layout;
pub mod loading;
pub mod navigator;
pub mod scroll;
pub mod sections;
pub mod telemetry;
pub mod theme;
pub mod visibility;

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(target_arch = "wasm32")]
pub mod frontend;
