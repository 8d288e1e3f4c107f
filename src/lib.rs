//! # battler-client
//!
//! WASM client layer for the Battler web application. The server renders all
//! HTML and pushes DOM patches and attribute payloads over a realtime socket;
//! this crate attaches the client-side behavior: element lifecycle hooks
//! (progress bar, countdown timer), the navigation loading indicator, the
//! socket bootstrap, and the declarative styling build configuration.
//!
//! Pure hook logic lives outside the `hydrate` feature so it compiles and
//! tests natively; browser glue (DOM writes, timers, the websocket) is gated
//! behind it.

pub mod boot;
pub mod hooks;
pub mod nav;
pub mod net;
pub mod style;
pub mod util;
