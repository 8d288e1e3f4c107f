//! Realtime socket plumbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `live_socket` owns the websocket bootstrap and server event dispatch.
//! Transport-level concerns (reconnection, heartbeats) live with the
//! framework on the server side, not in this layer.

pub mod live_socket;
