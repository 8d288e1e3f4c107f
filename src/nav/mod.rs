//! Navigation lifecycle reactions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page transitions are signalled by window events emitted around live
//! navigation; `loading_bar` reacts by showing a top-of-page indicator for
//! slow transitions only.

pub mod loading_bar;
