//! Utility helpers shared across hook modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from hook logic to
//! improve reuse and testability.

pub mod attribute;
