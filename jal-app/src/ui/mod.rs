//! UI module - contains UI rendering components
//!
//! Small reusable widgets shared across the tab views.

pub mod components;
