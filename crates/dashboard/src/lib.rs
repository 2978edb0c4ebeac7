//! Dashboard crate for the recipe dashboard.
//!
//! This crate contains the load state and the memoized
//! (recipe set, filter spec) -> view computation that the presentation
//! layer renders.

pub mod dashboard;

pub use dashboard::{DashboardView, LoadState, RecipeDashboard, compute_view};
