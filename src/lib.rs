//! menuboard: a terminal menu board for a restaurant.
//!
//! Dishes are added, browsed, filtered and removed across four fixed courses;
//! the dashboard shows per-course counts and average prices. Everything lives
//! in memory for one session.

pub mod app;
pub mod catalog;
pub mod config;
pub mod form;
pub mod logging;
pub mod store;
pub mod terminal;
pub mod ui;
