//! Database models for the lounge catalog and the dashboard chart series.

pub mod chart;
pub mod game;
pub mod reservation;
pub mod service;
