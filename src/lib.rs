//! Travel Planner - itinerary and budget tracking service
//!
//! A travel plan owns a date range, a budget, the days of the trip with their
//! scheduled activities, and the expenses charged against the budget. The
//! plan aggregate enforces its own rules; the application layer serializes
//! mutations per plan and the HTTP adapter exposes them as a REST API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
