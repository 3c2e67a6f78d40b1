//! Campus route planner.
//!
//! Answers "how do I get from this landmark to that one, and what if I want
//! to pass a bank on the way?" over a walking graph whose travel times depend
//! on the hour of day.

pub mod cache;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod planner;
pub mod web;
