//! Group Recruit - Sign-up sessions for group activities in chat guilds.
//!
//! A user starts a recruitment with a headcount, an optional list of
//! mentioned members and an optional start time. Other members then join,
//! decline or withdraw until the recruitment is closed.
//!
//! The crate follows a hexagonal layout: `domain` holds the rules, `ports`
//! the seams, `adapters` the in-memory and platform implementations, and
//! `application` the handlers a bot front end calls.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
