//! Earnings estimator for London ride-hailing drivers.
//!
//! This crate estimates a driver's weekly, hourly and monthly earnings from
//! their hours, shift times, weekend work and car category, and renders the
//! result as a breakdown with share links. The calculation core lives in
//! [`calculation`] and has no dependency on the HTTP front end in [`api`].

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
