//! IKM Survey - Kiosk Public Service Satisfaction Survey
//!
//! This crate implements the community satisfaction index (IKM) survey
//! backend: kiosk submission flow, per-counter aggregation and grading,
//! and the admin reporting surface.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
