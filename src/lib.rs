//! Client-side booking core for a real-estate agency site.
//!
//! Holds the visit agenda, derives per-property busy intervals for the
//! calendar widget, tracks one booking session at a time and submits visit
//! requests to the remote webhook, which stays the source of truth. The
//! rendering layer (cards, map, calendar DOM) sits behind the trait seams in
//! [`booking::traits`].

pub mod agenda;
pub mod booking;
pub mod loader;
pub mod models;
