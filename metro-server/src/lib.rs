//! Metro route finder server.
//!
//! Loads a metro network from a CSV dataset and answers: "what is the
//! fewest-stops route between these two stations, and where do I change
//! lines?"

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
