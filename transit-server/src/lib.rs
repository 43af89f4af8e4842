//! Transit trip planner server.
//!
//! A web service that answers: "what are the best ways to travel between
//! these two stations on the network right now?"

pub mod config;
pub mod domain;
pub mod planner;
pub mod store;
pub mod web;
