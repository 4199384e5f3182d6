//! Flight itinerary resolver server.
//!
//! A web service that answers: "given these unordered flights, where does
//! the trip start and where does it end?"

pub mod config;
pub mod domain;
pub mod logging;
pub mod resolver;
pub mod validator;
pub mod web;
