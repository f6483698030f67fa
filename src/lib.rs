//! Domain entities that announce their state changes through a synchronous,
//! in-process event dispatcher.
//!
//! - [`events`]: generic event/handler contracts and the `EventDispatcher`
//! - [`domain`]: customer, product and order entities, their events and handlers
//! - [`repository`]: repository contracts with an in-memory implementation
//! - [`metrics`]: optional Prometheus metrics for dispatch
//! - [`config`]: environment-driven settings for the demo binary

pub mod config;
pub mod domain;
pub mod events;
pub mod metrics;
pub mod repository;
