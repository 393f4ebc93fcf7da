//! Ambient plumbing shared by the events workspace: configuration loading,
//! health probes, HTTP middleware, and tracing setup.

pub mod config;
pub mod health;
pub mod middleware;
pub mod tracing;
