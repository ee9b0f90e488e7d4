//! Core types for the board game meetups client.
//!
//! This crate holds everything that is not terminal plumbing:
//! - `event` for the event records exchanged with the events API
//! - `time_format` for turning loosely-encoded dates and times into display strings
//! - `api` for the REST client and the `EventApi` seam used by pages
//! - `pages` for the list, detail, create and preview view models

pub mod api;
pub mod config;
pub mod error;
pub mod event;
pub mod pages;
pub mod route;
pub mod time_format;

pub use api::{EventApi, HttpEventApi};
pub use config::ClientConfig;
pub use error::{MeetupsError, MeetupsResult};
pub use event::{Event, NewEvent, PLACEHOLDER_IMAGE};
pub use route::Route;
