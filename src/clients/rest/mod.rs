//! Account-scoped REST client.
//!
//! [`LightspeedClient`] is built on top of the
//! [`HttpClient`](crate::clients::HttpClient) transport and adds account
//! discovery, the retry policy, and envelope validation.
//!
//! # Retry Behavior
//!
//! GET and JSON POST requests that fail at the transport level are re-issued
//! up to `max_retries` times (default 5, so at most 6 attempts). When every
//! attempt fails, the call returns an empty [`Envelope`](crate::clients::Envelope)
//! instead of an error. PUT and XML POST requests are sent once, and a
//! transport failure surfaces as
//! [`RequestError::Transport`](crate::clients::RequestError::Transport).

mod client;

pub use client::LightspeedClient;
