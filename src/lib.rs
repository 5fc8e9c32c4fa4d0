//! Pushnote - send Pushbullet notes from scripts and automation rules
//!
//! This crate provides a small dispatcher for delivering push notifications
//! ("pushes") to the Pushbullet HTTP API on behalf of named sender
//! credentials ("bots").
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (pushes, recipients, bots, config) and errors
//! - **Application**: The dispatch use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Pushbullet API, config store)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
