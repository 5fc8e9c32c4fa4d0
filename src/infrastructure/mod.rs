//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the Pushbullet API and the local filesystem.

pub mod config;
pub mod pushbullet;

// Re-export adapters
pub use config::XdgConfigStore;
pub use pushbullet::PushbulletClient;
