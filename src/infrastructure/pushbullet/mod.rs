//! Pushbullet API adapter

pub mod client;

pub use client::PushbulletClient;
