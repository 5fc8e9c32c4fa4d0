//! Config store adapter

pub mod xdg;

pub use xdg::XdgConfigStore;
