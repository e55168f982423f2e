//! Core entity types and trait definitions for the fan-archive generator.
//!
//! This crate is deliberately free of network and database dependencies.
//! Every normalized record handed to the rendering stage is defined here.

pub mod archive;
pub mod concert;
pub mod release;
pub mod song;
pub mod store;
pub mod tag;
pub mod thanks;
pub mod timeline;
pub mod video;

pub use archive::Archive;
pub use tag::{ClassificationFlags, PrimaryTag};
