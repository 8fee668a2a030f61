//! vitrina site
//!
//! The composing views of the marketing site: each section mounts a
//! carousel from `vitrina-core`, feeds it from the resource loader and
//! chooses its click policy. The `vitrina` binary previews the sections
//! as text.
#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod render;
pub mod sections;
