//! Storybench - an interactive playground for browsing a catalog of UI
//! components.
//!
//! Pick a component and one of its stories, edit its props through
//! auto-generated controls, and watch intercepted callback invocations land
//! in the action log. The core is the story registry plus the interactive
//! props runtime:
//!
//! - [`registry`] - static design system → component → story catalog
//! - [`session`] - selection & props state machine behind a single
//!   serialization point
//! - [`controls`] - metadata-driven control dispatch
//! - [`actions`] - action interception and logging
//!
//! Everything else ([`catalog`], [`components`], the binary) is
//! presentational plumbing around that core.

pub mod actions;
pub mod catalog;
pub mod components;
pub mod config;
pub mod controls;
pub mod error;
pub mod logging;
pub mod registry;
pub mod session;
pub mod story;
pub mod theme;

#[cfg(test)]
mod session_tests;
