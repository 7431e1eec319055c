//! Interactive insert/lookup benchmark for standard-library containers.
//!
//! The binary wires [`Args`](config::Args) into a [`Menu`](menu::Menu)
//! over stdin/stdout; the library surface exists so the menu loop can be
//! driven from tests with scripted input.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod logging;
pub mod menu;

pub use config::{Args, ConfigError, ProbeMode, SessionConfig};
pub use menu::{Menu, MenuChoice, FINISH_CHOICE};
