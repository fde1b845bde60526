#![forbid(unsafe_code)]

//! Instacam terminal application: screens, chrome, and the shell model.

pub mod app;
pub mod chrome;
pub mod cli;
pub mod screens;
pub mod theme;
