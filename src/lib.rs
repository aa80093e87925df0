//! BankEase — navigation orchestrator for a mobile banking mockup.

pub mod cli;
pub mod config;
pub mod error;
pub mod navigation;
pub mod navigator;
pub mod orchestrator;
pub mod render;
pub mod screens;
pub mod store;
