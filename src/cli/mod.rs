//! CLI infrastructure for the winstats toolkit
//!
//! This module provides the command-line interface for computing, comparing,
//! and inspecting win statistics.

pub mod commands;
pub mod config;
pub mod output;
