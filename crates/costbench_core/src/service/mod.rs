//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate scoring and repository calls into use-case level APIs.
//! - Keep CLI/transport layers decoupled from storage details.

pub mod item_service;
