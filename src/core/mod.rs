//! Core compliance engine for pycomply
//!
//! This module contains the checks and scoring with no direct I/O.
//! All file access goes through the [`ports::SourceAccessor`] trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Verdict, Status, ComplianceReport, Tier)
//! - `services/` - Check registry, individual checks, version parsing
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
