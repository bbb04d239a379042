//! Core types, model access, and configuration for bimcheck.
//!
//! This crate provides the foundational data structures used across all bimcheck crates:
//! - [`types`] — Entities, attribute groups, nominal values, and error types
//! - [`model`] — The [`BuildingModel`](model::BuildingModel) read trait and the
//!   [`ModelProvider`](model::ModelProvider) acquisition trait
//! - [`memory`] — petgraph-backed in-memory implementation of `BuildingModel`
//! - [`snapshot`] — JSON model snapshots loaded into a [`MemoryModel`](memory::MemoryModel)
//! - [`config`] — Configuration loading from `bimcheck.json`

pub mod config;
pub mod memory;
pub mod model;
pub mod snapshot;
pub mod types;
