//! Polyfleet library.
//!
//! Two entity hierarchies behind one [`entity::Entity`] contract:
//! handsets in [`device`] and vehicles in [`vehicle`].  [`catalog`] builds
//! them from a [`config::CatalogConfig`], [`registry`] holds them in
//! order, and the [`fsm`] + [`app`] layers drive the interactive selector
//! through port traits implemented in [`adapters`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod device;
pub mod entity;
pub mod error;
pub mod fsm;
pub mod registry;
pub mod transcribe;
pub mod vehicle;
