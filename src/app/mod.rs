//! Application core: selector logic with no direct I/O.
//!
//! The interactive session, its menus, and the device walk-through live
//! here.  All interaction with the terminal and the catalog source
//! happens through **port traits** defined in [`ports`], keeping this
//! layer testable with in-memory adapters.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
pub mod showcase;
