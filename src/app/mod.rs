//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the fan controller:
//! the periodic schedule, the mode machine, the speed policy, and the
//! host command handling.  All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod ports;
pub mod service;
pub mod view;
