//! Capture zones for game rounds.
//!
//! [`zones`] holds the geometry core; [`server`] hosts a rotation of zones and
//! tracks player occupancy each tick.

pub use server;
pub use zones;
