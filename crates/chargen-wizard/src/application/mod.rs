//! Application layer: the host-facing controller and its render views.

pub mod controller;
pub mod snapshot;
