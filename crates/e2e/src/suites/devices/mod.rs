//! Devices section: cameras, doors, hubs.

pub mod all_cameras;
pub mod all_doors;
pub mod all_hubs;
pub mod camera_activity;
pub mod door_activity;
