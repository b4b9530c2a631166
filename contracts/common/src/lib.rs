#![no_std]

pub mod scheduler;
pub mod ttl;
