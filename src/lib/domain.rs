//! Domain types and services

pub mod communication;
