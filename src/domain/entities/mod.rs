//! Core domain entities.
//!
//! Entities are plain data structures. Creation and update inputs get their own
//! structs (`NewUser`, `UpdateUser`) so storage-assigned fields never have to be
//! faked.

pub mod user;

pub use user::{NewUser, UpdateUser, User};
