//! # Repository Implementations
//!
//! One repository per aggregate, each wrapping a clone of the pool:
//!
//! - [`venue`] - Venues, photos, cities, availability
//! - [`catalog`] - Packages, addons, time slots
//! - [`booking`] - Bookings with frozen invoice lines
//! - [`user`] - User accounts
//!
//! ## Row Mapping
//! Rows are read into plain `#[derive(sqlx::FromRow)]` record structs and
//! then converted into qa3at-core domain types. The conversion is where
//! stored enum strings are parsed; an unknown string is a
//! [`DbError::CorruptRow`](crate::error::DbError), never a silent default.

pub mod booking;
pub mod catalog;
pub mod user;
pub mod venue;
