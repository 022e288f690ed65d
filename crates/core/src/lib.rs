// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transition rules for versioned tenders and bids.
//!
//! This crate holds no I/O. Given a live entity and a [`Command`], [`apply`]
//! computes the next entity and the snapshot that must be logged alongside
//! it. The [`access`] module decides who may issue which command.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod access;
mod apply;
mod command;
mod error;

#[cfg(test)]
mod tests;

pub use access::{Capability, can_create, can_modify, is_organization_responsible};
pub use apply::{Transition, apply, validate_creation};
pub use command::Command;
pub use error::CoreError;
