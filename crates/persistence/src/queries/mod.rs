// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! ## Module Organization
//!
//! - `identity`: Organizations, employees and responsibility links
//! - `tenders`: Tenders and their version log
//! - `bids`: Bids and their version log
//! - `reviews`: Reviews joined with their authors

pub mod bids;
pub mod identity;
pub mod reviews;
pub mod tenders;
