//! `decimal754` is a pure Rust, no-std implementation of IEEE
//! 754-2008 decimal floating point numbers.
//!
//! # Features
//!
//! - decimal32, decimal64, and decimal128 in the binary integer
//! decimal (BID) encoding: [`Bid32`], [`Bid64`], and [`Bid128`].
//! - Lossless conversion to and from the densely packed decimal
//! (DPD) encoding: [`Dpd32`], [`Dpd64`], and [`Dpd128`].
//! - Correctly rounded addition, subtraction, multiplication,
//! division, and remainder in all five IEEE 754 rounding
//! modes.
//! - `const` arithmetic that rounds with [`ROUNDING_CONST`].
//! - Per-operation [`Condition`]s through [`Ctx`].
//!
//! ```
//! use decimal754::prelude::*;
//!
//! let x = d64::parse_lit("0.1") + d64::parse_lit("0.2");
//! assert_eq!(x.to_string(), "0.3");
//! ```
//!
//! # Rounding
//!
//! Operators and other non-`const` operations round with the
//! process-wide mode returned by [`rounding_mode`]. `const`
//! operations round with [`ROUNDING_CONST`], which is fixed at
//! build time. A [`Ctx`] carries its own mode.
//!
//! # Cargo Features
//!
//! - `std`: Include [`std`] support. This implements
//! [`std::error::Error`] for [`ParseError`].
//!
//! - `rand`: Enable [`rand`] support.
//!
//! - `serde`: Enable [`serde`] support. Numbers are serialized
//! as strings.
//!
//! - `log`: Emit [`log`] records when the rounding mode changes.
//!
//! - `nan-on-parse-error`: `parse_lit` returns NaN instead of
//! panicking.
//!
//! - `round-const-ties-away`, `round-const-toward-zero`,
//! `round-const-downward`, `round-const-upward`: Select
//! [`ROUNDING_CONST`]. At most one may be enabled.
//!
//! - `slow-tests`: Enable exhaustive tests.
//!
//! [`log`]: https://crates.io/crates/log
//! [`rand`]: https://crates.io/crates/rand
//! [`serde`]: https://crates.io/crates/serde
//! [`std`]: https://doc.rust-lang.org/std/

#![allow(clippy::unusual_byte_groupings)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), deny(clippy::std_instead_of_core))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_precision_loss)]
#![deny(clippy::cast_sign_loss)]
#![deny(clippy::expect_used)]
#![deny(clippy::implicit_saturating_sub)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::ptr_as_ptr)]
#![deny(clippy::string_slice)]
#![deny(clippy::transmute_ptr_to_ptr)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]

pub mod bid;
mod conv;
mod ctx;
mod dectest;
pub mod dpd;
mod macros;
mod util;

#[doc(inline)]
pub use bid::{Bid128, Bid32, Bid64};
#[doc(inline)]
#[allow(non_camel_case_types)]
pub use bid::Bid128 as d128;
#[doc(inline)]
#[allow(non_camel_case_types)]
pub use bid::Bid32 as d32;
#[doc(inline)]
#[allow(non_camel_case_types)]
pub use bid::Bid64 as d64;
pub use conv::{Buffer, Decimal, Fmt, ParseError};
pub use ctx::{rounding_mode, set_rounding_mode, Condition, Ctx, RoundingMode, ROUNDING_CONST};
#[doc(inline)]
pub use dpd::{Dpd128, Dpd32, Dpd64};

/// Simplifies importing common items.
pub mod prelude {
    pub use super::{d128, d32, d64, Ctx, Decimal, RoundingMode};
}
