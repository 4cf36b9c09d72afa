//! Building blocks for committing to blobs with KZG over BLS12-381.
//!
//! The data pipeline goes:
//! > blob bytes -> [polynomial::PolynomialEvalForm] -> commitment / proof
//!
//! - Blob: `N * 32` bytes, each 32 byte chunk a canonical big-endian scalar.
//! - Polynomial: the `N` scalars, read as the evaluations of a polynomial on
//!   the `N`-th roots of unity ([domain::Domain], bit-reversed order).
//! - Commitment / proof: 48 byte compressed G1 points.
//!
//! This crate holds everything that does not need the commitment key: the
//! canonical codecs in [serialization], the evaluation domain, evaluation-form
//! polynomial arithmetic (barycentric evaluation and division by `X - z`) and
//! the Fiat-Shamir challenge in [helpers]. Commitments and proofs are computed
//! by the prover crate.
#![cfg_attr(not(test), no_std)]

pub mod consts;
pub mod domain;
pub mod errors;
pub mod helpers;
pub mod polynomial;
pub mod serialization;
pub mod traits;
pub mod types;
