//! Prover side of the blob KZG scheme over BLS12-381.
//!
//! A [context::Context] bundles the Lagrange commitment key and the evaluation
//! domain. It is built once and exposes the four prover entry points:
//!
//! - [context::Context::blob_to_commitment]
//! - [context::Context::blobs_to_commitments]
//! - [context::Context::compute_kzg_proof]
//! - [context::Context::compute_blob_kzg_proof]
//!
//! All of them take untrusted bytes, validate them at the deserialization
//! boundary and return canonical bytes.
//!
//! ## Example
//!
//! ```rust
//! use ark_bls12_381::Fr;
//! use blob_kzg_prover::setup::insecure_setup;
//!
//! // Never use a known secret outside of tests.
//! let context = insecure_setup(16, &Fr::from(1337u64)).unwrap();
//!
//! let blob = vec![0u8; context.bytes_per_blob()];
//! let commitment = context.blob_to_commitment(&blob).unwrap();
//! let (proof, claimed_value) = context.compute_blob_kzg_proof(&blob, &commitment).unwrap();
//! assert_eq!(claimed_value, [0u8; 32]);
//! # let _ = proof;
//! ```

pub mod commit_key;
pub mod context;
pub mod kzg;
pub mod setup;
