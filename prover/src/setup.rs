//! Setups built from a publicly known secret.
//!
//! Anyone who knows the secret can open a commitment to any value, so these
//! must never be used outside of tests and benchmarks. Real deployments load
//! the output of a trusted setup ceremony into a [CommitKey] instead.

use ark_bls12_381::{Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{batch_inversion, Field};
use ark_std::{One, Zero};
use blob_kzg_primitives::{
    domain::{Domain, PointLocation},
    errors::KzgError,
};
use rayon::prelude::*;

use crate::{commit_key::CommitKey, context::Context};

/// Builds a context over a domain of `field_elements_per_blob` points whose
/// commitment key is derived from `secret`.
pub fn insecure_setup(field_elements_per_blob: usize, secret: &Fr) -> Result<Context, KzgError> {
    let domain = Domain::new(field_elements_per_blob)?;
    let commit_key = insecure_commit_key(&domain, secret);
    Context::new(commit_key, domain)
}

/// `[L_i(secret)]G` for every root of the domain, in domain order.
pub fn insecure_commit_key(domain: &Domain, secret: &Fr) -> CommitKey {
    let scalars = lagrange_coefficients_at(domain, secret);
    let points: Vec<G1Projective> = scalars
        .par_iter()
        .map(|scalar| G1Affine::generator() * *scalar)
        .collect();
    CommitKey::new(G1Projective::normalize_batch(&points))
}

/// `[secret^i]G` for `i < count`.
pub fn insecure_monomial_g1(count: usize, secret: &Fr) -> Vec<G1Affine> {
    let mut powers = Vec::with_capacity(count);
    let mut current = Fr::one();
    for _ in 0..count {
        powers.push(current);
        current *= secret;
    }
    let points: Vec<G1Projective> = powers
        .par_iter()
        .map(|power| G1Affine::generator() * *power)
        .collect();
    G1Projective::normalize_batch(&points)
}

/// `[secret]H`, the G2 point a verifier pairs proofs against.
pub fn insecure_g2_tau(secret: &Fr) -> G2Affine {
    (G2Affine::generator() * *secret).into_affine()
}

// L_i(x) = (x^N - 1) / N * w_i / (x - w_i), or the indicator of `m` when x = w_m.
fn lagrange_coefficients_at(domain: &Domain, x: &Fr) -> Vec<Fr> {
    if let PointLocation::InDomain(m) = domain.locate(x) {
        let mut coefficients = vec![Fr::zero(); domain.size()];
        coefficients[m] = Fr::one();
        return coefficients;
    }

    let mut inverses: Vec<Fr> = domain.roots().iter().map(|root| *x - root).collect();
    batch_inversion(&mut inverses);

    let scale = (x.pow([domain.size() as u64]) - Fr::one()) * domain.domain_size_inv();
    domain
        .roots()
        .iter()
        .zip(&inverses)
        .map(|(root, inv)| scale * root * inv)
        .collect()
}
