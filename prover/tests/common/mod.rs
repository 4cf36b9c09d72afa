#![allow(dead_code)]

use ark_bls12_381::{Bls12_381, Fr, G1Affine, G2Affine};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::UniformRand;
use ark_std::Zero;
use blob_kzg_primitives::serialization::serialize_scalar;
use blob_kzg_prover::{context::Context, setup};
use lazy_static::lazy_static;
use rand::Rng;

pub const SECRET: u64 = 1337;

lazy_static! {
    pub static ref CONTEXT_16: Context = setup::insecure_setup(16, &secret()).unwrap();
    pub static ref G2_TAU: G2Affine = setup::insecure_g2_tau(&secret());
}

pub fn secret() -> Fr {
    Fr::from(SECRET)
}

pub fn random_blob<R: Rng>(field_elements: usize, rng: &mut R) -> Vec<u8> {
    (0..field_elements)
        .flat_map(|_| serialize_scalar(&Fr::rand(rng)))
        .collect()
}

pub fn pairings_verify(a1: G1Affine, a2: G2Affine, b1: G1Affine, b2: G2Affine) -> bool {
    let neg_b1 = -b1;
    let p = [a1, neg_b1];
    let q = [a2, b2];
    let result = Bls12_381::multi_pairing(p, q);
    result.is_zero()
}

/// Checks e([C - y]G1, G2) == e(proof, [tau - z]G2).
pub fn verify_proof(commitment: G1Affine, proof: G1Affine, y: Fr, z: Fr) -> bool {
    let value_g1 = (G1Affine::generator() * y).into_affine();
    let commit_minus_value = (commitment - value_g1).into_affine();
    let z_g2 = (G2Affine::generator() * z).into_affine();
    let x_minus_z = (*G2_TAU - z_g2).into_affine();

    pairings_verify(commit_minus_value, G2Affine::generator(), proof, x_minus_z)
}
