use ark_bls12_381::Fr;
use ark_ff::{batch_inversion, Field};
use ark_std::{One, Zero};

extern crate alloc;
use alloc::vec::Vec;

use crate::{
    domain::{Domain, PointLocation},
    errors::KzgError,
};

/// A polynomial of degree `< N` represented by its values on the evaluation
/// domain: `evaluations()[i]` is the value at `domain.roots()[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialEvalForm {
    evaluations: Vec<Fr>,
}

impl PolynomialEvalForm {
    /// Creates a new [PolynomialEvalForm] from the given evaluations. This
    /// typically wouldn't be used directly, but instead a blob would be
    /// deserialized with [crate::serialization::deserialize_blob].
    pub fn new(evaluations: Vec<Fr>) -> Self {
        Self { evaluations }
    }

    pub fn evaluations(&self) -> &[Fr] {
        &self.evaluations
    }

    pub fn len(&self) -> usize {
        self.evaluations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }

    pub fn get_evaluation(&self, i: usize) -> Option<&Fr> {
        self.evaluations.get(i)
    }

    /// Evaluates the polynomial at an arbitrary point `z` with the barycentric
    /// formula for roots of unity:
    ///
    /// `p(z) = (z^N - 1) / N * sum_i p_i * w_i / (z - w_i)`
    ///
    /// If `z` is itself a root of unity, the stored evaluation is returned.
    pub fn evaluate(&self, domain: &Domain, z: &Fr) -> Result<Fr, KzgError> {
        self.check_domain(domain)?;

        if let PointLocation::InDomain(index) = domain.locate(z) {
            return Ok(self.evaluations[index]);
        }

        let mut inverses: Vec<Fr> = domain.roots().iter().map(|root| *z - root).collect();
        batch_inversion(&mut inverses);

        let sum = self
            .evaluations
            .iter()
            .zip(domain.roots())
            .zip(&inverses)
            .fold(Fr::zero(), |acc, ((f_i, root), inv)| acc + *f_i * root * inv);

        let r = z.pow([domain.size() as u64]) - Fr::one();
        Ok(sum * r * domain.domain_size_inv())
    }

    /// Computes `q(X) = (p(X) - p(z)) / (X - z)` in evaluation form, where
    /// `z_eval` must be `p(z)`.
    ///
    /// Outside the domain every entry is `(p_i - p(z)) / (w_i - z)`. When
    /// `z = w_m`, entry `m` of that formula is `0 / 0` and is replaced by
    /// `q(w_m) = sum_{i != m} (p_i - p(z)) * w_i / (z * (z - w_i))`.
    pub fn divide(
        &self,
        domain: &Domain,
        z: &Fr,
        z_eval: &Fr,
    ) -> Result<PolynomialEvalForm, KzgError> {
        self.check_domain(domain)?;

        let location = domain.locate(z);

        let mut inverses: Vec<Fr> = domain.roots().iter().map(|root| *root - z).collect();
        // The zero denominator becomes `z`, so the batch inversion also
        // yields `1 / z` for the in-domain formula.
        if let PointLocation::InDomain(m) = location {
            inverses[m] = *z;
        }
        batch_inversion(&mut inverses);

        let mut quotient: Vec<Fr> = self
            .evaluations
            .iter()
            .zip(&inverses)
            .map(|(f_i, inv)| (*f_i - z_eval) * inv)
            .collect();

        if let PointLocation::InDomain(m) = location {
            quotient[m] = self.quotient_eval_within_domain(domain, m, z_eval, &inverses);
        }

        Ok(PolynomialEvalForm::new(quotient))
    }

    // `inverses[i]` holds `1 / (w_i - z)` for `i != m` and `1 / z` at `m`.
    fn quotient_eval_within_domain(
        &self,
        domain: &Domain,
        m: usize,
        z_eval: &Fr,
        inverses: &[Fr],
    ) -> Fr {
        let z_inv = inverses[m];
        let sum = self
            .evaluations
            .iter()
            .zip(domain.roots())
            .zip(inverses)
            .enumerate()
            .filter(|(i, _)| *i != m)
            .fold(Fr::zero(), |acc, (_, ((f_i, root), inv))| {
                acc + (*f_i - z_eval) * root * inv
            });
        // 1 / (z - w_i) = -1 / (w_i - z)
        -(sum * z_inv)
    }

    fn check_domain(&self, domain: &Domain) -> Result<(), KzgError> {
        if self.len() != domain.size() {
            return Err(KzgError::PolynomialLengthMismatch {
                domain_size: domain.size(),
                polynomial_len: self.len(),
            });
        }
        Ok(())
    }
}
