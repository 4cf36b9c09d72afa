use ark_bls12_381::{Fr, G1Projective};
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};

extern crate alloc;
use alloc::vec::Vec;

use crate::errors::KzgError;

/// The `N`-th roots of unity over the scalar field, where `N` is the number of
/// field elements in a blob.
///
/// The roots are stored in bit-reversed order: the `i`-th evaluation of a blob
/// polynomial is its value at `roots()[i]`. A domain is built once at setup
/// time and then only shared by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    roots: Vec<Fr>,
    domain_size_inv: Fr,
    generator: Fr,
    generator_inv: Fr,
    radix2: Radix2EvaluationDomain<Fr>,
}

/// Where an evaluation point sits relative to the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
    /// The point equals `roots()[index]`.
    InDomain(usize),
    OutsideDomain,
}

impl Domain {
    pub fn new(size: usize) -> Result<Self, KzgError> {
        if !size.is_power_of_two() {
            return Err(KzgError::InvalidDomainSize(size));
        }
        let radix2 =
            Radix2EvaluationDomain::<Fr>::new(size).ok_or(KzgError::InvalidDomainSize(size))?;

        let mut roots: Vec<Fr> = radix2.elements().collect();
        reverse_bit_order(&mut roots);

        Ok(Self {
            roots,
            domain_size_inv: radix2.size_inv,
            generator: radix2.group_gen,
            generator_inv: radix2.group_gen_inv,
            radix2,
        })
    }

    pub fn size(&self) -> usize {
        self.roots.len()
    }

    /// The roots of unity, in bit-reversed order.
    pub fn roots(&self) -> &[Fr] {
        &self.roots
    }

    pub fn root(&self, index: usize) -> Option<&Fr> {
        self.roots.get(index)
    }

    pub fn domain_size_inv(&self) -> Fr {
        self.domain_size_inv
    }

    pub fn generator(&self) -> Fr {
        self.generator
    }

    pub fn generator_inv(&self) -> Fr {
        self.generator_inv
    }

    /// Finds whether `z` is one of the roots of unity. A linear scan is enough
    /// since every caller is about to do O(N) work anyway.
    pub fn locate(&self, z: &Fr) -> PointLocation {
        match self.roots.iter().position(|root| root == z) {
            Some(index) => PointLocation::InDomain(index),
            None => PointLocation::OutsideDomain,
        }
    }

    /// Inverse FFT over G1.
    ///
    /// Given the monomial points `[tau^i]G` for `i < N`, this returns the
    /// Lagrange points `[L_i(tau)]G` ordered like [Domain::roots], which is
    /// the basis commitments to evaluation-form polynomials are taken in.
    pub fn ifft_g1(&self, monomial: &[G1Projective]) -> Result<Vec<G1Projective>, KzgError> {
        if monomial.len() != self.size() {
            return Err(KzgError::CommitKeyTooShort {
                required: self.size(),
                actual: monomial.len(),
            });
        }
        let mut lagrange = self.radix2.ifft(monomial);
        reverse_bit_order(&mut lagrange);
        Ok(lagrange)
    }
}

/// Permutes `values` so that the element at index `i` moves to the index whose
/// binary representation is `i` reversed over `log2(len)` bits.
///
/// Panics if the length is not a power of two.
pub fn reverse_bit_order<T>(values: &mut [T]) {
    let n = values.len();
    if n <= 1 {
        return;
    }
    assert!(
        n.is_power_of_two(),
        "bit reversal needs a power of two length, got {}",
        n
    );

    let log_n = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - log_n);
        if i < j {
            values.swap(i, j);
        }
    }
}
