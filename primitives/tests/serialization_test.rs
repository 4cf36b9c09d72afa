#[cfg(test)]
mod tests {
    use ark_bls12_381::{Fq, Fr, G1Affine};
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::{BigInteger, PrimeField, UniformRand};
    use blob_kzg_primitives::{
        consts::{
            BYTES_PER_BLOB, BYTES_PER_FIELD_ELEMENT, FIELD_ELEMENTS_PER_BLOB,
            SIZE_OF_G1_AFFINE_COMPRESSED,
        },
        errors::KzgError,
        serialization::{
            deserialize_blob, deserialize_blobs, deserialize_g1_point, deserialize_scalar,
            serialize_g1_point, serialize_g1_points, serialize_polynomial, serialize_scalar,
        },
    };
    use hex_literal::hex;

    const SCALAR_MODULUS_BE: [u8; 32] =
        hex!("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001");
    const G1_GENERATOR_COMPRESSED: [u8; 48] = hex!(
        "97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"
    );

    fn random_blob(field_elements: usize) -> Vec<u8> {
        let mut rng = ark_std::test_rng();
        (0..field_elements)
            .flat_map(|_| serialize_scalar(&Fr::rand(&mut rng)))
            .collect()
    }

    /// Finds an x coordinate on the curve whose point is outside the G1 subgroup.
    fn point_outside_subgroup() -> G1Affine {
        (0u64..1000)
            .filter_map(|x| G1Affine::get_point_from_x_unchecked(Fq::from(x), true))
            .find(|point| !point.is_in_correct_subgroup_assuming_on_curve())
            .expect("small x coordinates hit the cofactor group")
    }

    #[test]
    fn test_modulus_constant() {
        let modulus = Fr::MODULUS.to_bytes_be();
        assert_eq!(modulus.as_slice(), &SCALAR_MODULUS_BE);
    }

    #[test]
    fn test_blob_round_trip() {
        let blob = random_blob(FIELD_ELEMENTS_PER_BLOB);
        assert_eq!(blob.len(), BYTES_PER_BLOB);

        let polynomial = deserialize_blob(&blob, FIELD_ELEMENTS_PER_BLOB).unwrap();
        assert_eq!(polynomial.len(), FIELD_ELEMENTS_PER_BLOB);
        assert_eq!(serialize_polynomial(&polynomial), blob);
    }

    #[test]
    fn test_blob_wrong_length() {
        let blob = random_blob(FIELD_ELEMENTS_PER_BLOB);
        assert_eq!(
            deserialize_blob(&blob[..BYTES_PER_BLOB - 1], FIELD_ELEMENTS_PER_BLOB),
            Err(KzgError::InvalidBlobLength {
                expected: BYTES_PER_BLOB,
                actual: BYTES_PER_BLOB - 1
            })
        );

        let mut longer = blob.clone();
        longer.push(0);
        assert!(matches!(
            deserialize_blob(&longer, FIELD_ELEMENTS_PER_BLOB),
            Err(KzgError::InvalidBlobLength { .. })
        ));
        assert!(matches!(
            deserialize_blob(&[], FIELD_ELEMENTS_PER_BLOB),
            Err(KzgError::InvalidBlobLength { .. })
        ));
    }

    #[test]
    fn test_blob_with_modulus_chunk() {
        let mut blob = random_blob(16);
        blob[5 * BYTES_PER_FIELD_ELEMENT..6 * BYTES_PER_FIELD_ELEMENT]
            .copy_from_slice(&SCALAR_MODULUS_BE);
        assert_eq!(
            deserialize_blob(&blob, 16),
            Err(KzgError::InvalidFieldElement(
                "field element at position 5 is not canonical".to_string()
            ))
        );

        // modulus - 1 is the largest canonical element
        let mut largest = SCALAR_MODULUS_BE;
        largest[31] -= 1;
        blob[5 * BYTES_PER_FIELD_ELEMENT..6 * BYTES_PER_FIELD_ELEMENT].copy_from_slice(&largest);
        let polynomial = deserialize_blob(&blob, 16).unwrap();
        assert_eq!(polynomial.evaluations()[5], -Fr::from(1u64));
    }

    #[test]
    fn test_blob_batch_fails_atomically() {
        let good = random_blob(8);
        let mut bad = random_blob(8);
        bad[..BYTES_PER_FIELD_ELEMENT].copy_from_slice(&[0xff; BYTES_PER_FIELD_ELEMENT]);

        assert_eq!(deserialize_blobs(&[good.clone(), good.clone()], 8).unwrap().len(), 2);
        assert!(matches!(
            deserialize_blobs(&[good, bad], 8),
            Err(KzgError::InvalidFieldElement(_))
        ));
    }

    #[test]
    fn test_scalar_decoding() {
        let mut rng = ark_std::test_rng();
        let scalar = Fr::rand(&mut rng);
        assert_eq!(deserialize_scalar(&serialize_scalar(&scalar)).unwrap(), scalar);

        assert!(matches!(
            deserialize_scalar(&SCALAR_MODULUS_BE),
            Err(KzgError::InvalidFieldElement(_))
        ));
        assert!(matches!(
            deserialize_scalar(&[0xff; 32]),
            Err(KzgError::InvalidFieldElement(_))
        ));
        assert!(matches!(
            deserialize_scalar(&[0u8; 31]),
            Err(KzgError::InvalidFieldElement(_))
        ));
        assert!(matches!(
            deserialize_scalar(&[0u8; 33]),
            Err(KzgError::InvalidFieldElement(_))
        ));
    }

    #[test]
    fn test_g1_generator_encoding() {
        assert_eq!(serialize_g1_point(&G1Affine::generator()), G1_GENERATOR_COMPRESSED);
        assert_eq!(
            deserialize_g1_point(&G1_GENERATOR_COMPRESSED).unwrap(),
            G1Affine::generator()
        );
    }

    #[test]
    fn test_g1_round_trip() {
        let mut rng = ark_std::test_rng();
        let points: Vec<G1Affine> = (0..32)
            .map(|_| (G1Affine::generator() * Fr::rand(&mut rng)).into_affine())
            .collect();

        let encoded = serialize_g1_points(&points);
        for (point, bytes) in points.iter().zip(&encoded) {
            assert_eq!(&deserialize_g1_point(bytes).unwrap(), point);
            // the negation only differs in the sort flag
            let negated = serialize_g1_point(&-*point);
            assert_eq!(negated[0] ^ bytes[0], 0x20);
            assert_eq!(negated[1..], bytes[1..]);
        }

        let infinity = serialize_g1_point(&G1Affine::zero());
        let mut expected = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
        expected[0] = 0xc0;
        assert_eq!(infinity, expected);
        assert_eq!(deserialize_g1_point(&infinity).unwrap(), G1Affine::zero());
    }

    #[test]
    fn test_g1_malformed_encodings() {
        // wrong length
        assert!(matches!(
            deserialize_g1_point(&G1_GENERATOR_COMPRESSED[..47]),
            Err(KzgError::InvalidEncoding(_))
        ));

        // compression flag cleared
        let mut uncompressed_flag = G1_GENERATOR_COMPRESSED;
        uncompressed_flag[0] &= 0x7f;
        assert!(matches!(
            deserialize_g1_point(&uncompressed_flag),
            Err(KzgError::InvalidEncoding(_))
        ));

        // infinity with trailing garbage
        let mut bad_infinity = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
        bad_infinity[0] = 0xc0;
        bad_infinity[47] = 1;
        assert!(matches!(
            deserialize_g1_point(&bad_infinity),
            Err(KzgError::InvalidEncoding(_))
        ));

        // x larger than the base field modulus
        let mut x_too_large = [0xffu8; SIZE_OF_G1_AFFINE_COMPRESSED];
        x_too_large[0] = 0x9f;
        assert!(matches!(
            deserialize_g1_point(&x_too_large),
            Err(KzgError::InvalidEncoding(_))
        ));

        // x with no matching y
        let x = (0u64..1000)
            .find(|x| G1Affine::get_point_from_x_unchecked(Fq::from(*x), true).is_none())
            .unwrap();
        let mut not_on_curve = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
        not_on_curve[SIZE_OF_G1_AFFINE_COMPRESSED - 8..].copy_from_slice(&x.to_be_bytes());
        not_on_curve[0] |= 0x80;
        assert!(matches!(
            deserialize_g1_point(&not_on_curve),
            Err(KzgError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_g1_not_in_subgroup() {
        let point = point_outside_subgroup();
        assert!(point.is_on_curve());

        let encoded = serialize_g1_point(&point);
        assert_eq!(deserialize_g1_point(&encoded), Err(KzgError::NotInSubgroup));
        assert_eq!(
            deserialize_g1_point(&serialize_g1_point(&-point)),
            Err(KzgError::NotInSubgroup)
        );
    }
}
