//! Integration test: the shared vector protocol across both vector types.
//!
//! Seeded random vectors go through bytes, repr text and hashing, and
//! must come back unchanged.

use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vectorkit::core::format::repr_f64;
use vectorkit::{CodecConfig, Components, Encoding, Vector, Vector2d, VectorError};

fn random_component(rng: &mut ChaCha8Rng) -> f64 {
    match rng.gen_range(0..4) {
        0 => rng.gen_range(-1.0..1.0),
        1 => rng.gen_range(-1e6..1e6),
        2 => rng.gen_range(-1e-300..1e-300),
        _ => f64::from(rng.gen_range(-1000i32..1000)),
    }
}

#[test]
fn random_vectors_survive_bytes_and_repr() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..500 {
        let v = Vector2d::new(random_component(&mut rng), random_component(&mut rng))
            .expect("finite components");
        assert_eq!(Vector2d::from_bytes(&v.to_bytes()).unwrap(), v);
        assert_eq!(v.repr().parse::<Vector2d>().unwrap(), v);

        let len = rng.gen_range(0..12);
        let components: Vec<f64> = (0..len).map(|_| random_component(&mut rng)).collect();
        let n = Vector::new(components.clone()).expect("finite components");
        assert_eq!(Vector::from_bytes(&n.to_bytes()).unwrap(), n);
        assert_eq!(n.repr().parse::<Vector>().unwrap(), n);
        assert_eq!(n, components);
    }
}

#[test]
fn equal_vectors_hash_equal_across_types() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for _ in 0..200 {
        let x = random_component(&mut rng);
        let y = random_component(&mut rng);
        let flat = Vector2d::new(x, y).unwrap();
        let wide = Vector::new([x, y]).unwrap();

        assert_eq!(flat, wide);
        assert_eq!(wide, flat);
        assert_eq!(flat.hash_value(), wide.hash_value());
    }

    assert_eq!(Vector2d::new(3, 4).unwrap().hash_value(), 7);
    assert_eq!(Vector2d::new(3, 4).unwrap(), Vector2d::new(3.0, 4.0).unwrap());
}

#[test]
fn vectors_work_as_map_keys() {
    let mut seen: HashMap<Vector, &str> = HashMap::new();
    seen.insert(Vector::new([1, 2, 3]).unwrap(), "first");
    seen.insert(Vector::new([1.0, 2.0, 3.0]).unwrap(), "second");

    assert_eq!(seen.len(), 1);
    assert_eq!(seen[&Vector::new([1, 2, 3]).unwrap()], "second");
}

#[test]
fn angles_cover_all_quadrants() {
    let cases = [
        ((1.0, 0.0), 0.0),
        ((0.0, 1.0), FRAC_PI_2),
        ((1.0, 1.0), FRAC_PI_4),
        ((-1.0, 0.0), PI),
        ((0.0, -1.0), -FRAC_PI_2),
    ];
    for ((x, y), expected) in cases {
        let angle = Vector2d::new(x, y).unwrap().angle();
        assert!((angle - expected).abs() < 1e-12, "angle of ({x}, {y}) = {angle}");
    }
    assert_eq!(Vector2d::ZERO.angle(), 0.0);
}

#[test]
fn polar_format_strings() {
    let one_one = Vector2d::new(1, 1).unwrap();
    assert_eq!(one_one.format("p").unwrap(), "<1.4142135623730951, 0.7853981633974483>");
    assert_eq!(one_one.format(".3ep").unwrap(), "<1.414e+00, 7.854e-01>");
    assert_eq!(one_one.format(".5fp").unwrap(), "<1.41421, 0.78540>");

    let up = Vector2d::new(0, 1).unwrap();
    assert_eq!(up.format(".3ep").unwrap(), "<1.000e+00, 1.571e+00>");

    let err = Vector::new([1, 1]).unwrap().format("p").unwrap_err();
    assert!(matches!(err, VectorError::UndefinedOperation(_)));
}

#[test]
fn component_formats() {
    let v = Vector2d::new(3, 4).unwrap();
    assert_eq!(v.format("").unwrap(), "(3.0, 4.0)");
    assert_eq!(v.format(".2f").unwrap(), "(3.00, 4.00)");
    assert_eq!(v.format(".3e").unwrap(), "(3.000e+00, 4.000e+00)");

    let n = Vector::new([1.5, -2.0, 0.125]).unwrap();
    assert_eq!(n.format(".1f").unwrap(), "(1.5, -2.0, 0.1)");
    assert!(matches!(
        n.format(".2q"),
        Err(VectorError::InvalidFormatSpec { .. })
    ));
}

#[test]
fn truncated_and_mistagged_buffers() {
    let bytes = Vector2d::new(3, 4).unwrap().to_bytes();
    assert_eq!(bytes.len(), 17);

    for cut in [1, 8, 16] {
        assert!(matches!(
            Vector2d::from_bytes(&bytes[..cut]),
            Err(VectorError::MalformedBuffer { .. })
        ));
    }
    assert!(matches!(
        Vector::from_bytes(&bytes[..16]),
        Err(VectorError::MalformedBuffer { .. })
    ));
    assert!(matches!(
        Vector::from_bytes(&[]),
        Err(VectorError::MalformedBuffer { .. })
    ));

    let mut wrong = bytes.clone();
    wrong[0] = b'x';
    assert_eq!(
        Vector2d::from_bytes(&wrong).unwrap_err(),
        VectorError::UnsupportedEncoding(b'x')
    );

    // a three-component buffer is well formed but the wrong arity
    let three = Vector::new([1, 2, 3]).unwrap().to_bytes();
    assert!(Vector2d::from_bytes(&three).is_err());
    assert_eq!(Vector::from_bytes(&three).unwrap().len(), 3);
}

#[test]
fn float_encoding_needs_lenient_decode() {
    let v = Vector2d::new(0.5, -2.25).unwrap();
    let bytes = v.to_bytes_with(&CodecConfig::new(Encoding::Float)).unwrap();
    assert_eq!(bytes.len(), 9);
    assert_eq!(bytes[0], b'f');

    assert_eq!(
        Vector2d::from_bytes(&bytes).unwrap_err(),
        VectorError::UnsupportedEncoding(b'f')
    );
    assert_eq!(Vector2d::from_bytes_with(&bytes, &CodecConfig::lenient()).unwrap(), v);
}

#[test]
fn float_encoding_refuses_components_it_cannot_hold() {
    let config = CodecConfig::new(Encoding::Float);
    let huge = Vector2d::new(1e300, 1.0).unwrap();
    assert_eq!(
        huge.to_bytes_with(&config).unwrap_err(),
        VectorError::InvalidComponent {
            index: 0,
            value: f64::INFINITY
        }
    );

    // whatever the float encoding accepts, a lenient decoder reads back
    let fits = Vector::new([f64::from(f32::MAX), -1.5, 0.0]).unwrap();
    let bytes = fits.to_bytes_with(&config).unwrap();
    assert_eq!(Vector::from_bytes_with(&bytes, &CodecConfig::lenient()).unwrap(), fits);

    // doubles hold anything finite
    assert_eq!(huge.to_bytes_with(&CodecConfig::default()).unwrap(), huge.to_bytes());
}

#[test]
fn non_finite_components_are_rejected() {
    assert_eq!(
        Vector2d::new(1.0, f64::INFINITY).unwrap_err(),
        VectorError::InvalidComponent {
            index: 1,
            value: f64::INFINITY
        }
    );
    assert!(Vector::new([0.0, 1.0, f64::NEG_INFINITY]).is_err());

    let poisoned = Vector2d::raw(f64::NAN, 0.0).to_bytes();
    assert!(matches!(
        Vector2d::from_bytes(&poisoned),
        Err(VectorError::InvalidComponent { index: 0, .. })
    ));
}

#[test]
fn str_and_repr_text() {
    let v = Vector2d::new(3, 4).unwrap();
    assert_eq!(format!("{:?}", v), "Vector2d(3.0, 4.0)");
    assert_eq!(v.to_string(), "(3.0, 4.0)");

    let n = Vector::new([1e20, 0.1]).unwrap();
    assert_eq!(n.repr(), format!("Vector({}, {})", repr_f64(1e20), repr_f64(0.1)));
    assert_eq!(n.repr(), "Vector(1e+20, 0.1)");

    assert!(!Vector2d::ZERO.is_truthy());
    assert!(!Vector::new(Vec::<f64>::new()).unwrap().is_truthy());
    assert!(Vector::new([0, 0, 1]).unwrap().is_truthy());
}
