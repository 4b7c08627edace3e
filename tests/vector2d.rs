//! Integration tests for the Vector2D wrapper.

use ndarray::{array, Array2};
use rand::Rng;

use vectorized2d::{AngleUnit, Array2dError, Array2dOps, Vector2D};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {} within {} of {}",
        actual,
        tol,
        expected
    );
}

fn random_degrees(n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen::<f64>() * 359.0 + 0.5).collect()
}

fn random_magnitudes(n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen::<f64>() * 19.0 + 1.0).collect()
}

// ---------------------------------------------------------------------------
// Polar construction
// ---------------------------------------------------------------------------

#[test]
fn polar_single_vector() {
    let direction = 1.1;
    let magnitude = 2.5;
    let v = Vector2D::polar(magnitude, direction, AngleUnit::Radians);
    assert_eq!(v.rows(), 1);
    assert_eq!(
        v.row(0),
        (magnitude * direction.cos(), magnitude * direction.sin())
    );
}

#[test]
fn polar_degrees_are_converted() {
    let v = Vector2D::polar(1.0, 90.0, AngleUnit::Degrees);
    assert_close(v.row(0).0, 0.0, 1e-12);
    assert_close(v.row(0).1, 1.0, 1e-12);
}

#[test]
fn from_polar_pairs_elementwise() {
    let magnitudes = [1.0, 2.0, 3.0];
    let directions = [0.3, 1.3, 2.3];
    let v = Vector2D::from_polar(&magnitudes, &directions, AngleUnit::Radians).unwrap();
    for i in 0..3 {
        assert_eq!(
            v.row(i),
            (
                magnitudes[i] * directions[i].cos(),
                magnitudes[i] * directions[i].sin()
            )
        );
    }
}

#[test]
fn from_polar_broadcasts_single_magnitude() {
    let v = Vector2D::from_polar(&[2.0], &[0.0, 90.0, 180.0], AngleUnit::Degrees).unwrap();
    assert_eq!(v.rows(), 3);
    assert_close(v.row(0).0, 2.0, 1e-12);
    assert_close(v.row(1).1, 2.0, 1e-12);
    assert_close(v.row(2).0, -2.0, 1e-12);
}

#[test]
fn from_polar_broadcasts_single_direction() {
    let v = Vector2D::from_polar(&[1.0, 2.0, 3.0], &[90.0], AngleUnit::Degrees).unwrap();
    assert_eq!(v.rows(), 3);
    for i in 0..3 {
        assert_close(v.row(i).1, (i + 1) as f64, 1e-12);
    }
}

#[test]
fn from_polar_rejects_unbroadcastable_lengths() {
    assert_eq!(
        Vector2D::from_polar(&[1.0, 2.0], &[0.1, 0.2, 0.3], AngleUnit::Radians).unwrap_err(),
        Array2dError::LengthMismatch { left: 2, right: 3 }
    );
}

#[test]
fn concat_of_single_vectors() {
    let parts: Vec<Vector2D> = (0..3)
        .map(|i| Vector2D::polar(i as f64 + 1.0, 0.4 * i as f64, AngleUnit::Radians))
        .collect();
    let refs: Vec<&Vector2D> = parts.iter().collect();
    let v = Vector2D::concat(&refs);
    assert_eq!(v.rows(), 3);
    for (i, part) in parts.iter().enumerate() {
        assert_eq!(v.row(i), part.row(0));
    }
}

// ---------------------------------------------------------------------------
// Direction, rotation, angles
// ---------------------------------------------------------------------------

#[test]
fn direction_roundtrips_through_polar() {
    let directions = random_degrees(5000);
    let magnitudes = random_magnitudes(5000);
    let v = Vector2D::from_polar(&magnitudes, &directions, AngleUnit::Degrees).unwrap();
    for (i, &d) in v.direction().iter().enumerate() {
        assert_close(d.to_degrees(), directions[i], 1e-9);
    }
}

#[test]
fn norm_recovers_the_magnitude() {
    let directions = random_degrees(1000);
    let magnitudes = random_magnitudes(1000);
    let v = Vector2D::from_polar(&magnitudes, &directions, AngleUnit::Degrees).unwrap();
    for (i, &n) in v.norm().iter().enumerate() {
        assert_close(n, magnitudes[i], 1e-9);
    }
}

#[test]
fn rotation_adds_to_the_direction() {
    let directions = random_degrees(2000);
    let magnitudes = random_magnitudes(2000);
    let rotations = random_degrees(2000);
    let v = Vector2D::from_polar(&magnitudes, &directions, AngleUnit::Degrees).unwrap();
    let rotated = v.rotated(&rotations, AngleUnit::Degrees).unwrap();
    for (i, &d) in rotated.direction().iter().enumerate() {
        let expected = (directions[i] + rotations[i]).rem_euclid(360.0);
        assert_close(d.to_degrees().rem_euclid(360.0), expected, 1e-8);
    }
}

#[test]
fn rotation_preserves_the_norm() {
    let v = Vector2D::from_polar(&[3.0, 4.0], &[0.25, 1.25], AngleUnit::Radians).unwrap();
    let rotated = v.rotated(&[1.0], AngleUnit::Radians).unwrap();
    for (before, after) in v.norm().iter().zip(rotated.norm().iter()) {
        assert_close(*after, *before, 1e-12);
    }
}

#[test]
fn angle_to_recovers_the_signed_rotation() {
    let mut rng = rand::thread_rng();
    let directions = random_degrees(2000);
    let magnitudes = random_magnitudes(2000);
    let rotations: Vec<f64> = (0..2000).map(|_| rng.gen::<f64>() * 340.0 - 170.0).collect();
    let v = Vector2D::from_polar(&magnitudes, &directions, AngleUnit::Degrees).unwrap();
    let rotated = v.rotated(&rotations, AngleUnit::Degrees).unwrap();

    let forward = v.angle_to(&rotated).unwrap();
    let backward = rotated.angle_to(&v).unwrap();
    for i in 0..2000 {
        assert_close(forward[i].to_degrees(), rotations[i], 1e-8);
        assert_close(backward[i].to_degrees(), -rotations[i], 1e-8);
    }
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

#[test]
fn projection_matches_the_textbook_formula() {
    let mut rng = rand::thread_rng();
    let a = Array2::from_shape_fn((5000, 2), |_| rng.gen::<f64>());
    let b = Array2::from_shape_fn((1, 2), |_| rng.gen::<f64>());
    let v = Vector2D::from_array(a.clone()).unwrap();
    let onto = Vector2D::from_array(b.clone()).unwrap();

    let projected = v.project_onto(&onto).unwrap();
    let b_dot_b = b[[0, 0]] * b[[0, 0]] + b[[0, 1]] * b[[0, 1]];
    for i in 0..5000 {
        let a_dot_b = a[[i, 0]] * b[[0, 0]] + a[[i, 1]] * b[[0, 1]];
        let (px, py) = projected.row(i);
        assert_close(px, b[[0, 0]] * a_dot_b / b_dot_b, 1e-10);
        assert_close(py, b[[0, 1]] * a_dot_b / b_dot_b, 1e-10);
    }
}

#[test]
fn projection_onto_zero_vector_is_zero() {
    let v = Vector2D::from_array(array![[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let zero = Vector2D::from_array(array![[0.0, 0.0]]).unwrap();
    let projected = v.project_onto(&zero).unwrap();
    assert_eq!(projected.row(0), (0.0, 0.0));
    assert_eq!(projected.row(1), (0.0, 0.0));
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn addition_and_subtraction_are_elementwise() {
    let a = Vector2D::from_array(array![[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let b = Vector2D::from_array(array![[0.5, 0.5], [1.0, 1.0]]).unwrap();
    let sum = &a + &b;
    let diff = &sum - &b;
    assert_eq!(sum.row(0), (1.5, 2.5));
    assert_eq!(diff, a);
}

#[test]
fn scalar_scaling() {
    let v = Vector2D::from_array(array![[3.0, 4.0]]).unwrap();
    assert_eq!((&v * 2.0).row(0), (6.0, 8.0));
    assert_eq!((&v / 2.0).row(0), (1.5, 2.0));
    assert_eq!((-&v).row(0), (-3.0, -4.0));
}
