//! Randomized checks of the algebraic properties of quaternions and rotation matrices.

use qmath::{assert_approx_eq, slerp, vec3, Mat4f, Quatf, Vec3f};

const ITERATIONS: usize = 500;

fn unit_axis(rng: &mut fastrand::Rng) -> Vec3f {
    loop {
        let v = vec3(rng.f32() * 2.0 - 1.0, rng.f32() * 2.0 - 1.0, rng.f32() * 2.0 - 1.0);
        if v.length2() > 0.01 {
            return v.normalized();
        }
    }
}

fn rotation(rng: &mut fastrand::Rng) -> Quatf {
    let degrees = rng.f32() * 720.0 - 360.0;
    Quatf::from_axis_angle(degrees, unit_axis(rng))
}

#[test]
fn axis_angle_is_unit() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0001);
    for _ in 0..ITERATIONS {
        let q = rotation(&mut rng);
        assert_approx_eq!(q.length2(), 1.0, "{q:?}").abs(1e-5);
        assert_approx_eq!(q.dot(q), 1.0, "{q:?}").abs(1e-5);
    }
}

#[test]
fn normalize_is_idempotent() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0002);
    for _ in 0..ITERATIONS {
        let q = Quatf::from_components(
            rng.f32() * 10.0 - 5.0,
            rng.f32() * 10.0 - 5.0,
            rng.f32() * 10.0 - 5.0,
            rng.f32() * 10.0 + 0.1,
        );
        let once = q.normalized();
        assert_approx_eq!(once.length(), 1.0, "{q:?}").abs(1e-5);
        assert_approx_eq!(once.normalized(), once, "{q:?}").abs(1e-6);
    }
}

#[test]
fn product_is_associative() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0003);
    for _ in 0..ITERATIONS {
        let (a, b, c) = (rotation(&mut rng), rotation(&mut rng), rotation(&mut rng));
        assert_approx_eq!((a * b) * c, a * (b * c), "{a:?} {b:?} {c:?}").abs(1e-5);
    }
}

#[test]
fn product_matches_matrix_product() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0004);
    for _ in 0..ITERATIONS {
        let (a, b) = (rotation(&mut rng), rotation(&mut rng));
        assert_approx_eq!((a * b).to_matrix(), a.to_matrix() * b.to_matrix()).abs(1e-5);
    }
}

#[test]
fn rotation_matrix_is_orthonormal() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0005);
    for _ in 0..ITERATIONS {
        let m = rotation(&mut rng).to_matrix();
        assert_approx_eq!(m * m.transpose(), Mat4f::identity()).abs(1e-5);
    }
}

#[test]
fn rotation_preserves_length() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0006);
    for _ in 0..ITERATIONS {
        let q = rotation(&mut rng);
        let v = unit_axis(&mut rng) * (rng.f32() * 10.0);
        assert_approx_eq!(q.rotate(v).length(), v.length()).abs(1e-4);
    }
}

#[test]
fn slerp_hits_endpoints() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0007);
    for _ in 0..ITERATIONS {
        let (a, b) = (rotation(&mut rng), rotation(&mut rng));
        // `a` may be negated to take the shorter arc; either sign is the same rotation.
        let start = if a.dot(b) < 0.0 { -a } else { a };
        assert_approx_eq!(slerp(a, b, 0.0), start, "{a:?} {b:?}").abs(1e-4);
        assert_approx_eq!(slerp(a, b, 1.0), b, "{a:?} {b:?}").abs(1e-3);
    }
}

#[test]
fn slerp_stays_on_the_arc() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0008);
    for _ in 0..ITERATIONS {
        let (a, b) = (rotation(&mut rng), rotation(&mut rng));
        let t = rng.f32();
        let q = slerp(a, b, t);
        assert_approx_eq!(q.length(), 1.0, "{a:?} {b:?} {t}").abs(1e-4);
    }
}
