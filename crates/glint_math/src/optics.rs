//! Mirror reflection and Snell's-law refraction.

use glam::Vec3;

/// Reflect `incident` about `normal`.
///
/// Both vectors are unit length by contract. The formula is sign-agnostic
/// with respect to the normal's orientation.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - normal * 2.0 * incident.dot(normal)
}

/// Refract `incident` through a surface with the given refractive index
/// (1.0 = vacuum/air).
///
/// Detects whether the ray is entering or exiting the medium from the sign
/// of `dot(incident, normal)` and swaps the index pair (and flips the
/// normal) when exiting. Returns `Vec3::ZERO` under total internal
/// reflection. The result is not normalized here; callers normalize
/// before building a ray from it.
pub fn refract(incident: Vec3, normal: Vec3, refractive_index: f32) -> Vec3 {
    let mut cosi = -incident.dot(normal).clamp(-1.0, 1.0);
    let mut etai = 1.0;
    let mut etat = refractive_index;
    let mut n = normal;
    if cosi < 0.0 {
        // Exiting the medium: swap the indices and flip the normal.
        cosi = -cosi;
        std::mem::swap(&mut etai, &mut etat);
        n = -normal;
    }
    let eta = etai / etat;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        Vec3::ZERO
    } else {
        incident * eta + n * (eta * cosi - k.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_flips_normal_component() {
        // dot(reflect(d, n), n) == -dot(d, n) for unit d, n
        let cases = [
            (Vec3::new(0.0, -1.0, 0.0), Vec3::Y),
            (Vec3::new(0.6, -0.8, 0.0).normalize(), Vec3::Y),
            (Vec3::new(1.0, -2.0, 3.0).normalize(), Vec3::Z),
        ];
        for (d, n) in cases {
            let r = reflect(d, n);
            assert!((r.dot(n) + d.dot(n)).abs() < 1e-6);
            assert!((r.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_reflect_head_on() {
        let r = reflect(Vec3::new(0.0, -1.0, 0.0), Vec3::Y);
        assert!((r - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_refract_matched_indices_is_identity() {
        // Equal indices on both sides: no bending.
        let d = Vec3::new(0.3, -0.9, 0.1).normalize();
        let r = refract(d, Vec3::Y, 1.0);
        assert!((r - d).length() < 1e-6);
    }

    #[test]
    fn test_refract_normal_incidence() {
        let r = refract(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, 1.5);
        assert!((r - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // Exiting glass (n = 1.5) beyond the critical angle (~41.8 deg)
        // yields the zero vector.
        let d = Vec3::new(0.8, 0.6, 0.0).normalize();
        assert_eq!(refract(d, Vec3::Y, 1.5), Vec3::ZERO);

        // Below the critical angle a transmitted ray exists.
        let d = Vec3::new(0.2, 1.0, 0.0).normalize();
        assert!(refract(d, Vec3::Y, 1.5) != Vec3::ZERO);
    }

    #[test]
    fn test_refract_bends_toward_normal_when_entering() {
        // Air to glass: the transmitted ray makes a smaller angle with
        // the (flipped) normal than the incident ray does.
        let d = Vec3::new(0.6, -0.8, 0.0).normalize();
        let r = refract(d, Vec3::Y, 1.5).normalize();
        let sin_i = d.x.abs();
        let sin_t = r.x.abs();
        assert!(sin_t < sin_i);
        // Snell: sin_i = 1.5 * sin_t
        assert!((sin_i - 1.5 * sin_t).abs() < 1e-5);
    }
}
