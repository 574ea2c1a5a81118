//! 3D gradient noise.
//!
//! Classic Perlin-style noise over a hashed integer lattice. The
//! permutation table is process-wide constant data; there is no
//! reinitialization lifecycle. Used by procedural systems (fracture
//! patterns, emitter jitter) that need a deterministic, smooth field.

use glam::Vec3;

/// Lattice hash permutation, repeated lookups wrap at 256 entries.
const PERM: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209,
    76, 132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198,
    173, 186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44,
    154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79,
    113, 224, 232, 178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12,
    191, 179, 162, 241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29,
    24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

#[inline]
fn perm(i: i32) -> u8 {
    PERM[(i & 255) as usize]
}

#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Project onto one of twelve gradient directions picked by the hash.
#[inline]
fn grad(hash: u8, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

/// Smooth gradient noise at `p`, in roughly [-1, 1].
///
/// Zero at every integer lattice point; deterministic for a given input.
#[must_use]
#[allow(clippy::many_single_char_names, clippy::cast_possible_truncation)]
pub fn noise3(p: Vec3) -> f32 {
    let xi = p.x.floor() as i32;
    let yi = p.y.floor() as i32;
    let zi = p.z.floor() as i32;
    let x = p.x - p.x.floor();
    let y = p.y - p.y.floor();
    let z = p.z - p.z.floor();

    let u = fade(x);
    let v = fade(y);
    let w = fade(z);

    let a = i32::from(perm(xi)) + yi;
    let aa = i32::from(perm(a)) + zi;
    let ab = i32::from(perm(a + 1)) + zi;
    let b = i32::from(perm(xi + 1)) + yi;
    let ba = i32::from(perm(b)) + zi;
    let bb = i32::from(perm(b + 1)) + zi;

    lerp(
        lerp(
            lerp(grad(perm(aa), x, y, z), grad(perm(ba), x - 1.0, y, z), u),
            lerp(
                grad(perm(ab), x, y - 1.0, z),
                grad(perm(bb), x - 1.0, y - 1.0, z),
                u,
            ),
            v,
        ),
        lerp(
            lerp(
                grad(perm(aa + 1), x, y, z - 1.0),
                grad(perm(ba + 1), x - 1.0, y, z - 1.0),
                u,
            ),
            lerp(
                grad(perm(ab + 1), x, y - 1.0, z - 1.0),
                grad(perm(bb + 1), x - 1.0, y - 1.0, z - 1.0),
                u,
            ),
            v,
        ),
        w,
    )
}

/// Fractal sum of [`noise3`] octaves.
///
/// Each octave doubles the frequency and halves the amplitude. `octaves`
/// of zero yields zero.
#[must_use]
pub fn fractal3(p: Vec3, octaves: u32, frequency: f32, amplitude: f32) -> f32 {
    let mut sum = 0.0;
    let mut freq = frequency;
    let mut amp = amplitude;
    for _ in 0..octaves {
        sum += amp * noise3(p * freq);
        freq *= 2.0;
        amp *= 0.5;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vanishes_on_the_lattice() {
        for corner in [
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(3.0, -2.0, 7.0),
            Vec3::new(-5.0, 4.0, -1.0),
        ] {
            assert!(noise3(corner).abs() < 1e-6);
        }
    }

    #[test]
    fn stays_in_unit_range() {
        for i in 0..500 {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f32 * 0.137;
            let n = noise3(Vec3::new(t, t * 0.7 + 1.3, t * 1.9 - 4.2));
            assert!(n.abs() <= 1.0, "noise3 out of range: {n}");
        }
    }

    #[test]
    fn is_deterministic() {
        let p = Vec3::new(0.4, 12.7, -3.3);
        assert_eq!(noise3(p), noise3(p));
    }

    #[test]
    fn fractal_sums_octaves() {
        let p = Vec3::new(0.3, 0.6, 0.9);
        let one = fractal3(p, 1, 1.0, 1.0);
        let two = fractal3(p, 2, 1.0, 1.0);
        assert!((two - one - 0.5 * noise3(p * 2.0)).abs() < 1e-6);
        assert_eq!(fractal3(p, 0, 1.0, 1.0), 0.0);
    }
}
