//! The LMS colorspace and the dichromacy simulation matrices.
//!
//! Matrix values follow Viénot, Brettel and Mollon (1999), "Digital video
//! colourmaps for checking the legibility of displays by dichromats".

use strum::{EnumString, IntoStaticStr, VariantArray};

/// Row-major 3x3 matrix, applied to column vectors.
pub type Mat3 = [[f32; 3]; 3];

/// Display RGB to cone response.
pub const RGB_TO_LMS: Mat3 = [
    [17.8824, 43.5161, 4.11935],
    [3.45565, 27.1554, 3.86714],
    [0.0299566, 0.184309, 1.46709],
];

/// Cone response back to display RGB. A published low-precision inverse of
/// [`RGB_TO_LMS`], not an exact one; round-tripping an 8-bit pixel through
/// both is accurate to under one quantization step.
pub const LMS_TO_RGB: Mat3 = [
    [0.0809, -0.1305, 0.1167],
    [-0.0102, 0.0540, -0.1136],
    [-0.0004, -0.0041, 0.6935],
];

/// The three dichromacies that can be simulated. Each collapses one cone
/// response and reconstructs it from the remaining two.
#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Condition {
    /// Missing L (long-wavelength) cones.
    Protanopia,
    /// Missing M (medium-wavelength) cones.
    Deuteranopia,
    /// Missing S (short-wavelength) cones.
    Tritanopia,
}

impl Condition {
    /// The cone-collapse matrix for this condition, interpolated between the
    /// identity (`degree` 0) and the full simulation (`degree` 1).
    pub fn simulation_matrix(self, degree: f32) -> Mat3 {
        match self {
            Condition::Protanopia => [
                [1.0 - degree, 2.02344 * degree, -2.52581 * degree],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
            Condition::Deuteranopia => [
                [1.0, 0.0, 0.0],
                [0.494207 * degree, 1.0 - degree, 1.24827 * degree],
                [0.0, 0.0, 1.0],
            ],
            Condition::Tritanopia => [
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [-0.395913 * degree, 0.801109 * degree, 1.0 - degree],
            ],
        }
    }
}

/// Matrix product `a * b`: the result applies `b` first, then `a`.
pub fn concat(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut out = [[0.0f32; 3]; 3];
    for row in 0..3 {
        for col in 0..3 {
            out[row][col] = (0..3).map(|k| a[row][k] * b[k][col]).sum();
        }
    }
    out
}

/// Applies `m` to the column vector `v`.
pub fn transform(m: &Mat3, v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    #[test]
    fn degree_zero_is_the_identity_for_every_condition() {
        for condition in Condition::VARIANTS {
            assert_eq!(condition.simulation_matrix(0.0), IDENTITY);
        }
    }

    #[test]
    fn lms_round_trip_is_close_to_the_identity() {
        let round_trip = concat(&LMS_TO_RGB, &RGB_TO_LMS);
        for row in 0..3 {
            for col in 0..3 {
                let expected = IDENTITY[row][col];
                assert!(
                    (round_trip[row][col] - expected).abs() < 2e-3,
                    "round trip [{row}][{col}] = {}",
                    round_trip[row][col]
                );
            }
        }
    }

    #[test]
    fn conditions_parse_from_their_lowercase_names() {
        assert_eq!(
            Condition::try_from("protanopia"),
            Ok(Condition::Protanopia)
        );
        assert_eq!(
            Condition::try_from("deuteranopia"),
            Ok(Condition::Deuteranopia)
        );
        assert_eq!(Condition::try_from("tritanopia"), Ok(Condition::Tritanopia));
        assert!(Condition::try_from("achromatopsia").is_err());
    }

    #[test]
    fn transform_applies_rows_to_the_column_vector() {
        let m: Mat3 = [[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [1.0, 1.0, 1.0]];
        assert_eq!(transform(&m, [1.0, 2.0, 3.0]), [1.0, 4.0, 6.0]);
    }
}
