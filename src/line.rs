use core::fmt;

use itertools::Itertools;

use crate::{
    decimal::{is_near_zero, Dec, NEAR_ZERO},
    error::LineError,
    relation::{LineRelation, Relation},
    vector::Vector,
};

const DIMENSION: usize = 2;

/// A 2-D line in standard form: the normal vector holds the coefficients
/// of `a*x + b*y = c`, the constant term is `c`.
#[derive(Clone)]
pub struct Line {
    normal_vector: Vector,
    constant_term: Dec,
    basepoint: Option<Vector>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Intersection {
    Point(Vector),
    Coincident(Line),
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.normal_vector.coordinates();
        write!(
            f,
            "{}x {}y = {}",
            n[0].round_dp(4),
            n[1].round_dp(4),
            self.constant_term.round_dp(4)
        )
    }
}

impl Default for Line {
    // the degenerate line "0 = 0"
    fn default() -> Self {
        Self {
            normal_vector: Vector::zeros(DIMENSION),
            constant_term: Dec::ZERO,
            basepoint: None,
        }
    }
}

impl Line {
    pub fn new(normal_vector: Vector, constant_term: Dec) -> Result<Self, LineError> {
        if normal_vector.dimension() != DIMENSION {
            return Err(LineError::NotTwoDimensional(normal_vector.dimension()));
        }
        let basepoint = Self::derive_basepoint(&normal_vector, constant_term);
        Ok(Self {
            normal_vector,
            constant_term,
            basepoint,
        })
    }

    pub fn dimension(&self) -> usize {
        DIMENSION
    }

    pub fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    pub fn constant_term(&self) -> Dec {
        self.constant_term
    }

    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    /// The pivot rule: index of the first coordinate whose magnitude
    /// exceeds the near-zero tolerance, in axis order.
    pub fn first_nonzero_index(vector: &Vector) -> Result<usize, LineError> {
        vector
            .coordinates()
            .iter()
            .find_position(|c| !is_near_zero(**c, NEAR_ZERO))
            .map(|(index, _)| index)
            .ok_or(LineError::NoNonzeroElements)
    }

    // a degenerate normal has no pivot, so no point is derivable from "0 = c"
    fn derive_basepoint(normal_vector: &Vector, constant_term: Dec) -> Option<Vector> {
        let pivot = Self::first_nonzero_index(normal_vector).ok()?;
        let mut coordinates = vec![Dec::ZERO; DIMENSION];
        coordinates[pivot] = constant_term / normal_vector.coordinates()[pivot];
        Vector::new(coordinates).ok()
    }

    pub fn is_parallel_to(&self, other: &Line) -> bool {
        // both normals are 2-D by construction
        self.normal_vector
            .is_parallel_to(&other.normal_vector)
            .unwrap_or(false)
    }

    pub fn intersection_with(&self, other: &Line) -> Option<Intersection> {
        match self.relate(other) {
            LineRelation::Intersect(point) => Some(Intersection::Point(point)),
            LineRelation::Coincident => Some(Intersection::Coincident(self.clone())),
            LineRelation::Parallel => None,
        }
    }
}

impl PartialEq for Line {
    /// Two lines are equal when they describe the same set of points.
    fn eq(&self, other: &Self) -> bool {
        if self.normal_vector.is_zero() {
            if !other.normal_vector.is_zero() {
                return false;
            }
            return is_near_zero(self.constant_term - other.constant_term, NEAR_ZERO);
        }
        if other.normal_vector.is_zero() {
            return false;
        }
        if !self.is_parallel_to(other) {
            return false;
        }
        let (Some(x0), Some(y0)) = (&self.basepoint, &other.basepoint) else {
            return false;
        };
        // parallel lines coincide when the vector between one point of each
        // is orthogonal to the shared normal direction
        match x0
            .minus(y0)
            .and_then(|diff| diff.is_orthogonal_to(&self.normal_vector))
        {
            Ok(orthogonal) => orthogonal,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use rust_decimal_macros::dec;

    use crate::{
        decimal::{is_near_zero, Dec, NEAR_ZERO},
        error::LineError,
        vector::Vector,
    };

    use super::{Intersection, Line};

    fn line(a: Dec, b: Dec, c: Dec) -> Line {
        Line::new(Vector::from([a, b]), c).unwrap()
    }

    #[test]
    fn normal_vector_must_be_two_dimensional() {
        let normal = Vector::new([dec!(1), dec!(2), dec!(3)]).unwrap();
        assert_matches!(
            Line::new(normal, dec!(1)),
            Err(LineError::NotTwoDimensional(3))
        );
    }

    #[test]
    fn pivot_is_the_first_nonzero_coordinate() {
        let v = Vector::from([dec!(0), dec!(2)]);
        assert_eq!(Line::first_nonzero_index(&v), Ok(1));

        let v = Vector::from([dec!(3), dec!(2)]);
        assert_eq!(Line::first_nonzero_index(&v), Ok(0));

        assert_matches!(
            Line::first_nonzero_index(&Vector::zeros(2)),
            Err(LineError::NoNonzeroElements)
        );
        // coordinates below the tolerance count as zero
        let v = Vector::from([dec!(0.00000000001), dec!(-0.00000000001)]);
        assert_matches!(
            Line::first_nonzero_index(&v),
            Err(LineError::NoNonzeroElements)
        );
    }

    #[test]
    fn basepoint_lies_on_the_line() {
        let ell = line(dec!(4.046), dec!(2.836), dec!(1.21));
        let basepoint = ell.basepoint().unwrap();
        let lhs = ell.normal_vector().dot(basepoint).unwrap();
        assert!(is_near_zero(lhs - ell.constant_term(), NEAR_ZERO));
    }

    #[test]
    fn basepoint_uses_the_pivot_coordinate() {
        let ell = line(dec!(0), dec!(2), dec!(3));
        assert_eq!(
            ell.basepoint().unwrap(),
            &Vector::from([dec!(0), dec!(1.5)])
        );
    }

    #[test]
    fn degenerate_line_has_no_basepoint() {
        assert_eq!(Line::default().basepoint(), None);
        let ell = Line::new(Vector::zeros(2), dec!(5)).unwrap();
        assert_eq!(ell.basepoint(), None);
    }

    #[test]
    fn proportional_standard_forms_are_the_same_line() {
        let a = line(dec!(4.046), dec!(2.836), dec!(1.21));
        let b = line(dec!(10.115), dec!(7.09), dec!(3.025));
        assert!(a.is_parallel_to(&b));
        assert_eq!(a, b);
        assert_matches!(
            a.intersection_with(&b),
            Some(Intersection::Coincident(ell)) if ell == a
        );
    }

    #[test]
    fn generic_lines_intersect_in_a_point() {
        let a = line(dec!(1), dec!(1), dec!(1));
        let b = line(dec!(1), dec!(-1), dec!(1));
        assert_eq!(
            a.intersection_with(&b),
            Some(Intersection::Point(Vector::from([dec!(1), dec!(0)])))
        );

        let a = line(dec!(7.204), dec!(3.182), dec!(8.68));
        let b = line(dec!(8.172), dec!(4.114), dec!(9.883));
        let point = assert_matches!(
            a.intersection_with(&b),
            Some(Intersection::Point(p)) => p
        );
        let rounded =
            Vector::new(point.coordinates().iter().map(|c| c.round_dp(3))).unwrap();
        assert_eq!(rounded, Vector::from([dec!(1.173), dec!(0.073)]));
    }

    #[test]
    fn disjoint_parallel_lines_do_not_intersect() {
        let a = line(dec!(1.182), dec!(5.562), dec!(6.744));
        let b = line(dec!(1.773), dec!(8.343), dec!(9.525));
        assert!(a.is_parallel_to(&b));
        assert_ne!(a, b);
        assert_eq!(a.intersection_with(&b), None);

        let a = line(dec!(1), dec!(1), dec!(1));
        let b = line(dec!(1), dec!(1), dec!(2));
        assert_ne!(a, b);
        assert_eq!(a.intersection_with(&b), None);
    }

    #[test]
    fn degenerate_lines_compare_by_constant_term() {
        assert_eq!(Line::default(), Line::default());

        let zero_five = Line::new(Vector::zeros(2), dec!(5)).unwrap();
        assert_ne!(Line::default(), zero_five);
        assert_eq!(
            zero_five,
            Line::new(Vector::zeros(2), dec!(5.00000000001)).unwrap()
        );

        // a degenerate line never equals a real one, in either order
        let real = line(dec!(1), dec!(1), dec!(5));
        assert_ne!(zero_five, real);
        assert_ne!(real, zero_five);
    }
}
