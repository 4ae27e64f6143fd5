use core::fmt;

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::MathematicalOps;

use crate::{
    decimal::{is_near_zero, Dec, NEAR_ZERO},
    error::VectorError,
};

#[derive(Clone, PartialEq, Eq)]
pub struct Vector {
    coordinates: Vec<Dec>,
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector(")?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c.round_dp(4))?;
        }
        write!(f, ")")
    }
}

impl From<[Dec; 2]> for Vector {
    fn from(coordinates: [Dec; 2]) -> Self {
        Self {
            coordinates: coordinates.to_vec(),
        }
    }
}

impl From<[Dec; 3]> for Vector {
    fn from(coordinates: [Dec; 3]) -> Self {
        Self {
            coordinates: coordinates.to_vec(),
        }
    }
}

impl Vector {
    pub fn new(coordinates: impl IntoIterator<Item = Dec>) -> Result<Self, VectorError> {
        let coordinates: Vec<Dec> = coordinates.into_iter().collect();
        if coordinates.is_empty() {
            return Err(VectorError::EmptyCoordinates);
        }
        Ok(Self { coordinates })
    }

    pub fn zeros(dimension: usize) -> Self {
        assert!(dimension > 0, "vector dimension must be at least 1");
        Self {
            coordinates: vec![Dec::ZERO; dimension],
        }
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinates(&self) -> &[Dec] {
        &self.coordinates
    }

    fn check_dimension(&self, other: &Vector) -> Result<(), VectorError> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            });
        }
        Ok(())
    }

    pub fn plus(&self, v: &Vector) -> Result<Vector, VectorError> {
        self.check_dimension(v)?;
        Ok(Self {
            coordinates: self
                .coordinates
                .iter()
                .zip(&v.coordinates)
                .map(|(x, y)| x + y)
                .collect(),
        })
    }

    pub fn minus(&self, v: &Vector) -> Result<Vector, VectorError> {
        self.check_dimension(v)?;
        Ok(Self {
            coordinates: self
                .coordinates
                .iter()
                .zip(&v.coordinates)
                .map(|(x, y)| x - y)
                .collect(),
        })
    }

    pub fn times_scalar(&self, c: Dec) -> Vector {
        Self {
            coordinates: self.coordinates.iter().map(|x| c * x).collect(),
        }
    }

    pub fn magnitude(&self) -> Dec {
        let squared: Dec = self.coordinates.iter().map(|x| x * x).sum();
        // a sum of squares is never negative
        squared.sqrt().unwrap_or(Dec::ZERO)
    }

    pub fn normalized(&self) -> Result<Vector, VectorError> {
        let magnitude = self.magnitude();
        if magnitude.is_zero() {
            return Err(VectorError::ZeroVector);
        }
        Ok(self.times_scalar(Dec::ONE / magnitude))
    }

    pub fn dot(&self, v: &Vector) -> Result<Dec, VectorError> {
        self.check_dimension(v)?;
        Ok(self
            .coordinates
            .iter()
            .zip(&v.coordinates)
            .map(|(x, y)| x * y)
            .sum())
    }

    fn angle_radians(&self, v: &Vector) -> Result<f64, VectorError> {
        self.check_dimension(v)?;
        if self.is_zero() || v.is_zero() {
            return Err(VectorError::AngleWithZeroVector);
        }
        let cos = self.normalized()?.dot(&v.normalized()?)?;
        // rounding can push the dot of two unit vectors past [-1, 1],
        // which is outside the domain of acos
        let cos = cos.to_f64().unwrap_or_default().clamp(-1.0, 1.0);
        Ok(cos.acos())
    }

    pub fn angle_with(&self, v: &Vector) -> Result<Dec, VectorError> {
        let radians = self.angle_radians(v)?;
        Ok(Dec::from_f64(radians).unwrap_or_default())
    }

    pub fn angle_with_degrees(&self, v: &Vector) -> Result<Dec, VectorError> {
        let radians = self.angle_radians(v)?;
        Ok(Dec::from_f64(radians.to_degrees()).unwrap_or_default())
    }

    pub fn is_orthogonal_to(&self, v: &Vector) -> Result<bool, VectorError> {
        self.is_orthogonal_to_within(v, NEAR_ZERO)
    }

    pub fn is_orthogonal_to_within(
        &self,
        v: &Vector,
        tolerance: Dec,
    ) -> Result<bool, VectorError> {
        Ok(self.dot(v)?.abs() < tolerance)
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_within(NEAR_ZERO)
    }

    pub fn is_zero_within(&self, tolerance: Dec) -> bool {
        self.magnitude() < tolerance
    }

    pub fn is_parallel_to(&self, v: &Vector) -> Result<bool, VectorError> {
        self.check_dimension(v)?;
        if self.is_zero() || v.is_zero() {
            return Ok(true);
        }
        let angle = self.angle_with(v)?;
        Ok(is_near_zero(angle, NEAR_ZERO) || is_near_zero(angle - Dec::PI, NEAR_ZERO))
    }

    pub fn component_parallel_to(&self, basis: &Vector) -> Result<Vector, VectorError> {
        self.check_dimension(basis)?;
        let u = match basis.normalized() {
            Ok(u) => u,
            Err(VectorError::ZeroVector) => return Err(VectorError::NoUniqueParallelComponent),
            Err(e) => return Err(e),
        };
        let weight = self.dot(&u)?;
        Ok(u.times_scalar(weight))
    }

    pub fn component_orthogonal_to(&self, basis: &Vector) -> Result<Vector, VectorError> {
        let projection = match self.component_parallel_to(basis) {
            Ok(p) => p,
            Err(VectorError::NoUniqueParallelComponent) => {
                return Err(VectorError::NoUniqueOrthogonalComponent)
            }
            Err(e) => return Err(e),
        };
        self.minus(&projection)
    }

    fn embedded_in_r3(&self) -> Result<[Dec; 3], VectorError> {
        match self.coordinates.as_slice() {
            &[x, y] => Ok([x, y, Dec::ZERO]),
            &[x, y, z] => Ok([x, y, z]),
            _ => Err(VectorError::UnsupportedDimension(self.dimension())),
        }
    }

    pub fn cross(&self, v: &Vector) -> Result<Vector, VectorError> {
        let [x1, y1, z1] = self.embedded_in_r3()?;
        let [x2, y2, z2] = v.embedded_in_r3()?;
        Ok(Vector::from([
            y1 * z2 - y2 * z1,
            -(x1 * z2 - x2 * z1),
            x1 * y2 - x2 * y1,
        ]))
    }

    pub fn area_of_parallelogram_with(&self, v: &Vector) -> Result<Dec, VectorError> {
        Ok(self.cross(v)?.magnitude())
    }

    pub fn area_of_triangle_with(&self, v: &Vector) -> Result<Dec, VectorError> {
        Ok(self.area_of_parallelogram_with(v)? / Dec::TWO)
    }
}
