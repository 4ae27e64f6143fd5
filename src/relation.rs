use crate::{
    decimal::{is_near_zero, NEAR_ZERO},
    line::Line,
    vector::Vector,
};

pub trait Relation<Tool> {
    type Relate;

    fn relate(&self, to: &Tool) -> Self::Relate;
}

#[derive(Clone, Debug, PartialEq)]
pub enum LineRelation {
    Coincident,
    Parallel,
    Intersect(Vector),
}

impl Relation<Line> for Line {
    type Relate = LineRelation;

    /// Cramer's rule over the two standard forms `a*x + b*y = k1`,
    /// `c*x + d*y = k2`; a near-zero determinant means the lines belong
    /// to the same parallel family.
    fn relate(&self, to: &Line) -> Self::Relate {
        // normals are 2-D by construction
        let n1 = self.normal_vector().coordinates();
        let n2 = to.normal_vector().coordinates();
        let (a, b) = (n1[0], n1[1]);
        let (c, d) = (n2[0], n2[1]);
        let k1 = self.constant_term();
        let k2 = to.constant_term();

        let denominator = a * d - b * c;
        if is_near_zero(denominator, NEAR_ZERO) {
            if self == to {
                LineRelation::Coincident
            } else {
                LineRelation::Parallel
            }
        } else {
            let x = (d * k1 - b * k2) / denominator;
            let y = (-c * k1 + a * k2) / denominator;
            LineRelation::Intersect(Vector::from([x, y]))
        }
    }
}
