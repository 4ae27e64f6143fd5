pub mod decimal;
pub mod error;
pub mod line;
pub mod relation;
pub mod vector;

pub use decimal::{is_near_zero, Dec, NEAR_ZERO};
pub use error::{LineError, VectorError};
pub use line::{Intersection, Line};
pub use relation::{LineRelation, Relation};
pub use vector::Vector;
