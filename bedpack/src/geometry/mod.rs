/// Monotone chain convex hull and the hull containment/disjointness predicates
pub mod convex_hull;

pub mod geo_enums;
pub mod primitives;

#[doc(inline)]
pub use geo_enums::Containment;
#[doc(inline)]
pub use geo_enums::Corner;
#[doc(inline)]
pub use geo_enums::TestShape;
