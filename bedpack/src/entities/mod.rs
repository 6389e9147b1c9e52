mod bed;
mod bed_shape;
mod direction;

#[doc(inline)]
pub use bed::Bed;

#[doc(inline)]
pub use bed::BedState;

#[doc(inline)]
pub use bed_shape::BedShape;

#[doc(inline)]
pub use bed_shape::Origin;

#[doc(inline)]
pub use direction::Direction;
