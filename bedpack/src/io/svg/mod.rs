mod bed_to_svg;
pub mod svg_util;

#[doc(inline)]
pub use bed_to_svg::bed_to_svg;
