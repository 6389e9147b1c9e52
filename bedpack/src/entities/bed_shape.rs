use anyhow::{Result, ensure};

/// Shape of the build surface of a [`Bed`](crate::entities::Bed)
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BedShape {
    Rectangular { width: f64, height: f64 },
    Round { diameter: f64 },
}

impl BedShape {
    pub fn try_rectangular(width: f64, height: f64) -> Result<Self> {
        let shape = BedShape::Rectangular { width, height };
        shape.validate()?;
        Ok(shape)
    }

    pub fn try_round(diameter: f64) -> Result<Self> {
        let shape = BedShape::Round { diameter };
        shape.validate()?;
        Ok(shape)
    }

    /// Checks that all dimensions are finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        match *self {
            BedShape::Rectangular { width, height } => ensure!(
                width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
                "invalid rectangular bed dimensions, width: {width}, height: {height}"
            ),
            BedShape::Round { diameter } => ensure!(
                diameter.is_finite() && diameter > 0.0,
                "invalid round bed diameter: {diameter}"
            ),
        }
        Ok(())
    }
}

/// Where the origin of the bed's coordinate system lies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// In the bottom left corner, the center of the bed is at `(width/2, height/2)`
    Corner,
    /// In the center of the bed
    Center,
}
