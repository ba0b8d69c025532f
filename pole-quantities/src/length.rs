quantity!(Inches, "in", 2);
quantity!(Feet, "ft", 1);

impl Inches {
    pub fn cubed(self) -> f64 {
        self.0.powi(3)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Self(inches.0 / 12.0)
    }
}

impl From<Feet> for Inches {
    fn from(feet: Feet) -> Self {
        Self(feet.0 * 12.0)
    }
}

impl Feet {
    pub fn squared(self) -> f64 {
        self.0 * self.0
    }
}
