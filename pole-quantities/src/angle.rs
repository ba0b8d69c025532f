quantity!(Degrees, "°", 1);

impl Degrees {
    pub const fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    pub fn sin(self) -> f64 {
        self.to_radians().sin()
    }
}
