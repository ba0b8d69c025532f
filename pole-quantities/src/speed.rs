quantity!(MetersPerSecond, "m/s", 1);

impl MetersPerSecond {
    pub fn squared(self) -> f64 {
        self.0 * self.0
    }
}
