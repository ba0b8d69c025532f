use crate::length::Inches;

// Rate at which the pole core hollows out:
quantity!(InchesPerYear, "in/yr", 3);

impl InchesPerYear {
    pub const fn over_years(self, years: f64) -> Inches {
        Inches(self.0 * years)
    }
}
