pub struct Config {
    /// Coating mass per tin, kg.
    pub tin_size: f64,
    pub activator_per_tin_summer: u32,
    pub activator_per_tin_winter: u32,
    /// Total coating needed per m² across all coats, kg.
    pub coverage: f64,
    /// Extra matting area to cover overlaps.
    pub matting_factor: f64,
    pub long_roll_area: f64,
    pub short_roll_area: f64,
    pub long_roll_label: String,
    pub short_roll_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tin_size: 15.0,
            activator_per_tin_summer: 1,
            activator_per_tin_winter: 2,
            coverage: 2.0,
            matting_factor: 1.05,
            long_roll_area: 180.0,
            short_roll_area: 25.0,
            long_roll_label: "1m × 180m".into(),
            short_roll_label: "1m × 25m".into(),
        }
    }
}
