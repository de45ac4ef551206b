pub struct Math {}
impl Math {
    pub fn round_float_to_n_decimals(number: f64, decimals: i32) -> f64 {
        let multiplier = 10.0_f64.powi(decimals);
        (number * multiplier).round() / multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_the_requested_precision() {
        assert_eq!(Math::round_float_to_n_decimals(12.3456, 1), 12.3);
        assert_eq!(Math::round_float_to_n_decimals(12.35, 1), 12.4);
        assert_eq!(Math::round_float_to_n_decimals(25.0, 1), 25.0);
    }
}
