//! Linear re-scale from the ADC's native range to the MIDI value range.

/// Highest raw value produced by the sampling collaborator.
pub(crate) const ADC_MAX: u16 = 1023;

/// Highest value of a MIDI control change or velocity.
pub(crate) const VALUE_MAX: u8 = 127;

/// Transpose a raw 10-bit sample into the 7-bit MIDI value range.
///
/// The division truncates, matching the quantization of the stored state.
/// Samples above the documented range are clamped instead of failing,
/// keeping the function total.
pub(crate) fn transpose_adc(sample: u16) -> u8 {
    let sample = sample.min(ADC_MAX);
    (u32::from(sample) * u32::from(VALUE_MAX) / u32::from(ADC_MAX)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_sample_sits_on_a_range_limit_it_maps_to_the_value_limit() {
        assert_eq!(transpose_adc(0), 0);
        assert_eq!(transpose_adc(1023), 127);
    }

    #[test]
    fn when_sample_is_inside_the_range_it_truncates_down() {
        assert_eq!(transpose_adc(600), 74);
        assert_eq!(transpose_adc(8), 0);
        assert_eq!(transpose_adc(9), 1);
        assert_eq!(transpose_adc(512), 63);
    }

    #[test]
    fn when_sample_exceeds_the_range_it_is_clamped() {
        assert_eq!(transpose_adc(4095), 127);
    }
}
