//! Switch abstraction tracking its state over time.

use super::reading::Reading;
use crate::scale;

/// Abstraction of a binary control.
///
/// Use it to turn analog samples of a switch into edge events with
/// hysteresis around the zero threshold. Only crossings are reported, a
/// held switch stays silent. There is no time-based debounce; bounce across
/// the zero boundary reports every crossing.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Switch {
    identifier: u8,
    is_active: bool,
}

impl Switch {
    #[must_use]
    pub fn new(identifier: u8) -> Self {
        Self {
            identifier,
            is_active: false,
        }
    }

    /// Fold a new raw sample into the state, reporting crossing edges.
    pub fn update(&mut self, sample: u16) -> Option<Reading> {
        let new_reading = scale::transpose_adc(sample);
        if !self.is_active && new_reading > 0 {
            self.is_active = true;
            Some(Reading {
                identifier: self.identifier,
                value: scale::VALUE_MAX,
            })
        } else if self.is_active && new_reading == 0 {
            self.is_active = false;
            Some(Reading {
                identifier: self.identifier,
                value: 0,
            })
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub(crate) fn identifier(&self) -> u8 {
        self.identifier
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn when_samples_cross_the_threshold_it_emits_once_per_edge() {
        let mut switch = Switch::new(13);
        assert_eq!(switch.update(0), None);
        assert_eq!(switch.update(0), None);
        assert_eq!(
            switch.update(600),
            Some(Reading {
                identifier: 13,
                value: 127,
            })
        );
        assert_eq!(switch.update(600), None);
        assert_eq!(
            switch.update(0),
            Some(Reading {
                identifier: 13,
                value: 0,
            })
        );
    }

    #[test]
    fn when_level_moves_without_crossing_zero_it_stays_silent() {
        let mut switch = Switch::new(13);
        switch.update(600);
        assert_eq!(switch.update(1023), None);
        assert_eq!(switch.update(9), None);
        assert!(switch.is_active());
    }

    #[test]
    fn when_sample_truncates_to_zero_it_counts_as_released() {
        let mut switch = Switch::new(13);
        switch.update(600);
        // 8 still maps to 0 after the re-scale.
        assert_eq!(switch.update(8).unwrap().value, 0);
        assert!(!switch.is_active());
    }

    proptest! {
        #[test]
        fn in_any_sample_stream_emitted_values_alternate_between_edges(
            samples in proptest::collection::vec(0u16..=1023, 0..64),
        ) {
            let mut switch = Switch::new(13);
            let mut last = 0;
            for sample in samples {
                if let Some(reading) = switch.update(sample) {
                    prop_assert!(reading.value == 0 || reading.value == 127);
                    prop_assert_ne!(reading.value, last);
                    last = reading.value;
                }
            }
        }
    }
}
