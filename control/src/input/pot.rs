//! Pot abstraction tracking its state over time.

use super::reading::Reading;
use crate::scale;

/// Smoothing factor of the exponential moving average.
const ALPHA: f32 = 0.5;

/// Abstraction of a potentiometer.
///
/// Use it to smoothen the value received from pots and to report only
/// quantized changes. Raw ADC noise on a resting pot would otherwise turn
/// into a steady stream of one-step events.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pot {
    identifier: u8,
    filtered: u8,
}

impl Pot {
    #[must_use]
    pub fn new(identifier: u8) -> Self {
        Self {
            identifier,
            filtered: 0,
        }
    }

    /// Blend a new raw sample into the state, reporting quantized changes.
    pub fn update(&mut self, sample: u16) -> Option<Reading> {
        let new_reading = scale::transpose_adc(sample);
        // The blend is truncated back to the integer domain before the
        // comparison, the stored state never keeps fractions.
        let blended =
            (ALPHA * f32::from(new_reading) + (1.0 - ALPHA) * f32::from(self.filtered)) as u8;
        // A fully open pot bypasses the smoothing.
        let filtered = if new_reading == scale::VALUE_MAX {
            new_reading
        } else {
            blended
        };

        let changed = filtered != self.filtered;
        self.filtered = filtered;
        changed.then(|| Reading {
            identifier: self.identifier,
            value: filtered,
        })
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.filtered
    }

    pub(crate) fn identifier(&self) -> u8 {
        self.identifier
    }
}
