//! Round-robin scan driving all multiplexer channels across instances.

use heapless::Vec;

use crate::bus::Sampler;
use crate::instance::{Config, ConfigError, Instance};
use crate::log;
use crate::multiplexer::{SelectDriver, CHANNELS};
use crate::output::EventSink;

/// Scheduler walking multiplexer channel codes in fixed cyclic order.
///
/// One `scan` is a frame: every code is selected once, ascending, and every
/// configured instance gets each of its bound processors fed exactly once
/// under that code. Events reach the sink immediately, ordered by code,
/// then instance, then bus A before bus B before keys. All change
/// suppression happens inside the processors; the scanner forwards
/// everything they emit.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scanner<const N: usize> {
    instances: Vec<Instance, N>,
}

impl<const N: usize> Scanner<N> {
    /// Build the scanner, validating the whole configuration table.
    ///
    /// # Errors
    ///
    /// Refuses a table that binds an invalid MIDI channel or identifier,
    /// overcommits a bus, leaves an instance without slots, or reuses an
    /// identifier within one channel's namespace. See `ConfigError`.
    pub fn new(configs: Vec<Config, N>) -> Result<Self, ConfigError> {
        let mut instances: Vec<Instance, N> = Vec::new();
        for config in configs {
            let instance = Instance::new(config)?;
            // Both vectors share the capacity, this cannot overflow.
            instances.push(instance).ok();
        }

        ensure_unique_identifiers(&instances)?;

        log::info!("Scanner initialized with {} instances", instances.len());

        Ok(Self { instances })
    }

    /// Run one frame over all channel codes and instances.
    pub fn scan(
        &mut self,
        adc: &mut impl Sampler,
        select: &mut impl SelectDriver,
        sink: &mut impl EventSink,
    ) {
        for code in 0..CHANNELS {
            select.select(code);
            select.settle();
            for instance in &mut self.instances {
                instance.dispatch(code, adc, sink);
            }
        }
    }

    /// Scan frames forever, as fast as sampling and the transport allow.
    pub fn run(
        &mut self,
        adc: &mut impl Sampler,
        select: &mut impl SelectDriver,
        sink: &mut impl EventSink,
    ) -> ! {
        loop {
            self.scan(adc, select, sink);
        }
    }
}

fn ensure_unique_identifiers(instances: &[Instance]) -> Result<(), ConfigError> {
    for (i, instance) in instances.iter().enumerate() {
        let earlier = || {
            instances[..i]
                .iter()
                .filter(|other| other.midi_channel() == instance.midi_channel())
        };

        for (j, identifier) in instance.cc_identifiers().enumerate() {
            let duplicate = instance.cc_identifiers().take(j).any(|id| id == identifier)
                || earlier().any(|other| other.cc_identifiers().any(|id| id == identifier));
            if duplicate {
                return Err(ConfigError::DuplicateIdentifier {
                    channel: instance.midi_channel(),
                    identifier,
                });
            }
        }

        for (j, identifier) in instance.note_identifiers().enumerate() {
            let duplicate = instance
                .note_identifiers()
                .take(j)
                .any(|id| id == identifier)
                || earlier().any(|other| other.note_identifiers().any(|id| id == identifier));
            if duplicate {
                return Err(ConfigError::DuplicateIdentifier {
                    channel: instance.midi_channel(),
                    identifier,
                });
            }
        }
    }

    Ok(())
}
