//! Wiring of control surface instances.

use heapless::Vec;

use crate::bus::{Bus, Sampler};
use crate::input::pot::Pot;
use crate::input::reading::Reading;
use crate::input::switch::Switch;
use crate::output::EventSink;

/// Number of slots addressable on one bus.
pub const SLOTS: usize = crate::multiplexer::CHANNELS as usize;

/// Static description of one control surface instance.
///
/// Slot lists are ordered by multiplexer channel code. Bus A carries knobs
/// only; bus B carries a prefix of knobs followed by switches. A bus whose
/// slot list is empty is never sampled. Key slots emit note on events
/// instead of control changes and scan a bus of their own.
///
/// Identifiers are plain MIDI control change numbers for knobs and
/// switches, and note numbers for keys. They are fixed for the lifetime of
/// the process.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub midi_channel: u8,
    pub bus_a: Bus,
    pub bus_b: Bus,
    pub key_bus: Option<Bus>,
    pub knobs_a: Vec<u8, SLOTS>,
    pub knobs_b: Vec<u8, SLOTS>,
    pub switches_b: Vec<u8, SLOTS>,
    pub keys: Vec<u8, SLOTS>,
}

/// Description of a rejected configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// MIDI channels span `1..=16`.
    InvalidMidiChannel(u8),
    /// Control change numbers span `1..=127`, note numbers `0..=127`.
    InvalidIdentifier(u8),
    /// The same identifier is bound twice within one channel's namespace.
    DuplicateIdentifier { channel: u8, identifier: u8 },
    /// One bus cannot carry more slots than the multiplexer has channels.
    TooManySlots,
    /// An instance without a single slot would never emit anything.
    EmptyInstance,
    /// Key slots are configured but no key bus is bound.
    MissingKeyBus,
    /// A key bus is bound but there are no key slots.
    UnusedKeyBus,
}

/// One channel slot bound to exactly one processor.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Slot {
    Pot(Pot),
    Switch(Switch),
}

impl Slot {
    fn update(&mut self, sample: u16) -> Option<Reading> {
        match self {
            Self::Pot(pot) => pot.update(sample),
            Self::Switch(switch) => switch.update(sample),
        }
    }

    fn identifier(&self) -> u8 {
        match self {
            Self::Pot(pot) => pot.identifier(),
            Self::Switch(switch) => switch.identifier(),
        }
    }
}

/// Stateful instance built from a validated `Config`.
///
/// Processors are constructed once, mutated in place by the scan, and never
/// reconfigured at runtime.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct Instance {
    midi_channel: u8,
    bus_a: Bus,
    bus_b: Bus,
    key_bus: Option<Bus>,
    slots_a: Vec<Slot, SLOTS>,
    slots_b: Vec<Slot, SLOTS>,
    keys: Vec<Switch, SLOTS>,
}

impl Instance {
    pub(crate) fn new(config: Config) -> Result<Self, ConfigError> {
        if !(1..=16).contains(&config.midi_channel) {
            return Err(ConfigError::InvalidMidiChannel(config.midi_channel));
        }

        match (config.key_bus, config.keys.is_empty()) {
            (None, false) => return Err(ConfigError::MissingKeyBus),
            (Some(_), true) => return Err(ConfigError::UnusedKeyBus),
            _ => (),
        }

        if config.knobs_a.is_empty()
            && config.knobs_b.is_empty()
            && config.switches_b.is_empty()
            && config.keys.is_empty()
        {
            return Err(ConfigError::EmptyInstance);
        }

        let mut slots_a = Vec::new();
        for &cc in &config.knobs_a {
            ensure_control_number(cc)?;
            slots_a
                .push(Slot::Pot(Pot::new(cc)))
                .map_err(|_| ConfigError::TooManySlots)?;
        }

        let mut slots_b = Vec::new();
        for &cc in &config.knobs_b {
            ensure_control_number(cc)?;
            slots_b
                .push(Slot::Pot(Pot::new(cc)))
                .map_err(|_| ConfigError::TooManySlots)?;
        }
        for &cc in &config.switches_b {
            ensure_control_number(cc)?;
            slots_b
                .push(Slot::Switch(Switch::new(cc)))
                .map_err(|_| ConfigError::TooManySlots)?;
        }

        let mut keys = Vec::new();
        for &note in &config.keys {
            ensure_note_number(note)?;
            keys.push(Switch::new(note))
                .map_err(|_| ConfigError::TooManySlots)?;
        }

        Ok(Self {
            midi_channel: config.midi_channel,
            bus_a: config.bus_a,
            bus_b: config.bus_b,
            key_bus: config.key_bus,
            slots_a,
            slots_b,
            keys,
        })
    }

    pub(crate) fn midi_channel(&self) -> u8 {
        self.midi_channel
    }

    /// Feed the processors bound to the given channel code, bus A first,
    /// then bus B, then the key bus. A bus with no slot under this code is
    /// left unsampled.
    pub(crate) fn dispatch(
        &mut self,
        code: u8,
        adc: &mut impl Sampler,
        sink: &mut impl EventSink,
    ) {
        let slot = usize::from(code);

        if let Some(knob) = self.slots_a.get_mut(slot) {
            if let Some(reading) = knob.update(adc.sample(self.bus_a)) {
                sink.control_change(reading.identifier, reading.value, self.midi_channel);
            }
        }

        if let Some(bound) = self.slots_b.get_mut(slot) {
            if let Some(reading) = bound.update(adc.sample(self.bus_b)) {
                sink.control_change(reading.identifier, reading.value, self.midi_channel);
            }
        }

        if let Some(key_bus) = self.key_bus {
            if let Some(key) = self.keys.get_mut(slot) {
                if let Some(reading) = key.update(adc.sample(key_bus)) {
                    sink.note_on(reading.identifier, reading.value, self.midi_channel);
                }
            }
        }
    }

    pub(crate) fn cc_identifiers(&self) -> impl Iterator<Item = u8> + '_ {
        self.slots_a
            .iter()
            .chain(self.slots_b.iter())
            .map(Slot::identifier)
    }

    pub(crate) fn note_identifiers(&self) -> impl Iterator<Item = u8> + '_ {
        self.keys.iter().map(Switch::identifier)
    }
}

fn ensure_control_number(cc: u8) -> Result<(), ConfigError> {
    if (1..=127).contains(&cc) {
        Ok(())
    } else {
        Err(ConfigError::InvalidIdentifier(cc))
    }
}

fn ensure_note_number(note: u8) -> Result<(), ConfigError> {
    if note <= 127 {
        Ok(())
    } else {
        Err(ConfigError::InvalidIdentifier(note))
    }
}
