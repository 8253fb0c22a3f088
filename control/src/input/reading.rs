//! Structures used to pass conditioned values out of input processors.

/// Single change detected on a physical input.
///
/// `identifier` is the stable MIDI control or note number assigned to the
/// input at configuration time; it never changes after construction.
/// Processors return a reading only when the conditioned value differs from
/// the previously stored one, so holding a reading always means there is
/// something to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    pub identifier: u8,
    pub value: u8,
}
