//! Emission of conditioned events towards the MIDI transport.

/// Sink receiving every non-suppressed event of the scan.
///
/// Both calls are synchronous and fire-and-forget. The engine never reads
/// anything back; if the transport blocks, the scan stalls with it and
/// resumes where it left off.
pub trait EventSink {
    fn control_change(&mut self, cc: u8, value: u8, channel: u8);

    fn note_on(&mut self, note: u8, velocity: u8, channel: u8);
}
