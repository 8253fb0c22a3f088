//! Addressing of the analog multiplexer select lines.

/// Number of channels routed through one multiplexer.
pub const CHANNELS: u8 = 8;

/// Driver of the multiplexer address input.
///
/// `select` must take effect before the next sample of the routed channel.
/// `settle` runs between selecting a code and the first sample taken under
/// it; the provided implementation returns immediately, implementors
/// targeting real hardware should wait out the multiplexer's propagation
/// time there.
pub trait SelectDriver {
    fn select(&mut self, code: u8);

    fn settle(&mut self) {}
}

/// Single binary select line.
pub trait SelectLine {
    fn set(&mut self, high: bool);
}

/// Standard binary addressing over three select lines.
pub struct Multiplexer<A, B, C> {
    address_a: A,
    address_b: B,
    address_c: C,
}

impl<A: SelectLine, B: SelectLine, C: SelectLine> Multiplexer<A, B, C> {
    pub fn new(address_a: A, address_b: B, address_c: C) -> Self {
        Self {
            address_a,
            address_b,
            address_c,
        }
    }
}

impl<A: SelectLine, B: SelectLine, C: SelectLine> SelectDriver for Multiplexer<A, B, C> {
    fn select(&mut self, code: u8) {
        let first_bit = code & 0b1 != 0;
        self.address_a.set(first_bit);

        let second_bit = code & 0b10 != 0;
        self.address_b.set(second_bit);

        let third_bit = code & 0b100 != 0;
        self.address_c.set(third_bit);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct FakeLine(Rc<Cell<bool>>);

    impl SelectLine for FakeLine {
        fn set(&mut self, high: bool) {
            self.0.set(high);
        }
    }

    #[test]
    fn when_code_is_selected_lines_follow_its_binary_encoding() {
        let s0 = Rc::new(Cell::new(false));
        let s1 = Rc::new(Cell::new(false));
        let s2 = Rc::new(Cell::new(false));
        let mut multiplexer = Multiplexer::new(
            FakeLine(Rc::clone(&s0)),
            FakeLine(Rc::clone(&s1)),
            FakeLine(Rc::clone(&s2)),
        );

        let expected = [
            (false, false, false),
            (true, false, false),
            (false, true, false),
            (true, true, false),
            (false, false, true),
            (true, false, true),
            (false, true, true),
            (true, true, true),
        ];

        for (code, levels) in expected.iter().enumerate() {
            multiplexer.select(code as u8);
            assert_eq!((s0.get(), s1.get(), s2.get()), *levels);
        }
    }
}
