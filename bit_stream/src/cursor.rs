/// MSB-first position inside a partial byte.
///
/// Holds a single-bit mask: `0x80` is the first slot, `0x01` the last, and
/// `0x00` means every slot has been used.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitCursor(u8);

impl BitCursor {
    const FIRST: u8 = 0x80;

    #[inline]
    pub const fn first() -> Self {
        BitCursor(Self::FIRST)
    }

    #[inline]
    pub const fn empty() -> Self {
        BitCursor(0)
    }

    #[inline]
    pub const fn mask(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_first(self) -> bool {
        self.0 == Self::FIRST
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Slots already passed, 0..=8.
    #[inline]
    pub const fn position(self) -> u32 {
        self.0.leading_zeros()
    }

    /// Slots left before the byte is exhausted.
    #[inline]
    pub const fn remaining(self) -> u32 {
        8 - self.position()
    }

    #[inline]
    pub fn advance(&mut self) {
        self.0 >>= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_all_slots() {
        let mut cursor = BitCursor::first();
        assert!(cursor.is_first());
        assert_eq!(cursor.position(), 0);

        for expected in 1..=8 {
            cursor.advance();
            assert_eq!(cursor.position(), expected);
        }
        assert!(cursor.is_empty());
        assert_eq!(cursor, BitCursor::empty());
        assert_eq!(cursor.remaining(), 0);
    }
}
