use std::fmt;

/// Unit of comparison between the two byte streams.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Granularity {
    Byte,
    /// One hex digit; the default.
    #[default]
    Nibble,
    Bit,
}

impl Granularity {
    pub fn units_per_byte(self) -> usize {
        match self {
            Granularity::Byte => 1,
            Granularity::Nibble => 2,
            Granularity::Bit => 8,
        }
    }

    pub fn unit_count(self, byte_len: usize) -> usize {
        byte_len * self.units_per_byte()
    }

    /// Singular name used in per-mismatch lines.
    pub fn unit_name(self) -> &'static str {
        match self {
            Granularity::Byte => "byte",
            Granularity::Nibble => "hex",
            Granularity::Bit => "bit",
        }
    }

    /// Plural name used when reporting lengths.
    pub fn plural(self) -> &'static str {
        match self {
            Granularity::Byte => "bytes",
            Granularity::Nibble => "hex digits",
            Granularity::Bit => "bits",
        }
    }

    /// Value of the unit at `position`. Nibbles and bits are taken MSB first,
    /// so nibble `p` reads the same digit as `hex::encode(bytes)[p]`.
    ///
    /// Panics if `position` is outside `0..unit_count(bytes.len())`.
    pub fn unit_at(self, bytes: &[u8], position: usize) -> u8 {
        match self {
            Granularity::Byte => bytes[position],
            Granularity::Nibble => {
                let b = bytes[position / 2];
                if position % 2 == 0 { b >> 4 } else { b & 0x0f }
            }
            Granularity::Bit => (bytes[position / 8] >> (7 - position % 8)) & 1,
        }
    }

    pub fn locate(self, position: usize) -> Location {
        match self {
            Granularity::Byte => Location::Byte(position),
            Granularity::Nibble => Location::Nibble {
                byte: position / 2,
                half: if position % 2 == 0 { Half::High } else { Half::Low },
            },
            Granularity::Bit => Location::Bit {
                byte: position / 8,
                bit: 7 - (position % 8) as u8,
            },
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Half {
    High,
    Low,
}

/// Where a unit position lands in the underlying byte stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Location {
    Byte(usize),
    Nibble { byte: usize, half: Half },
    /// `bit` counts from the least significant bit (7 = MSB).
    Bit { byte: usize, bit: u8 },
}

impl Location {
    pub fn byte(&self) -> usize {
        match *self {
            Location::Byte(b) => b,
            Location::Nibble { byte, .. } | Location::Bit { byte, .. } => byte,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Byte(b) => write!(f, "byte {b}"),
            Location::Nibble { byte, half } => {
                let h = match half {
                    Half::High => "high",
                    Half::Low => "low",
                };
                write!(f, "byte {byte} {h}")
            }
            Location::Bit { byte, bit } => write!(f, "byte {byte} bit {bit}"),
        }
    }
}
