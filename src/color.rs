use crate::error::{Error, Result};

/// An 8-bit RGB triple, the canonical form every color argument resolves into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses a 6-digit hex color code, with or without a leading `#` or `0x`.
    ///
    /// Case-insensitive. Anything that is not exactly three hex-encoded bytes
    /// after the prefix is an [`Error::InvalidColor`].
    pub fn from_hex(code: &str) -> Result<Self> {
        let digits = code
            .strip_prefix('#')
            .or_else(|| code.strip_prefix("0x"))
            .unwrap_or(code);

        let mut channels = [0u8; 3];
        hex::decode_to_slice(digits, &mut channels).map_err(|source| Error::InvalidColor {
            code: code.to_string(),
            source,
        })?;

        Ok(Self::new(channels[0], channels[1], channels[2]))
    }

    /// Lowercase 6-digit hex encoding, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode([self.red, self.green, self.blue])
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

/// A color argument as callers supply it: a hex code string or an
/// already-resolved triple.
///
/// Resolution is deferred until [`ColorSpec::resolve`] so that the transform
/// entry points can accept either form and surface a parse failure through
/// their own `Result`.
#[derive(Debug, Clone)]
pub enum ColorSpec {
    Hex(String),
    Rgb(Rgb),
}

impl ColorSpec {
    pub fn resolve(self) -> Result<Rgb> {
        match self {
            ColorSpec::Hex(code) => Rgb::from_hex(&code),
            ColorSpec::Rgb(rgb) => Ok(rgb),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(code: &str) -> Self {
        ColorSpec::Hex(code.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(code: String) -> Self {
        ColorSpec::Hex(code)
    }
}

impl From<Rgb> for ColorSpec {
    fn from(rgb: Rgb) -> Self {
        ColorSpec::Rgb(rgb)
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from(channels: (u8, u8, u8)) -> Self {
        ColorSpec::Rgb(channels.into())
    }
}

impl From<[u8; 3]> for ColorSpec {
    fn from(channels: [u8; 3]) -> Self {
        ColorSpec::Rgb(channels.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_prefixes() {
        let expected = Rgb::new(0x1e, 0x90, 0xff);
        assert_eq!(Rgb::from_hex("1e90ff").expect("bare"), expected);
        assert_eq!(Rgb::from_hex("#1e90ff").expect("hash"), expected);
        assert_eq!(Rgb::from_hex("0x1e90ff").expect("0x"), expected);
        assert_eq!(Rgb::from_hex("#1E90FF").expect("uppercase"), expected);
    }

    #[test]
    fn hex_round_trips_lowercased() {
        for code in ["000000", "ffffff", "1e90ff", "ABCDEF"] {
            let parsed = Rgb::from_hex(code).expect("valid code");
            assert_eq!(parsed.to_hex(), code.to_lowercase());
        }
    }

    #[test]
    fn rejects_non_hex_digits() {
        let err = Rgb::from_hex("#12G456").expect_err("G is not a hex digit");
        assert!(matches!(err, Error::InvalidColor { .. }));
    }

    #[test]
    fn rejects_wrong_lengths() {
        for code in ["", "#", "fff", "#1e90ff00", "0xff"] {
            assert!(
                matches!(Rgb::from_hex(code), Err(Error::InvalidColor { .. })),
                "{code:?} should not parse",
            );
        }
    }

    #[test]
    fn specs_resolve_to_the_same_triple() {
        let from_hex = ColorSpec::from("#102030").resolve().expect("hex");
        let from_tuple = ColorSpec::from((0x10, 0x20, 0x30)).resolve().expect("tuple");
        let from_array = ColorSpec::from([0x10, 0x20, 0x30]).resolve().expect("array");
        assert_eq!(from_hex, from_tuple);
        assert_eq!(from_hex, from_array);
    }

    #[test]
    fn malformed_spec_fails_at_resolve() {
        assert!(ColorSpec::from("not a color").resolve().is_err());
    }
}
