use std::fmt;
use std::str::FromStr;

use serde::de::Error;

/// 8-bit sRGB color that serializes to a string like `"#ff00ff"`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// sRGB component values.
    pub rgb: [u8; 3],
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.rgb))
    }
}
impl FromStr for Rgb {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rgb = [0_u8; 3];
        let s = s.strip_prefix('#').unwrap_or(s).trim();
        match s.len() {
            3 => {
                let s = &s.chars().flat_map(|c| [c, c]).collect::<String>();
                hex::decode_to_slice(s, &mut rgb)?;
            }
            _ => hex::decode_to_slice(s, &mut rgb)?,
        }
        Ok(Rgb { rgb })
    }
}
impl serde::Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Self>().map_err(D::Error::custom)
    }
}
impl Rgb {
    /// Constructs a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex() {
        assert_eq!("#ff3926".parse(), Ok(Rgb::new(255, 57, 38)));
        assert_eq!("f0a".parse(), Ok(Rgb::new(0xff, 0x00, 0xaa)));
        assert_eq!(Rgb::new(12, 82, 241).to_string(), "#0c52f1");
        assert!("#12345".parse::<Rgb>().is_err());
    }
}
