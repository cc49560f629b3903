use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// RGB color with 8-bit channels.
///
/// Colors are immutable values with exact equality, so palette bookkeeping
/// can rely on `==` to decide whether a color is still in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `#rgb` or `#rrggbb` hex notation.
    pub fn from_hex_str(input: &str) -> ConfigResult<Self> {
        let invalid = || ConfigError::InvalidColorFormat {
            input: input.to_owned(),
        };

        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded;
        let digits = match digits.len() {
            6 => digits,
            3 => {
                let mut doubled = String::with_capacity(6);
                for ch in digits.chars() {
                    doubled.push(ch);
                    doubled.push(ch);
                }
                expanded = doubled;
                &expanded
            }
            _ => return Err(invalid()),
        };

        let channel = |offset: usize| {
            u8::from_str_radix(&digits[offset..offset + 2], 16).map_err(|_| invalid())
        };

        Ok(Self {
            red: channel(0)?,
            green: channel(2)?,
            blue: channel(4)?,
        })
    }

    #[must_use]
    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}
