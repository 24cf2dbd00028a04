use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lado máximo que admite una entrada del directorio ICO
pub const MAX_ICON_SIDE: u32 = 256;

/// Dimensión de un frame dentro del .ico
/// En JSON se serializa como par `[ancho, alto]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct IconSize {
    pub width: u32,
    pub height: u32,
}

impl IconSize {
    pub const fn square(side: u32) -> Self {
        Self { width: side, height: side }
    }

    /// Verificar que el tamaño entre en una entrada ICO (1..=256 por lado)
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_ICON_SIDE {
                return Err(format!(
                    "invalid icon size {}: {} must be between 1 and {}",
                    self, name, MAX_ICON_SIDE
                ));
            }
        }
        Ok(())
    }
}

/// Tamaños por defecto: 16x16, 32x32, 48x48
pub fn default_sizes() -> Vec<IconSize> {
    vec![IconSize::square(16), IconSize::square(32), IconSize::square(48)]
}

/// Lista "WxH" separada por comas para mensajes de consola
pub fn join_sizes(sizes: &[IconSize]) -> String {
    sizes
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for IconSize {
    type Err = String;

    /// Acepta "32x32" o solo "32" (cuadrado)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| format!("invalid icon size '{}'", s))
        };

        match s.split_once(|c: char| c == 'x' || c == 'X') {
            Some((w, h)) => Ok(Self { width: parse(w)?, height: parse(h)? }),
            None => Ok(Self::square(parse(s)?)),
        }
    }
}

impl From<(u32, u32)> for IconSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl From<IconSize> for (u32, u32) {
    fn from(size: IconSize) -> Self {
        (size.width, size.height)
    }
}
