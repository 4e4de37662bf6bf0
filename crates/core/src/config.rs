//! Session configuration
//!
//! Defaults come from the constants in `reveal-tetris-types`. A config is
//! checked once when a session is built; after that every dimension is
//! trusted.

use crate::error::ConfigError;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, FALL_INTERVAL_MS, MAX_BOARD_DIM, MIN_BOARD_DIM};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    pub width: u32,
    pub height: u32,
    pub fall_interval_ms: u32,
    /// When set, `Reset` also covers the reveal mask again. Off by default:
    /// the mask belongs to the attached picture, not to a single game.
    pub reset_clears_reveal: bool,
}

impl SessionConfig {
    pub fn new(width: u32, height: u32, fall_interval_ms: u32) -> Self {
        Self {
            width,
            height,
            fall_interval_ms,
            reset_clears_reveal: false,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fall_interval_ms(mut self, fall_interval_ms: u32) -> Self {
        self.fall_interval_ms = fall_interval_ms;
        self
    }

    pub fn with_reset_clears_reveal(mut self, reset_clears_reveal: bool) -> Self {
        self.reset_clears_reveal = reset_clears_reveal;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);
        let min = MIN_BOARD_DIM as u32;
        let max = MAX_BOARD_DIM as u32;
        if width < min || height < min {
            return Err(ConfigError::BoardTooSmall { width, height });
        }
        if width > max || height > max {
            return Err(ConfigError::BoardTooLarge { width, height });
        }
        if self.fall_interval_ms == 0 {
            return Err(ConfigError::ZeroFallInterval);
        }
        Ok(())
    }

    /// Board dimensions narrowed to the board's coordinate type.
    ///
    /// Only meaningful after [`SessionConfig::validate`] succeeded.
    pub(crate) fn board_size(&self) -> (u8, u8) {
        (self.width as u8, self.height as u8)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(BOARD_WIDTH as u32, BOARD_HEIGHT as u32, FALL_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SessionConfig::default();
        assert_eq!((config.width, config.height), (10, 20));
        assert_eq!(config.fall_interval_ms, 500);
        assert!(!config.reset_clears_reveal);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_small_and_large_boards() {
        assert_eq!(
            SessionConfig::default().with_size(3, 20).validate(),
            Err(ConfigError::BoardTooSmall {
                width: 3,
                height: 20
            })
        );
        assert_eq!(
            SessionConfig::default().with_size(10, 65).validate(),
            Err(ConfigError::BoardTooLarge {
                width: 10,
                height: 65
            })
        );
        assert!(SessionConfig::default().with_size(4, 64).validate().is_ok());
    }

    #[test]
    fn rejects_zero_fall_interval() {
        assert_eq!(
            SessionConfig::default().with_fall_interval_ms(0).validate(),
            Err(ConfigError::ZeroFallInterval)
        );
    }

    #[test]
    fn large_values_do_not_wrap_into_range() {
        // 256 + 10 would look like 10 after a careless u8 cast.
        let config = SessionConfig::default().with_size(266, 20);
        assert!(config.validate().is_err());
    }
}
