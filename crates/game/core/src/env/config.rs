//! Configuration oracle for exposing live mod flags to the skill.

use crate::config::CookingConfig;

/// Provides access to runtime configuration values.
pub trait ConfigOracle: Send + Sync {
    /// Whether dishes can burn while cooking.
    fn food_can_burn(&self) -> bool;

    /// Whether food heals over time rather than instantly.
    fn food_healing_takes_time(&self) -> bool;

    /// Whether nettles (and nettle tea crafting) are available.
    fn nettles_active(&self) -> bool;

    /// Whether verbose registration logging is requested.
    fn debug_mode(&self) -> bool {
        false
    }
}

impl ConfigOracle for CookingConfig {
    fn food_can_burn(&self) -> bool {
        self.food_can_burn
    }

    fn food_healing_takes_time(&self) -> bool {
        self.food_healing_takes_time
    }

    fn nettles_active(&self) -> bool {
        self.add_new_crops_and_stuff
    }

    fn debug_mode(&self) -> bool {
        self.debug_mode
    }
}
