/// Player-facing mod configuration and tunable switches.
///
/// These are the live flags read by skill construction (`food_healing_takes_time`
/// picks the profession text variant) and by the level-up queries
/// (`food_can_burn`, nettle availability).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CookingConfig {
    /// Cooking can fail and burn the dish; skill levels reduce the chance.
    pub food_can_burn: bool,
    /// Food restores health gradually instead of instantly.
    pub food_healing_takes_time: bool,
    /// Enables the extra crops (nettles among them) added by the mod.
    pub add_new_crops_and_stuff: bool,
    /// Verbose registration logging.
    pub debug_mode: bool,
}

impl CookingConfig {
    // ===== identity =====
    pub const ASSET_PREFIX: &'static str = "blueberry.LoveOfCooking.";

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FOOD_CAN_BURN: bool = true;
    pub const DEFAULT_FOOD_HEALING_TAKES_TIME: bool = true;
    pub const DEFAULT_ADD_NEW_CROPS_AND_STUFF: bool = true;

    pub fn new() -> Self {
        Self {
            food_can_burn: Self::DEFAULT_FOOD_CAN_BURN,
            food_healing_takes_time: Self::DEFAULT_FOOD_HEALING_TAKES_TIME,
            add_new_crops_and_stuff: Self::DEFAULT_ADD_NEW_CROPS_AND_STUFF,
            debug_mode: false,
        }
    }

    pub fn with_food_can_burn(mut self, enabled: bool) -> Self {
        self.food_can_burn = enabled;
        self
    }

    pub fn with_food_healing_takes_time(mut self, enabled: bool) -> Self {
        self.food_healing_takes_time = enabled;
        self
    }

    pub fn with_new_crops(mut self, enabled: bool) -> Self {
        self.add_new_crops_and_stuff = enabled;
        self
    }

    pub fn with_debug_mode(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }
}

impl Default for CookingConfig {
    fn default() -> Self {
        Self::new()
    }
}
