/// Tunable parameters for the pursuit bot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BotConfig {
    /// Largest multiple of a pursuer's last displacement tried when predicting
    /// its next position.
    pub inertia: u32,

    /// Pursuers at a Manhattan distance strictly below this value count as
    /// nearby when scoring cells and ranking paths.
    pub close_distance: u32,
}

impl BotConfig {
    pub const DEFAULT_INERTIA: u32 = 2;
    pub const DEFAULT_CLOSE_DISTANCE: u32 = 80;

    pub fn new() -> Self {
        Self {
            inertia: Self::DEFAULT_INERTIA,
            close_distance: Self::DEFAULT_CLOSE_DISTANCE,
        }
    }

    #[must_use]
    pub fn with_inertia(mut self, inertia: u32) -> Self {
        self.inertia = inertia;
        self
    }

    #[must_use]
    pub fn with_close_distance(mut self, close_distance: u32) -> Self {
        self.close_distance = close_distance;
        self
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new()
    }
}
