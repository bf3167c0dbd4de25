use swipe_foundation::ViewConfiguration;

/// Declarative enable flags for one panel.
///
/// `swipe_enabled` sets both directions. The specific flags override it, so
/// `swipe_enabled: Some(false)` with `swipe_left_enabled: Some(true)` leaves
/// only the left-to-right swipe on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwipeAttributes {
    pub swipe_enabled: Option<bool>,
    pub swipe_left_enabled: Option<bool>,
    pub swipe_right_enabled: Option<bool>,
}

impl SwipeAttributes {
    /// Resolves to `(left_swipe_enabled, right_swipe_enabled)`.
    pub fn resolve(&self) -> (bool, bool) {
        let general = self.swipe_enabled.unwrap_or(true);
        (
            self.swipe_left_enabled.unwrap_or(general),
            self.swipe_right_enabled.unwrap_or(general),
        )
    }
}

/// Construction-time settings for a [`crate::SwipeLayout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    pub density: f32,
    pub attributes: SwipeAttributes,
    /// Fling threshold in px/s. `None` derives it from the density.
    pub velocity_threshold: Option<f32>,
}

impl SwipeConfig {
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_attributes(mut self, attributes: SwipeAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_velocity_threshold(mut self, px_per_second: f32) -> Self {
        self.velocity_threshold = Some(px_per_second);
        self
    }

    pub fn view_configuration(&self) -> ViewConfiguration {
        ViewConfiguration::new(self.density)
    }

    pub fn resolved_velocity_threshold(&self) -> f32 {
        match self.velocity_threshold {
            Some(threshold) if threshold.is_finite() && threshold >= 0.0 => threshold,
            Some(threshold) => {
                log::warn!("ignoring invalid velocity threshold {threshold}");
                self.view_configuration().swipe_velocity_threshold()
            }
            None => self.view_configuration().swipe_velocity_threshold(),
        }
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            attributes: SwipeAttributes::default(),
            velocity_threshold: None,
        }
    }
}
