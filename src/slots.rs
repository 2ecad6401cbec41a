use serde::Deserialize;

/// Half-hour grid used when a configured step doesn't fit an hour evenly.
const DEFAULT_STEP: u32 = 30;

/// Opening hours for the single, implicit appointment day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BusinessHours {
    pub first_hour: u32,
    /// Inclusive: this hour still contributes all of its marks.
    pub last_hour: u32,
    pub step_minutes: u32,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self { first_hour: 9, last_hour: 17, step_minutes: DEFAULT_STEP }
    }
}

impl BusinessHours {
    fn step(&self) -> u32 {
        match self.step_minutes {
            s if s > 0 && 60 % s == 0 => s,
            _ => DEFAULT_STEP,
        }
    }

    /// Every `HH:MM` mark from `first_hour:00` through the last mark of `last_hour`.
    pub fn slots(&self) -> Vec<String> {
        let last = self.last_hour.min(23);
        if self.first_hour > last {
            return Vec::new();
        }

        let step = self.step();
        let mut slots = Vec::with_capacity(((last - self.first_hour + 1) * (60 / step)) as usize);
        for hour in self.first_hour..=last {
            for minute in (0..60).step_by(step as usize) {
                slots.push(format!("{:02}:{:02}", hour, minute));
            }
        }
        slots
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.slots().iter().any(|s| s == slot)
    }
}

/// The fixed 09:00..=17:30 half-hour list offered in the time select.
pub fn generate_time_slots() -> Vec<String> {
    BusinessHours::default().slots()
}
