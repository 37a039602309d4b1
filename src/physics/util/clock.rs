use std::fmt::Debug;

use bevy::core::FrameCount;

/// Counts ticks and remembers the last one that moved anything
#[derive(Default, Clone, Copy)]
pub struct Clock {
    frame: FrameCount,
    last_change: Option<u32>,
}

impl Debug for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clock")
            .field("frame", &self.frame.0)
            .field("last_change", &self.last_change)
            .finish()
    }
}

impl Clock {
    pub fn get_current_frame(&self) -> u32 {
        self.frame.0
    }
    pub fn get_last_change(&self) -> Option<u32> {
        self.last_change
    }
    /// Call once per tick with whether the tick changed anything
    pub fn update(&mut self, changed: bool) {
        self.frame.0 = self.frame.0.wrapping_add(1);
        if changed {
            self.last_change = Some(self.frame.0);
        }
    }
    /// True once a tick has run and the latest one moved nothing
    pub fn is_settled(&self) -> bool {
        self.frame.0 != 0 && self.last_change != Some(self.frame.0)
    }
}
