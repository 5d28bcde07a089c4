//! Level progression derived from experience.
//!
//! Reaching level `n` takes `50 * n * (n + 1)` experience, so the level for a
//! given experience is the largest `n` satisfying that bound:
//! `floor((sqrt(2500 + 200 * experience) - 50) / 100)`.

/// Level and distance to the next one, both derived from experience alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub level: i32,
    pub until_next_level: i32,
}

impl Progress {
    pub fn from_experience(experience: i32) -> Self {
        let level = level_for_experience(experience);
        Self {
            level,
            until_next_level: until_next_level(level, experience),
        }
    }
}

/// Negative experience is treated as zero.
pub fn level_for_experience(experience: i32) -> i32 {
    let experience = u64::try_from(experience).unwrap_or(0);
    let root = (2_500 + 200 * experience).isqrt();
    // root >= 50 and experience <= i32::MAX keeps this well inside i32.
    ((root - 50) / 100) as i32
}

pub fn until_next_level(level: i32, experience: i32) -> i32 {
    let level = i64::from(level);
    let remaining = 50 * (level + 1) * (level + 2) - i64::from(experience);
    i32::try_from(remaining).unwrap_or(i32::MAX)
}
