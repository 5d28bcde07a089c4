use roster_core::{Result, ServiceError};
use roster_database::{NewPlayer, Player};

use crate::payload::{PlayerDraft, PlayerPatch};
use crate::progression::Progress;

pub const MAX_NAME_LEN: usize = 12;
pub const MAX_TITLE_LEN: usize = 30;
pub const MAX_EXPERIENCE: i32 = 10_000_000;

/// Range of accepted birthdays, in unix milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BirthdayWindow {
    pub start: i64,
    pub end: i64,
    pub inclusive: bool,
}

impl BirthdayWindow {
    pub const fn inclusive(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            inclusive: true,
        }
    }

    pub const fn exclusive(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            inclusive: false,
        }
    }

    pub fn contains(&self, birthday: i64) -> bool {
        if self.inclusive {
            (self.start..=self.end).contains(&birthday)
        } else {
            self.start < birthday && birthday < self.end
        }
    }
}

/// New players: 2000-01-01T00:00Z through 3000-01-01T00:00Z, both ends allowed.
pub const CREATE_BIRTHDAY_WINDOW: BirthdayWindow =
    BirthdayWindow::inclusive(946_684_800_000, 32_503_680_000_000);

/// Updates: strictly between 1999-12-31T00:00Z and 2999-12-31T00:00Z.
pub const UPDATE_BIRTHDAY_WINDOW: BirthdayWindow =
    BirthdayWindow::exclusive(946_598_400_000, 32_503_593_600_000);

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ServiceError::invalid("name must not be blank"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ServiceError::invalid(format!(
            "name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

fn check_title(title: &str) -> Result<()> {
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ServiceError::invalid(format!(
            "title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

fn check_experience(experience: i32) -> Result<()> {
    if !(0..=MAX_EXPERIENCE).contains(&experience) {
        return Err(ServiceError::invalid(format!(
            "experience must be between 0 and {MAX_EXPERIENCE}"
        )));
    }
    Ok(())
}

fn check_birthday(birthday: i64, window: BirthdayWindow) -> Result<()> {
    if !window.contains(birthday) {
        return Err(ServiceError::invalid("birthday is outside the accepted range"));
    }
    Ok(())
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| ServiceError::invalid(format!("{field} is required")))
}

/// Check a create payload and derive its level fields.
pub fn validate_new_player(draft: PlayerDraft) -> Result<NewPlayer> {
    let name = required(draft.name, "name")?;
    check_name(&name)?;
    let title = required(draft.title, "title")?;
    check_title(&title)?;
    let race = required(draft.race, "race")?;
    let profession = required(draft.profession, "profession")?;
    let birthday = required(draft.birthday, "birthday")?;
    check_birthday(birthday, CREATE_BIRTHDAY_WINDOW)?;
    let experience = required(draft.experience, "experience")?;
    check_experience(experience)?;

    let progress = Progress::from_experience(experience);
    Ok(NewPlayer {
        name,
        title,
        race,
        profession,
        birthday,
        banned: draft.banned.unwrap_or(false),
        experience,
        level: progress.level,
        until_next_level: progress.until_next_level,
    })
}

/// Merge `patch` into `player`. Every supplied field is checked before any is
/// applied, so a rejected patch leaves `player` as it was.
pub fn apply_patch(mut player: Player, patch: PlayerPatch) -> Result<Player> {
    if let Some(name) = &patch.name {
        check_name(name)?;
    }
    if let Some(title) = &patch.title {
        check_title(title)?;
    }
    if let Some(experience) = patch.experience {
        check_experience(experience)?;
    }
    if let Some(birthday) = patch.birthday {
        check_birthday(birthday, UPDATE_BIRTHDAY_WINDOW)?;
    }

    if let Some(name) = patch.name {
        player.name = name;
    }
    if let Some(title) = patch.title {
        player.title = title;
    }
    if let Some(race) = patch.race {
        player.race = race;
    }
    if let Some(profession) = patch.profession {
        player.profession = profession;
    }
    if let Some(banned) = patch.banned {
        player.banned = banned;
    }
    if let Some(experience) = patch.experience {
        player.experience = experience;
    }
    if let Some(birthday) = patch.birthday {
        player.birthday = birthday;
    }

    let progress = Progress::from_experience(player.experience);
    player.level = progress.level;
    player.until_next_level = progress.until_next_level;
    Ok(player)
}
