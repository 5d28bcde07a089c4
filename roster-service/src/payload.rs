use roster_database::{Profession, Race};
use serde::Deserialize;

/// Body of a create request. Every field is optional here so that a missing
/// field surfaces as a validation failure instead of a decoding error.
///
/// `id`, `level` and `untilNextLevel` are not part of the payload; clients
/// sending them have them ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDraft {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Option<i64>,
    pub banned: Option<bool>,
    pub experience: Option<i32>,
}

/// Body of a partial update. `None` leaves the stored value untouched; there
/// is no way to clear a field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Option<i64>,
    pub banned: Option<bool>,
    pub experience: Option<i32>,
}

impl PlayerPatch {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.race.is_none()
            && self.profession.is_none()
            && self.birthday.is_none()
            && self.banned.is_none()
            && self.experience.is_none()
    }
}
