use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

/// A stored player. `level` and `until_next_level` are derived from
/// `experience` by the service layer before every write.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    /// Unix timestamp in milliseconds.
    pub birthday: i64,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
}

/// A player that has not been assigned an identifier yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: i64,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
}

impl NewPlayer {
    /// Attach a storage-assigned identifier.
    pub fn with_id(self, id: i64) -> Player {
        Player {
            id,
            name: self.name,
            title: self.title,
            race: self.race,
            profession: self.profession,
            birthday: self.birthday,
            banned: self.banned,
            experience: self.experience,
            level: self.level,
            until_next_level: self.until_next_level,
        }
    }
}
