use roster_database::{Player, Profession, Race};

/// Optional predicates over players. A player matches when it satisfies every
/// predicate that is set; an empty filter matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    /// Case-sensitive substring of the name.
    pub name: Option<String>,
    /// Case-sensitive substring of the title.
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Earliest birthday, unix millis, inclusive.
    pub after: Option<i64>,
    /// Latest birthday, unix millis, inclusive.
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
}

fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

impl PlayerFilter {
    pub fn matches(&self, player: &Player) -> bool {
        self.name
            .as_deref()
            .is_none_or(|name| player.name.contains(name))
            && self
                .title
                .as_deref()
                .is_none_or(|title| player.title.contains(title))
            && self.race.is_none_or(|race| player.race == race)
            && self
                .profession
                .is_none_or(|profession| player.profession == profession)
            && self.banned.is_none_or(|banned| player.banned == banned)
            && within(player.birthday, self.after, self.before)
            && within(player.experience, self.min_experience, self.max_experience)
            && within(player.level, self.min_level, self.max_level)
    }
}

/// Keep the players matching `filter`, preserving their order.
pub fn filter_players(players: Vec<Player>, filter: &PlayerFilter) -> Vec<Player> {
    players
        .into_iter()
        .filter(|player| filter.matches(player))
        .collect()
}
