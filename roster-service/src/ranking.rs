use roster_core::{Result, ServiceError};
use roster_database::Player;
use roster_utils::pagination::page_slice;
use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Sort key for player listings. Always ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Experience,
    Birthday,
}

/// Stable ascending sort; players with equal keys keep their relative order.
pub fn sort_players(players: &mut [Player], order: PlayerOrder) {
    match order {
        PlayerOrder::Id => players.sort_by_key(|player| player.id),
        PlayerOrder::Name => players.sort_by(|a, b| a.name.cmp(&b.name)),
        PlayerOrder::Experience => players.sort_by_key(|player| player.experience),
        PlayerOrder::Birthday => players.sort_by_key(|player| player.birthday),
    }
}

/// A zero-based page of a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub number: usize,
    pub size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Build a page request from raw query values, falling back to page 0 of
    /// `DEFAULT_PAGE_SIZE`. Negative numbers and non-positive sizes are invalid input.
    pub fn new(number: Option<i64>, size: Option<i64>) -> Result<Self> {
        let number = match number {
            None => 0,
            Some(raw) => usize::try_from(raw)
                .map_err(|_| ServiceError::invalid("pageNumber must not be negative"))?,
        };
        let size = match size {
            None => DEFAULT_PAGE_SIZE,
            Some(raw) => usize::try_from(raw)
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| ServiceError::invalid("pageSize must be positive"))?,
        };

        Ok(Self { number, size })
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.number, self.size)
    }
}
