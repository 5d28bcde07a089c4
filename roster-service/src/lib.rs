/// Derived level math.
pub mod progression;
/// Conjunctive player filters.
pub mod query;
/// Sort orders and page requests.
pub mod ranking;
/// Incoming create and update payloads.
pub mod payload;
/// Field rules for create and update.
pub mod validation;
/// The player operations exposed over HTTP.
pub mod players;

pub use payload::{PlayerDraft, PlayerPatch};
pub use query::PlayerFilter;
pub use ranking::{PageRequest, PlayerOrder};
