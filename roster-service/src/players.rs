use roster_core::{Result, ServiceError};
use roster_database::{Player, PlayerStore};
use roster_utils::pagination::page_count;
use roster_utils::parse::parse_player_id;
use tracing::{debug, info, warn};

use crate::payload::{PlayerDraft, PlayerPatch};
use crate::query::{PlayerFilter, filter_players};
use crate::ranking::{PageRequest, PlayerOrder, sort_players};
use crate::validation::{apply_patch, validate_new_player};

fn storage_failure(operation: &'static str) -> impl FnOnce(anyhow::Error) -> ServiceError {
    move |err| {
        warn!(?err, operation, "player storage call failed");
        ServiceError::Storage(err)
    }
}

fn parse_id(raw_id: &str) -> Result<i64> {
    parse_player_id(raw_id)
        .ok_or_else(|| ServiceError::invalid(format!("`{raw_id}` is not a valid player id")))
}

async fn load(store: &dyn PlayerStore, id: i64) -> Result<Player> {
    if !store.exists(id).await.map_err(storage_failure("exists"))? {
        return Err(ServiceError::NotFound(id));
    }

    store
        .find_by_id(id)
        .await
        .map_err(storage_failure("find_by_id"))?
        .ok_or(ServiceError::NotFound(id))
}

async fn matching(store: &dyn PlayerStore, filter: &PlayerFilter) -> Result<Vec<Player>> {
    let players = store.list_all().await.map_err(storage_failure("list_all"))?;
    Ok(filter_players(players, filter))
}

/// One page of the players matching `filter`, sorted by `order`.
pub async fn list_players(
    store: &dyn PlayerStore,
    filter: &PlayerFilter,
    order: PlayerOrder,
    page: PageRequest,
) -> Result<Vec<Player>> {
    let mut players = matching(store, filter).await?;
    sort_players(&mut players, order);

    let page_players = page.slice(&players).to_vec();
    debug!(
        matched = players.len(),
        pages = page_count(players.len(), page.size),
        returned = page_players.len(),
        page = page.number,
        page_size = page.size,
        ?order,
        "listed players"
    );
    Ok(page_players)
}

/// Number of players matching `filter`, ignoring pagination.
pub async fn count_players(store: &dyn PlayerStore, filter: &PlayerFilter) -> Result<usize> {
    let count = matching(store, filter).await?.len();
    debug!(count, "counted players");
    Ok(count)
}

pub async fn create_player(store: &dyn PlayerStore, draft: PlayerDraft) -> Result<Player> {
    let new_player = validate_new_player(draft)?;
    let player = store
        .insert(&new_player)
        .await
        .map_err(storage_failure("insert"))?;

    info!(player_id = player.id, level = player.level, "player created");
    Ok(player)
}

pub async fn get_player(store: &dyn PlayerStore, raw_id: &str) -> Result<Player> {
    let id = parse_id(raw_id)?;
    let player = load(store, id).await?;
    debug!(player_id = id, "player fetched");
    Ok(player)
}

/// Apply a partial update. A patch carrying no fields is a plain fetch.
pub async fn update_player(
    store: &dyn PlayerStore,
    raw_id: &str,
    patch: PlayerPatch,
) -> Result<Player> {
    if patch.is_empty() {
        return get_player(store, raw_id).await;
    }

    let id = parse_id(raw_id)?;
    let existing = load(store, id).await?;
    let updated = apply_patch(existing, patch)?;
    let player = store
        .update(&updated)
        .await
        .map_err(storage_failure("update"))?
        .ok_or(ServiceError::NotFound(id))?;

    info!(player_id = id, level = player.level, "player updated");
    Ok(player)
}

pub async fn delete_player(store: &dyn PlayerStore, raw_id: &str) -> Result<()> {
    let id = parse_id(raw_id)?;
    load(store, id).await?;

    if !store.delete(id).await.map_err(storage_failure("delete"))? {
        return Err(ServiceError::NotFound(id));
    }

    info!(player_id = id, "player deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use roster_core::ServiceError;
    use roster_database::{MemoryStore, Player, PlayerStore, Profession, Race};

    use super::{
        count_players, create_player, delete_player, get_player, list_players, update_player,
    };
    use crate::payload::{PlayerDraft, PlayerPatch};
    use crate::progression::Progress;
    use crate::query::PlayerFilter;
    use crate::ranking::{PageRequest, PlayerOrder};

    const JAN_1_2020: i64 = 1_577_836_800_000;
    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    fn draft(name: &str, experience: i32, birthday: i64) -> PlayerDraft {
        PlayerDraft {
            name: Some(name.to_owned()),
            title: Some("Bossman".to_owned()),
            race: Some(Race::Human),
            profession: Some(Profession::Warrior),
            birthday: Some(birthday),
            banned: None,
            experience: Some(experience),
        }
    }

    fn assert_progress_consistent(player: &Player) {
        let expected = Progress::from_experience(player.experience);
        assert_eq!(player.level, expected.level);
        assert_eq!(player.until_next_level, expected.until_next_level);
        let level = player.level;
        assert_eq!(
            player.until_next_level,
            50 * (level + 1) * (level + 2) - player.experience
        );
    }

    async fn seeded(store: &MemoryStore) -> Vec<Player> {
        let mut created = Vec::new();
        for (offset, (name, experience)) in [
            ("Gamma", 700),
            ("Alpha", 50),
            ("Delta", 700),
            ("Beta", 12_000),
            ("Eta", 0),
            ("Zeta", 3_100),
            ("Epsilon", 90),
        ]
        .into_iter()
        .enumerate()
        {
            let birthday = JAN_1_2020 - i64::try_from(offset).expect("small offset") * DAY_MS;
            created.push(
                create_player(store, draft(name, experience, birthday))
                    .await
                    .expect("seed player"),
            );
        }
        created
    }

    #[tokio::test]
    async fn create_assigns_id_and_derived_fields() {
        let store = MemoryStore::new();
        let player = create_player(&store, draft("Vasya", 5_000, JAN_1_2020))
            .await
            .expect("create");

        assert!(player.id > 0);
        assert_eq!(player.level, 9);
        assert_eq!(player.until_next_level, 500);
        assert_progress_consistent(&player);
        assert_eq!(
            store.find_by_id(player.id).await.expect("find"),
            Some(player)
        );
    }

    #[tokio::test]
    async fn invalid_create_persists_nothing() {
        let store = MemoryStore::new();
        let result = create_player(&store, draft("Vasya", -1, JAN_1_2020)).await;

        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
        assert!(store.list_all().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn get_distinguishes_malformed_and_missing_ids() {
        let store = MemoryStore::new();
        let created = create_player(&store, draft("Vasya", 10, JAN_1_2020))
            .await
            .expect("create");

        let first = get_player(&store, &created.id.to_string()).await.expect("get");
        let second = get_player(&store, &created.id.to_string()).await.expect("get again");
        assert_eq!(first, second);

        for raw in ["abc", "0", "-1", ""] {
            assert!(
                matches!(get_player(&store, raw).await, Err(ServiceError::InvalidInput(_))),
                "id {raw:?}"
            );
        }
        assert!(matches!(
            get_player(&store, "999999").await,
            Err(ServiceError::NotFound(999_999))
        ));
    }

    #[tokio::test]
    async fn banned_only_update_leaves_other_fields() {
        let store = MemoryStore::new();
        let created = create_player(&store, draft("Vasya", 5_000, JAN_1_2020))
            .await
            .expect("create");

        let patch = PlayerPatch {
            banned: Some(true),
            ..PlayerPatch::default()
        };
        let updated = update_player(&store, &created.id.to_string(), patch)
            .await
            .expect("update");

        assert!(updated.banned);
        assert_eq!(Player { banned: false, ..updated.clone() }, created);
        assert_eq!(get_player(&store, &created.id.to_string()).await.expect("get"), updated);
    }

    #[tokio::test]
    async fn experience_update_recomputes_level() {
        let store = MemoryStore::new();
        let created = create_player(&store, draft("Vasya", 5_000, JAN_1_2020))
            .await
            .expect("create");

        let patch = PlayerPatch {
            experience: Some(1_000),
            name: Some("Petya".to_owned()),
            ..PlayerPatch::default()
        };
        let updated = update_player(&store, &created.id.to_string(), patch)
            .await
            .expect("update");

        assert_eq!(updated.name, "Petya");
        assert_eq!(updated.level, 4);
        assert_progress_consistent(&updated);
    }

    #[tokio::test]
    async fn rejected_update_leaves_store_untouched() {
        let store = MemoryStore::new();
        let created = create_player(&store, draft("Vasya", 5_000, JAN_1_2020))
            .await
            .expect("create");

        let patch = PlayerPatch {
            title: Some("Renamed".to_owned()),
            birthday: Some(0),
            ..PlayerPatch::default()
        };
        let result = update_player(&store, &created.id.to_string(), patch).await;
        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
        assert_eq!(
            store.find_by_id(created.id).await.expect("find"),
            Some(created)
        );
    }

    #[tokio::test]
    async fn update_reports_missing_and_malformed_ids() {
        let store = MemoryStore::new();
        let patch = PlayerPatch {
            banned: Some(true),
            ..PlayerPatch::default()
        };

        assert!(matches!(
            update_player(&store, "12", patch.clone()).await,
            Err(ServiceError::NotFound(12))
        ));
        assert!(matches!(
            update_player(&store, "x12", patch).await,
            Err(ServiceError::InvalidInput(_))
        ));
        assert!(matches!(
            update_player(&store, "12", PlayerPatch::default()).await,
            Err(ServiceError::NotFound(12))
        ));
    }

    #[tokio::test]
    async fn empty_update_is_a_fetch() {
        let store = MemoryStore::new();
        let created = create_player(&store, draft("Vasya", 5_000, JAN_1_2020))
            .await
            .expect("create");

        let fetched = update_player(&store, &created.id.to_string(), PlayerPatch::default())
            .await
            .expect("fetch");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn delete_removes_once() {
        let store = MemoryStore::new();
        let created = create_player(&store, draft("Vasya", 5_000, JAN_1_2020))
            .await
            .expect("create");
        let raw_id = created.id.to_string();

        delete_player(&store, &raw_id).await.expect("delete");
        assert!(!store.exists(created.id).await.expect("exists"));
        assert!(matches!(
            delete_player(&store, &raw_id).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            delete_player(&store, "-5").await,
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn list_sorts_then_pages() {
        let store = MemoryStore::new();
        seeded(&store).await;
        let all = PlayerFilter::default();

        let page = list_players(
            &store,
            &all,
            PlayerOrder::Name,
            PageRequest { number: 1, size: 3 },
        )
        .await
        .expect("list");
        let names: Vec<&str> = page.iter().map(|player| player.name.as_str()).collect();
        assert_eq!(names, vec!["Epsilon", "Eta", "Gamma"]);

        let last = list_players(
            &store,
            &all,
            PlayerOrder::Name,
            PageRequest { number: 2, size: 3 },
        )
        .await
        .expect("list");
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].name, "Zeta");
    }

    #[tokio::test]
    async fn pages_reconstruct_the_sorted_listing() {
        let store = MemoryStore::new();
        seeded(&store).await;
        let all = PlayerFilter::default();

        let mut rebuilt = Vec::new();
        for number in 0.. {
            let page = list_players(
                &store,
                &all,
                PlayerOrder::Experience,
                PageRequest { number, size: 2 },
            )
            .await
            .expect("list");
            if page.is_empty() {
                break;
            }
            rebuilt.extend(page);
        }

        let experience: Vec<i32> = rebuilt.iter().map(|player| player.experience).collect();
        assert_eq!(experience, vec![0, 50, 90, 700, 700, 3_100, 12_000]);
        let tied: Vec<&str> = rebuilt[3..5].iter().map(|player| player.name.as_str()).collect();
        assert_eq!(tied, vec!["Gamma", "Delta"]);
    }

    #[tokio::test]
    async fn count_ignores_pagination() {
        let store = MemoryStore::new();
        seeded(&store).await;

        let filter = PlayerFilter {
            min_experience: Some(90),
            ..PlayerFilter::default()
        };
        assert_eq!(count_players(&store, &filter).await.expect("count"), 5);
        assert_eq!(
            count_players(&store, &PlayerFilter::default())
                .await
                .expect("count"),
            7
        );

        let newest_two = PlayerFilter {
            after: Some(JAN_1_2020 - DAY_MS),
            ..PlayerFilter::default()
        };
        assert_eq!(count_players(&store, &newest_two).await.expect("count"), 2);
    }
}
