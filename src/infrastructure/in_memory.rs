use crate::domain::player::Player;
use crate::domain::ports::PlayerRepository;
use crate::error::{Result, SolidError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory player repository.
///
/// Uses `Arc<RwLock<BTreeMap<u32, Player>>>` so clones share the same records
/// and `find_all` comes back ordered by id.
#[derive(Default, Clone)]
pub struct InMemoryPlayerRepository {
    players: Arc<RwLock<BTreeMap<u32, Player>>>,
}

impl InMemoryPlayerRepository {
    /// Creates a new, empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn create(&self, player: Player) -> Result<Player> {
        let mut players = self.players.write().await;
        if players.contains_key(&player.id) {
            return Err(SolidError::DuplicateRecord(player.id));
        }
        players.insert(player.id, player.clone());
        Ok(player)
    }

    async fn update(&self, player: Player) -> Result<Player> {
        let mut players = self.players.write().await;
        match players.get_mut(&player.id) {
            Some(stored) => {
                *stored = player.clone();
                Ok(player)
            }
            None => Err(SolidError::RecordNotFound(player.id)),
        }
    }

    async fn find_all(&self) -> Result<Vec<Player>> {
        let players = self.players.read().await;
        Ok(players.values().cloned().collect())
    }

    async fn find_by_id(&self, id: u32) -> Result<Option<Player>> {
        let players = self.players.read().await;
        Ok(players.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryPlayerRepository::new();
        let player = Player::new(1).with_attribute("name", "ana");

        let created = repo.create(player.clone()).await.unwrap();
        assert_eq!(created, player);
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(player));
        assert!(repo.find_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_rejected() {
        let repo = InMemoryPlayerRepository::new();
        repo.create(Player::new(1)).await.unwrap();

        let result = repo.create(Player::new(1).with_attribute("name", "bo")).await;
        assert!(matches!(result, Err(SolidError::DuplicateRecord(1))));
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(Player::new(1)));
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let repo = InMemoryPlayerRepository::new();
        repo.create(Player::new(1).with_attribute("level", 1))
            .await
            .unwrap();

        let updated = Player::new(1).with_attribute("level", 2);
        assert_eq!(repo.update(updated.clone()).await.unwrap(), updated);
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_record() {
        let repo = InMemoryPlayerRepository::new();
        let result = repo.update(Player::new(9)).await;
        assert!(matches!(result, Err(SolidError::RecordNotFound(9))));
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_id() {
        let repo = InMemoryPlayerRepository::new();
        for id in [3, 1, 2] {
            repo.create(Player::new(id)).await.unwrap();
        }

        let ids: Vec<u32> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let repo = InMemoryPlayerRepository::new();
        let other = repo.clone();
        repo.create(Player::new(5)).await.unwrap();
        assert!(other.find_by_id(5).await.unwrap().is_some());
    }
}
