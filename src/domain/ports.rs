use super::player::Player;
use crate::error::Result;
use async_trait::async_trait;

/// Storage capability consumed by `PlayerService`.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn create(&self, player: Player) -> Result<Player>;
    async fn update(&self, player: Player) -> Result<Player>;
    async fn find_all(&self) -> Result<Vec<Player>>;
    async fn find_by_id(&self, id: u32) -> Result<Option<Player>>;
}

pub type PlayerRepositoryBox = Box<dyn PlayerRepository>;
pub type PlayerRepositoryFactory = Box<dyn Fn() -> PlayerRepositoryBox + Send + Sync>;
