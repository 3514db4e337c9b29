use crate::domain::player::Player;
use crate::domain::ports::{PlayerRepositoryBox, PlayerRepositoryFactory};
use crate::error::{Result, SolidError};
use tracing::debug;

/// Orchestrates player operations over an injected repository.
///
/// The service never names a concrete repository; every call is passed
/// straight through and the repository's answer is returned unchanged.
pub struct PlayerService {
    repository: PlayerRepositoryBox,
}

impl PlayerService {
    /// Creates a new `PlayerService` backed by `repository`.
    pub fn new(repository: PlayerRepositoryBox) -> Self {
        Self { repository }
    }

    pub fn builder() -> PlayerServiceBuilder {
        PlayerServiceBuilder::default()
    }

    pub async fn create(&self, player: Player) -> Result<Player> {
        debug!(id = player.id, "creating player");
        self.repository.create(player).await
    }

    pub async fn update(&self, player: Player) -> Result<Player> {
        debug!(id = player.id, "updating player");
        self.repository.update(player).await
    }

    pub async fn find_all(&self) -> Result<Vec<Player>> {
        self.repository.find_all().await
    }

    pub async fn find_by_id(&self, id: u32) -> Result<Option<Player>> {
        self.repository.find_by_id(id).await
    }
}

/// Builds a `PlayerService`, failing if no repository was supplied.
#[derive(Default)]
pub struct PlayerServiceBuilder {
    repository: Option<PlayerRepositoryBox>,
}

impl PlayerServiceBuilder {
    pub fn repository(mut self, repository: PlayerRepositoryBox) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn repository_factory(self, factory: &PlayerRepositoryFactory) -> Self {
        self.repository(factory())
    }

    pub fn build(self) -> Result<PlayerService> {
        self.repository
            .map(PlayerService::new)
            .ok_or(SolidError::MissingDependency("player repository"))
    }
}
