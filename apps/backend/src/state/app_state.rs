use sea_orm::DatabaseConnection;

use crate::repos::game_objects::GameObjectRepoSea;
use crate::services::game_objects::GameObjectService;

/// Shared application state: the database pool and the services built on it.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    game_objects: GameObjectService<GameObjectRepoSea>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let game_objects = GameObjectService::new(GameObjectRepoSea::new(db.clone()));
        Self { db, game_objects }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn game_objects(&self) -> &GameObjectService<GameObjectRepoSea> {
        &self.game_objects
    }
}
