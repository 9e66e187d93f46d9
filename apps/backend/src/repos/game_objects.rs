//! Game object repository: domain model, persistence trait, and the
//! SeaORM-backed implementation.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::game_objects_sea as game_objects_adapter;
use crate::adapters::game_objects_sea::{GameObjectCreate, GameObjectUpdate};
use crate::entities::game_objects::{self, GameObjectType};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Game object domain model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameObject {
    pub id: Uuid,
    pub game_object_type: GameObjectType,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub value: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Persistence operations the game object service depends on.
///
/// Each operation is a single statement against the `game_objects` table.
#[async_trait]
pub trait GameObjectRepo: Send + Sync {
    /// Insert a row and return it as stored.
    async fn save(&self, dto: GameObjectCreate) -> Result<GameObject, DomainError>;

    /// Load by id; `NotFound` when the row is absent.
    async fn find_one_or_fail(&self, id: Uuid) -> Result<GameObject, DomainError>;

    /// Random row of `game_object_type` whose id is not in `omit_ids`.
    async fn find_random_one(
        &self,
        game_object_type: GameObjectType,
        omit_ids: &[Uuid],
    ) -> Result<Option<GameObject>, DomainError>;

    /// Partial update by id. Returns rows affected; a missing id is not an error here.
    async fn update(&self, id: Uuid, dto: GameObjectUpdate) -> Result<u64, DomainError>;

    /// Delete by id. Returns rows affected.
    async fn delete(&self, id: Uuid) -> Result<u64, DomainError>;
}

// Free functions (generic over ConnectionTrait) so callers can run them inside a transaction

pub async fn create_game_object<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameObjectCreate,
) -> Result<GameObject, DomainError> {
    let row = game_objects_adapter::create_game_object(conn, dto).await?;
    Ok(GameObject::from(row))
}

pub async fn find_game_object<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Option<GameObject>, DomainError> {
    let row = game_objects_adapter::find_by_id(conn, id).await?;
    Ok(row.map(GameObject::from))
}

pub async fn require_game_object<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<GameObject, DomainError> {
    find_game_object(conn, id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::GameObject,
            format!("Game object {id} not found"),
        )
    })
}

pub async fn find_random_game_object<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_object_type: GameObjectType,
    omit_ids: &[Uuid],
) -> Result<Option<GameObject>, DomainError> {
    let row = game_objects_adapter::find_random_by_type(conn, game_object_type, omit_ids).await?;
    Ok(row.map(GameObject::from))
}

pub async fn update_game_object<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    dto: GameObjectUpdate,
) -> Result<u64, DomainError> {
    Ok(game_objects_adapter::update_game_object(conn, id, dto).await?)
}

pub async fn delete_game_object<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<u64, DomainError> {
    Ok(game_objects_adapter::delete_game_object(conn, id).await?)
}

/// SeaORM implementation of GameObjectRepo over a pooled connection.
#[derive(Debug, Clone)]
pub struct GameObjectRepoSea {
    db: DatabaseConnection,
}

impl GameObjectRepoSea {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GameObjectRepo for GameObjectRepoSea {
    async fn save(&self, dto: GameObjectCreate) -> Result<GameObject, DomainError> {
        create_game_object(&self.db, dto).await
    }

    async fn find_one_or_fail(&self, id: Uuid) -> Result<GameObject, DomainError> {
        require_game_object(&self.db, id).await
    }

    async fn find_random_one(
        &self,
        game_object_type: GameObjectType,
        omit_ids: &[Uuid],
    ) -> Result<Option<GameObject>, DomainError> {
        find_random_game_object(&self.db, game_object_type, omit_ids).await
    }

    async fn update(&self, id: Uuid, dto: GameObjectUpdate) -> Result<u64, DomainError> {
        update_game_object(&self.db, id, dto).await
    }

    async fn delete(&self, id: Uuid) -> Result<u64, DomainError> {
        delete_game_object(&self.db, id).await
    }
}

// Conversions between SeaORM models and domain models

impl From<game_objects::Model> for GameObject {
    fn from(model: game_objects::Model) -> Self {
        Self {
            id: model.id,
            game_object_type: model.game_object_type,
            name: model.name,
            description: model.description,
            image_url: model.image_url,
            value: model.value,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
