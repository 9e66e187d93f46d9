//! SeaORM adapter for the game object repository.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, EntityTrait, Order,
    QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::entities::game_objects::{self, GameObjectType};

pub mod dto;

pub use dto::{GameObjectCreate, GameObjectUpdate};

/// Stands in for an empty omit list so `id NOT IN (...)` stays well-formed.
/// v4 generation never yields the nil UUID, so it matches no row.
pub const OMIT_SENTINEL: Uuid = Uuid::nil();

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn create_game_object<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameObjectCreate,
) -> Result<game_objects::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let active = game_objects::ActiveModel {
        id: Set(Uuid::new_v4()),
        game_object_type: Set(dto.game_object_type),
        name: Set(dto.name),
        description: Set(dto.description),
        image_url: Set(dto.image_url),
        value: Set(dto.value),
        created_at: Set(now),
        updated_at: Set(now),
    };

    active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Option<game_objects::Model>, sea_orm::DbErr> {
    game_objects::Entity::find_by_id(id).one(conn).await
}

/// Pick one row of the given type at random, skipping `omit_ids`.
pub async fn find_random_by_type<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_object_type: GameObjectType,
    omit_ids: &[Uuid],
) -> Result<Option<game_objects::Model>, sea_orm::DbErr> {
    let omit: Vec<Uuid> = if omit_ids.is_empty() {
        vec![OMIT_SENTINEL]
    } else {
        omit_ids.to_vec()
    };

    game_objects::Entity::find()
        .filter(game_objects::Column::GameObjectType.eq(game_object_type))
        .filter(game_objects::Column::Id.is_not_in(omit))
        .order_by(
            Expr::cust(random_fn(conn.get_database_backend())),
            Order::Asc,
        )
        .one(conn)
        .await
}

fn random_fn(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::MySql => "RAND()",
        _ => "RANDOM()",
    }
}

/// Apply a partial update by id. Returns the number of rows matched.
pub async fn update_game_object<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    dto: GameObjectUpdate,
) -> Result<u64, sea_orm::DbErr> {
    let mut active = game_objects::ActiveModel {
        updated_at: Set(OffsetDateTime::now_utc()),
        ..Default::default()
    };

    if let Some(game_object_type) = dto.game_object_type {
        active.game_object_type = Set(game_object_type);
    }
    if let Some(name) = dto.name {
        active.name = Set(name);
    }
    if let Some(description) = dto.description {
        active.description = Set(description);
    }
    if let Some(image_url) = dto.image_url {
        active.image_url = Set(image_url);
    }
    if let Some(value) = dto.value {
        active.value = Set(value);
    }

    let result = game_objects::Entity::update_many()
        .set(active)
        .filter(game_objects::Column::Id.eq(id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

pub async fn delete_game_object<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<u64, sea_orm::DbErr> {
    let result = game_objects::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}
