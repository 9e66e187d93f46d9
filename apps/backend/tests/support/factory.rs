#![allow(dead_code)]

use backend_test_support::unique_helpers::unique_name_within;
use game_objects::adapters::game_objects_sea::{self, GameObjectCreate};
use game_objects::services::game_objects::validation::NAME_MAX_CHARS;
use game_objects::{GameObject, GameObjectType};
use sea_orm::ConnectionTrait;

/// Insert `count` game objects of one type straight through the adapter.
pub async fn seed_pool<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_object_type: GameObjectType,
    count: usize,
) -> Result<Vec<GameObject>, sea_orm::DbErr> {
    let mut seeded = Vec::with_capacity(count);
    for i in 0..count {
        let dto = GameObjectCreate::new(
            game_object_type,
            unique_name_within(&format!("{game_object_type:?}-{i}"), NAME_MAX_CHARS),
        )
        .with_value(i as i32);
        let row = game_objects_sea::create_game_object(conn, dto).await?;
        seeded.push(GameObject::from(row));
    }
    Ok(seeded)
}
