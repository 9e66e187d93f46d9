//! Game object domain service.

use tracing::{debug, info};
use uuid::Uuid;

use crate::entities::game_objects::GameObjectType;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::game_objects::{GameObject, GameObjectRepo};

pub mod inputs;
pub mod validation;

pub use inputs::{CreateGameObjectInput, UpdateGameObjectInput};

/// Game object domain service.
#[derive(Debug, Clone)]
pub struct GameObjectService<R: GameObjectRepo> {
    repo: R,
}

impl<R: GameObjectRepo> GameObjectService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate and persist a new game object.
    ///
    /// Fails with `DomainError::Validation` listing every violated rule,
    /// `;`-separated, before anything is written.
    pub async fn create(&self, input: CreateGameObjectInput) -> Result<GameObject, DomainError> {
        let violations = validation::validate_create(&input);
        if !violations.is_empty() {
            debug!(
                violations = violations.len(),
                "Rejected game object input"
            );
            return Err(DomainError::validation(validation::join_violations(
                &violations,
            )));
        }

        let created = self.repo.save(input.into()).await?;
        info!(
            game_object_id = %created.id,
            game_object_type = ?created.game_object_type,
            "Game object created"
        );
        Ok(created)
    }

    /// Load a game object; a missing id is `DomainError::NotFound`.
    pub async fn find_one(&self, id: Uuid) -> Result<GameObject, DomainError> {
        self.repo.find_one_or_fail(id).await
    }

    /// Pick a random game object of the given type, skipping `omit_ids`.
    ///
    /// Returns `Ok(None)` when no candidate remains.
    pub async fn find_randomly_one(
        &self,
        game_object_type: GameObjectType,
        omit_ids: Option<&[Uuid]>,
    ) -> Result<Option<GameObject>, DomainError> {
        let omit_ids = omit_ids.unwrap_or_default();
        let picked = self
            .repo
            .find_random_one(game_object_type, omit_ids)
            .await?;
        debug!(
            game_object_type = ?game_object_type,
            omitted = omit_ids.len(),
            found = picked.is_some(),
            "Random game object lookup"
        );
        Ok(picked)
    }

    /// Apply a partial update and return the reloaded object.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateGameObjectInput,
    ) -> Result<GameObject, DomainError> {
        let affected = self.repo.update(id, input.into()).await?;
        if affected == 0 {
            return Err(DomainError::not_found(
                NotFoundKind::GameObject,
                format!("Game object {id} not found"),
            ));
        }
        self.find_one(id).await
    }

    /// Delete a game object. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let affected = self.repo.delete(id).await?;
        if affected > 0 {
            info!(game_object_id = %id, "Game object deleted");
        }
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use time::OffsetDateTime;

    use super::*;
    use crate::adapters::game_objects_sea::{GameObjectCreate, GameObjectUpdate};

    /// In-memory repo that records how often each operation ran.
    #[derive(Default)]
    struct InMemoryRepo {
        rows: Mutex<Vec<GameObject>>,
        saves: AtomicUsize,
        reloads: AtomicUsize,
    }

    #[async_trait]
    impl GameObjectRepo for InMemoryRepo {
        async fn save(&self, dto: GameObjectCreate) -> Result<GameObject, DomainError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            let now = OffsetDateTime::now_utc();
            let row = GameObject {
                id: Uuid::new_v4(),
                game_object_type: dto.game_object_type,
                name: dto.name,
                description: dto.description,
                image_url: dto.image_url,
                value: dto.value,
                created_at: now,
                updated_at: now,
            };
            self.rows.lock().unwrap().push(row.clone());
            Ok(row)
        }

        async fn find_one_or_fail(&self, id: Uuid) -> Result<GameObject, DomainError> {
            self.reloads.fetch_add(1, Ordering::SeqCst);
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|row| row.id == id)
                .cloned()
                .ok_or_else(|| DomainError::not_found(NotFoundKind::GameObject, "missing"))
        }

        async fn find_random_one(
            &self,
            game_object_type: GameObjectType,
            omit_ids: &[Uuid],
        ) -> Result<Option<GameObject>, DomainError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|row| row.game_object_type == game_object_type && !omit_ids.contains(&row.id))
                .cloned())
        }

        async fn update(&self, id: Uuid, dto: GameObjectUpdate) -> Result<u64, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            let Some(row) = rows.iter_mut().find(|row| row.id == id) else {
                return Ok(0);
            };
            if let Some(name) = dto.name {
                row.name = name;
            }
            if let Some(value) = dto.value {
                row.value = value;
            }
            if let Some(description) = dto.description {
                row.description = description;
            }
            Ok(1)
        }

        async fn delete(&self, id: Uuid) -> Result<u64, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|row| row.id != id);
            Ok((before - rows.len()) as u64)
        }
    }

    fn service() -> GameObjectService<InMemoryRepo> {
        GameObjectService::new(InMemoryRepo::default())
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_the_repo() {
        let svc = service();
        let input = CreateGameObjectInput::new(GameObjectType::Weapon, "").with_value(-3);

        let err = svc.create(input).await.unwrap_err();

        match err {
            DomainError::Validation(detail) => assert_eq!(detail.split(';').count(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(svc.repo.saves.load(Ordering::SeqCst), 0);
        assert!(svc.repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_of_missing_id_is_not_found_without_reload() {
        let svc = service();

        let err = svc
            .update(Uuid::new_v4(), UpdateGameObjectInput::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::NotFound(NotFoundKind::GameObject, _)
        ));
        assert_eq!(svc.repo.reloads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn update_returns_reloaded_object() {
        let svc = service();
        let created = svc
            .create(CreateGameObjectInput::new(GameObjectType::Armor, "Helm").with_value(3))
            .await
            .unwrap();

        let updated = svc
            .update(
                created.id,
                UpdateGameObjectInput {
                    value: Some(9),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.value, 9);
        assert_eq!(updated.name, "Helm");
        assert_eq!(svc.repo.reloads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn absent_and_empty_omit_lists_behave_alike() {
        let svc = service();
        let created = svc
            .create(CreateGameObjectInput::new(GameObjectType::Treasure, "Coin"))
            .await
            .unwrap();

        let from_none = svc
            .find_randomly_one(GameObjectType::Treasure, None)
            .await
            .unwrap();
        let from_empty = svc
            .find_randomly_one(GameObjectType::Treasure, Some(&[][..]))
            .await
            .unwrap();

        assert_eq!(from_none.map(|o| o.id), Some(created.id));
        assert_eq!(from_empty.map(|o| o.id), Some(created.id));
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_went_away() {
        let svc = service();
        let created = svc
            .create(CreateGameObjectInput::new(GameObjectType::Creature, "Rat"))
            .await
            .unwrap();

        assert!(svc.delete(created.id).await.unwrap());
        assert!(!svc.delete(created.id).await.unwrap());
    }
}
