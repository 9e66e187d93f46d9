use sea_orm::Statement;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type as PgType;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum GameObjects {
    Table,
    Id,
    GameObjectType,
    Name,
    Description,
    ImageUrl,
    Value,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum GameObjectTypeEnum {
    #[iden = "game_object_type"]
    Type,
}

const GAME_OBJECT_TYPES: [&str; 5] = ["WEAPON", "ARMOR", "CONSUMABLE", "TREASURE", "CREATURE"];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        // Postgres stores the type tag as a native enum; SQLite keeps it as TEXT
        let type_column = match backend {
            sea_orm::DatabaseBackend::Postgres => {
                let exists = manager
                    .get_connection()
                    .query_one(Statement::from_string(
                        sea_orm::DatabaseBackend::Postgres,
                        "SELECT 1 FROM pg_type WHERE typname = 'game_object_type'".to_string(),
                    ))
                    .await?
                    .is_some();

                if !exists {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(GameObjectTypeEnum::Type)
                                .values(GAME_OBJECT_TYPES)
                                .to_owned(),
                        )
                        .await?;
                }

                ColumnDef::new(GameObjects::GameObjectType)
                    .custom(GameObjectTypeEnum::Type)
                    .not_null()
                    .to_owned()
            }
            sea_orm::DatabaseBackend::Sqlite => ColumnDef::new(GameObjects::GameObjectType)
                .string_len(32)
                .not_null()
                .to_owned(),
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".into()));
            }
        };

        manager
            .create_table(
                Table::create()
                    .table(GameObjects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GameObjects::Id).uuid().not_null().primary_key())
                    .col(type_column)
                    .col(ColumnDef::new(GameObjects::Name).string().not_null())
                    .col(ColumnDef::new(GameObjects::Description).text().null())
                    .col(ColumnDef::new(GameObjects::ImageUrl).string().null())
                    .col(
                        ColumnDef::new(GameObjects::Value)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(GameObjects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameObjects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Random lookups filter on the type pool first
        manager
            .create_index(
                Index::create()
                    .name("ix_game_objects_type")
                    .table(GameObjects::Table)
                    .col(GameObjects::GameObjectType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop index before table, then the enum type
        manager
            .drop_index(
                Index::drop()
                    .name("ix_game_objects_type")
                    .table(GameObjects::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GameObjects::Table).to_owned())
            .await?;

        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .drop_type(
                    PgType::drop()
                        .if_exists()
                        .name(GameObjectTypeEnum::Type)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
