use sea_orm_migration::sea_orm::Statement;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type as PgType;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Partial unique index backing the "one active round per game" rule.
pub const ACTIVE_ROUND_INDEX: &str = "ux_rounds_game_active";

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Games {
    Table,
    Id,
    Name,
    Configs,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Phrases {
    Table,
    Id,
    GameId,
    Value,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Teams {
    Table,
    Id,
    GameId,
    Name,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Rounds {
    Table,
    Id,
    GameId,
    PhraseId,
    Name,
    IsEnded,
    Configs,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Guesses {
    Table,
    Id,
    RoundId,
    TeamId,
    GuessType,
    Status,
    Value,
    Score,
    CreatedBy,
    CreatedAt,
}

#[derive(Iden)]
enum GuessTypeEnum {
    #[iden = "guess_type"]
    Type,
}

#[derive(Iden)]
enum GuessStatusEnum {
    #[iden = "guess_status"]
    Type,
}

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

fn timestamp_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Postgres enums; SQLite stores the same string values as text
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            async fn enum_exists(manager: &SchemaManager<'_>, name: &str) -> Result<bool, DbErr> {
                let row = manager
                    .get_connection()
                    .query_one(Statement::from_string(
                        sea_orm::DatabaseBackend::Postgres,
                        format!("SELECT 1 FROM pg_type WHERE typname = '{name}'"),
                    ))
                    .await?;
                Ok(row.is_some())
            }

            if !enum_exists(manager, "guess_type").await? {
                manager
                    .create_type(
                        PgType::create()
                            .as_enum(GuessTypeEnum::Type)
                            .values([Alias::new("LETTER"), Alias::new("PHRASE")])
                            .to_owned(),
                    )
                    .await?;
            }
            if !enum_exists(manager, "guess_status").await? {
                manager
                    .create_type(
                        PgType::create()
                            .as_enum(GuessStatusEnum::Type)
                            .values([Alias::new("CORRECT"), Alias::new("WRONG")])
                            .to_owned(),
                    )
                    .await?;
            }
        }

        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(id_col(Games::Id))
                    .col(ColumnDef::new(Games::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Games::Configs).json_binary().not_null())
                    .col(ColumnDef::new(Games::CreatedBy).big_integer().not_null())
                    .col(ColumnDef::new(Games::UpdatedBy).big_integer().not_null())
                    .col(timestamp_col(Games::CreatedAt))
                    .col(timestamp_col(Games::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // phrases
        manager
            .create_table(
                Table::create()
                    .table(Phrases::Table)
                    .if_not_exists()
                    .col(id_col(Phrases::Id))
                    .col(ColumnDef::new(Phrases::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Phrases::Value).string_len(200).not_null())
                    .col(ColumnDef::new(Phrases::CreatedBy).big_integer().not_null())
                    .col(ColumnDef::new(Phrases::UpdatedBy).big_integer().not_null())
                    .col(timestamp_col(Phrases::CreatedAt))
                    .col(timestamp_col(Phrases::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_phrases_game_id")
                            .from(Phrases::Table, Phrases::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_phrases_game_id")
                    .table(Phrases::Table)
                    .col(Phrases::GameId)
                    .to_owned(),
            )
            .await?;

        // teams
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(id_col(Teams::Id))
                    .col(ColumnDef::new(Teams::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Teams::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Teams::CreatedBy).big_integer().not_null())
                    .col(ColumnDef::new(Teams::UpdatedBy).big_integer().not_null())
                    .col(timestamp_col(Teams::CreatedAt))
                    .col(timestamp_col(Teams::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teams_game_id")
                            .from(Teams::Table, Teams::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_teams_game_id")
                    .table(Teams::Table)
                    .col(Teams::GameId)
                    .to_owned(),
            )
            .await?;

        // rounds
        manager
            .create_table(
                Table::create()
                    .table(Rounds::Table)
                    .if_not_exists()
                    .col(id_col(Rounds::Id))
                    .col(ColumnDef::new(Rounds::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Rounds::PhraseId).big_integer().not_null())
                    .col(ColumnDef::new(Rounds::Name).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Rounds::IsEnded)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Rounds::Configs).json_binary().not_null())
                    .col(ColumnDef::new(Rounds::CreatedBy).big_integer().not_null())
                    .col(ColumnDef::new(Rounds::UpdatedBy).big_integer().not_null())
                    .col(timestamp_col(Rounds::CreatedAt))
                    .col(timestamp_col(Rounds::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rounds_game_id")
                            .from(Rounds::Table, Rounds::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rounds_phrase_id")
                            .from(Rounds::Table, Rounds::PhraseId)
                            .to(Phrases::Table, Phrases::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_rounds_game_id")
                    .table(Rounds::Table)
                    .col(Rounds::GameId)
                    .to_owned(),
            )
            .await?;

        // sea-query has no partial index builder; the predicate is portable
        // between Postgres booleans and SQLite integers.
        let backend = manager.get_database_backend();
        manager
            .get_connection()
            .execute(Statement::from_string(
                backend,
                format!(
                    "CREATE UNIQUE INDEX IF NOT EXISTS {ACTIVE_ROUND_INDEX} \
                     ON rounds (game_id) WHERE NOT is_ended"
                ),
            ))
            .await?;

        // guesses
        manager
            .create_table(
                Table::create()
                    .table(Guesses::Table)
                    .if_not_exists()
                    .col(id_col(Guesses::Id))
                    .col(ColumnDef::new(Guesses::RoundId).big_integer().not_null())
                    .col(ColumnDef::new(Guesses::TeamId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Guesses::GuessType)
                            .custom(GuessTypeEnum::Type)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Guesses::Status)
                            .custom(GuessStatusEnum::Type)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Guesses::Value)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Guesses::Score)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Guesses::CreatedBy).big_integer().not_null())
                    .col(timestamp_col(Guesses::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guesses_round_id")
                            .from(Guesses::Table, Guesses::RoundId)
                            .to(Rounds::Table, Rounds::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guesses_team_id")
                            .from(Guesses::Table, Guesses::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_guesses_round_id")
                    .table(Guesses::Table)
                    .col(Guesses::RoundId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_guesses_team_id")
                    .table(Guesses::Table)
                    .col(Guesses::TeamId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order; indexes go with their tables
        manager
            .drop_table(Table::drop().table(Guesses::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rounds::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Phrases::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await?;

        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .drop_type(PgType::drop().if_exists().name(GuessStatusEnum::Type).to_owned())
                .await?;
            manager
                .drop_type(PgType::drop().if_exists().name(GuessTypeEnum::Type).to_owned())
                .await?;
        }

        Ok(())
    }
}
