use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250301_000001_people::People, m20250301_000003_user::User};

static IDX_USER_FAVORITE_PEOPLE_PEOPLE_ID: &str = "idx-user_favorite_people-people_id";
static FK_USER_FAVORITE_PEOPLE_USER_ID: &str = "fk-user_favorite_people-user_id";
static FK_USER_FAVORITE_PEOPLE_PEOPLE_ID: &str = "fk-user_favorite_people-people_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline as SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(UserFavoritePeople::Table)
                    .if_not_exists()
                    .col(integer(UserFavoritePeople::UserId))
                    .col(integer(UserFavoritePeople::PeopleId))
                    .primary_key(
                        Index::create()
                            .col(UserFavoritePeople::UserId)
                            .col(UserFavoritePeople::PeopleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_FAVORITE_PEOPLE_USER_ID)
                            .from(UserFavoritePeople::Table, UserFavoritePeople::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_FAVORITE_PEOPLE_PEOPLE_ID)
                            .from(UserFavoritePeople::Table, UserFavoritePeople::PeopleId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_FAVORITE_PEOPLE_PEOPLE_ID)
                    .table(UserFavoritePeople::Table)
                    .col(UserFavoritePeople::PeopleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_FAVORITE_PEOPLE_PEOPLE_ID)
                    .table(UserFavoritePeople::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserFavoritePeople::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserFavoritePeople {
    Table,
    UserId,
    PeopleId,
}
