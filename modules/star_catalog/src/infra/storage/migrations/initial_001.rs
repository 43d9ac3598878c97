use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(120)
                            .not_null()
                            .unique_key()
                            .check(Expr::cust("email <> ''")),
                    )
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(ColumnDef::new(Users::IsActive).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(People::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(People::Name)
                            .string_len(80)
                            .not_null()
                            .check(Expr::cust("name <> ''")),
                    )
                    .col(ColumnDef::new(People::Height).string_len(10).null())
                    .col(ColumnDef::new(People::Mass).string_len(10).null())
                    .col(ColumnDef::new(People::Gender).string_len(20).null())
                    .col(ColumnDef::new(People::BirthYear).string_len(20).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Planets::Name)
                            .string_len(80)
                            .not_null()
                            .check(Expr::cust("name <> ''")),
                    )
                    .col(ColumnDef::new(Planets::Climate).string_len(50).null())
                    .col(ColumnDef::new(Planets::Population).string_len(20).null())
                    .col(ColumnDef::new(Planets::Terrain).string_len(50).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favorites::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Favorites::UserId).integer().not_null())
                    .col(ColumnDef::new(Favorites::PersonId).integer().null())
                    // A favorite references exactly one of person/planet.
                    .col(
                        ColumnDef::new(Favorites::PlanetId)
                            .integer()
                            .null()
                            .check(Expr::cust("(person_id IS NULL) <> (planet_id IS NULL)")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_user_id")
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_person_id")
                            .from(Favorites::Table, Favorites::PersonId)
                            .to(People::Table, People::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_planet_id")
                            .from(Favorites::Table, Favorites::PlanetId)
                            .to(Planets::Table, Planets::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    Password,
    IsActive,
}

#[derive(DeriveIden)]
enum People {
    Table,
    Id,
    Name,
    Height,
    Mass,
    Gender,
    BirthYear,
}

#[derive(DeriveIden)]
enum Planets {
    Table,
    Id,
    Name,
    Climate,
    Population,
    Terrain,
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    PersonId,
    PlanetId,
}
