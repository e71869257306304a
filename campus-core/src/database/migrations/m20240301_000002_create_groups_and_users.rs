use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Groups::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Groups::GroupName).string().not_null())
                    .col(ColumnDef::new(Groups::ClassName).string().not_null())
                    .col(ColumnDef::new(Groups::ClassNumber).string().not_null())
                    .col(ColumnDef::new(Groups::Email).text().not_null().default("[]"))
                    .col(ColumnDef::new(Groups::Time).string().not_null())
                    .col(ColumnDef::new(Groups::Longitude).double().not_null())
                    .col(ColumnDef::new(Groups::Latitude).double().not_null())
                    .col(ColumnDef::new(Groups::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Groups::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Group names are not unique; lookups by name take the oldest match.
        manager
            .create_index(
                Index::create()
                    .name("idx_groups_group_name")
                    .table(Groups::Table)
                    .col(Groups::GroupName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_groups_class")
                    .table(Groups::Table)
                    .col(Groups::ClassName)
                    .col(Groups::ClassNumber)
                    .to_owned(),
            )
            .await?;

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
                    .col(ColumnDef::new(Users::UserName).string().not_null())
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Groups).text().not_null().default("[]"))
                    .col(ColumnDef::new(Users::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Not unique: several users may share a user name.
        manager
            .create_index(
                Index::create()
                    .name("idx_users_user_name")
                    .table(Users::Table)
                    .col(Users::UserName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Groups::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Groups {
    Table,
    Id,
    GroupName,
    ClassName,
    ClassNumber,
    Email,
    Time,
    Longitude,
    Latitude,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    UserName,
    FirstName,
    LastName,
    Email,
    PasswordHash,
    Groups,
    CreatedAt,
    UpdatedAt,
}
