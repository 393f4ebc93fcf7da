use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TbUserRole::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TbUserRole::UserId).big_integer().not_null())
                    .col(ColumnDef::new(TbUserRole::RoleId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(TbUserRole::UserId)
                            .col(TbUserRole::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TbUserRole::Table, TbUserRole::UserId)
                            .to(TbUser::Table, TbUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TbUserRole::Table, TbUserRole::RoleId)
                            .to(TbRole::Table, TbRole::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(TbUserRole::Table)
                    .col(TbUserRole::RoleId)
                    .name("idx_tb_user_role_role_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TbUserRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TbUserRole {
    Table,
    UserId,
    RoleId,
}

#[derive(DeriveIden)]
enum TbUser {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum TbRole {
    Table,
    Id,
}
