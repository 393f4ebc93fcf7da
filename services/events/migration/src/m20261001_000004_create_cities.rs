use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TbCity::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TbCity::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TbCity::Name).string().not_null())
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(TbCity::Table)
                    .col(TbCity::Name)
                    .name("idx_tb_city_name")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TbCity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TbCity {
    Table,
    Id,
    Name,
}
