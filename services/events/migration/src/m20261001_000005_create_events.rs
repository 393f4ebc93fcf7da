use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TbEvent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TbEvent::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TbEvent::Name).string().not_null())
                    .col(ColumnDef::new(TbEvent::Date).date().not_null())
                    .col(ColumnDef::new(TbEvent::Url).string().not_null())
                    .col(ColumnDef::new(TbEvent::CityId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(TbEvent::Table, TbEvent::CityId)
                            .to(TbCity::Table, TbCity::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(TbEvent::Table)
                    .col(TbEvent::CityId)
                    .name("idx_tb_event_city_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TbEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TbEvent {
    Table,
    Id,
    Name,
    Date,
    Url,
    CityId,
}

#[derive(DeriveIden)]
enum TbCity {
    Table,
    Id,
}
