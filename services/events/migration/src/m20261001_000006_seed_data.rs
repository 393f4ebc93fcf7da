use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Password hash shared by the seeded accounts (bcrypt of `123456`).
const SEED_PASSWORD_HASH: &str = "$2a$10$eACCYoNOHEqXve8aIWT8Nu3PkMXWBaOxJ9aORUYzfMQCbVBIhZ8tG";

const ROLES: [&str; 2] = ["ROLE_CLIENT", "ROLE_ADMIN"];

const USERS: [(&str, &[&str]); 2] = [
    ("bob@gmail.com", &["ROLE_CLIENT"]),
    ("ana@gmail.com", &["ROLE_CLIENT", "ROLE_ADMIN"]),
];

const CITIES: [&str; 10] = [
    "São Paulo",
    "Brasília",
    "Fortaleza",
    "Salvador",
    "Manaus",
    "Curitiba",
    "Goiânia",
    "Belém",
    "Recife",
    "Porto Alegre",
];

/// (name, date, url, city name)
const EVENTS: [(&str, &str, &str, &str); 4] = [
    (
        "Feira do Software",
        "2021-05-16",
        "https://www.feiradosoftware.com",
        "São Paulo",
    ),
    (
        "Semana Geek",
        "2021-11-10",
        "https://www.semanageek.com",
        "Recife",
    ),
    ("CCXP", "2021-04-13", "https://www.ccxp.com.br", "São Paulo"),
    (
        "Congresso Linux",
        "2021-05-23",
        "https://www.congressolinux.com.br",
        "Porto Alegre",
    ),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut roles = Query::insert();
        roles.into_table(TbRole::Table).columns([TbRole::Authority]);
        for authority in ROLES {
            roles.values_panic([authority.into()]);
        }
        manager.exec_stmt(roles).await?;

        let mut users = Query::insert();
        users
            .into_table(TbUser::Table)
            .columns([TbUser::Email, TbUser::Password]);
        for (email, _) in USERS {
            users.values_panic([email.into(), SEED_PASSWORD_HASH.into()]);
        }
        manager.exec_stmt(users).await?;

        let mut cities = Query::insert();
        cities.into_table(TbCity::Table).columns([TbCity::Name]);
        for name in CITIES {
            cities.values_panic([name.into()]);
        }
        manager.exec_stmt(cities).await?;

        // Join rows and events reference generated ids, so resolve them by natural key.
        for (email, authorities) in USERS {
            for authority in authorities {
                manager.exec_stmt(user_role_insert(email, authority)?).await?;
            }
        }
        for (name, date, url, city) in EVENTS {
            manager.exec_stmt(event_insert(name, date, url, city)?).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for stmt in seed_deletes() {
            manager.exec_stmt(stmt).await?;
        }
        Ok(())
    }
}

fn user_role_insert(email: &str, authority: &str) -> Result<InsertStatement, DbErr> {
    let mut stmt = Query::insert();
    stmt.into_table(TbUserRole::Table)
        .columns([TbUserRole::UserId, TbUserRole::RoleId])
        .select_from(
            Query::select()
                .column((TbUser::Table, TbUser::Id))
                .column((TbRole::Table, TbRole::Id))
                .from(TbUser::Table)
                .from(TbRole::Table)
                .and_where(Expr::col((TbUser::Table, TbUser::Email)).eq(email))
                .and_where(Expr::col((TbRole::Table, TbRole::Authority)).eq(authority))
                .to_owned(),
        )
        .map_err(|e| DbErr::Migration(e.to_string()))?;
    Ok(stmt)
}

fn event_insert(name: &str, date: &str, url: &str, city: &str) -> Result<InsertStatement, DbErr> {
    let mut stmt = Query::insert();
    stmt.into_table(TbEvent::Table)
        .columns([TbEvent::Name, TbEvent::Date, TbEvent::Url, TbEvent::CityId])
        .select_from(
            Query::select()
                .expr(Expr::val(name))
                .expr(Func::cast_as(date, Alias::new("date")))
                .expr(Expr::val(url))
                .column((TbCity::Table, TbCity::Id))
                .from(TbCity::Table)
                .and_where(Expr::col((TbCity::Table, TbCity::Name)).eq(city))
                .to_owned(),
        )
        .map_err(|e| DbErr::Migration(e.to_string()))?;
    Ok(stmt)
}

/// Deletes only the seeded rows, children first. `tb_user_role` rows cascade
/// with their users.
fn seed_deletes() -> [DeleteStatement; 4] {
    [
        Query::delete()
            .from_table(TbEvent::Table)
            .and_where(Expr::col(TbEvent::Name).is_in(EVENTS.map(|(name, ..)| name)))
            .to_owned(),
        Query::delete()
            .from_table(TbUser::Table)
            .and_where(Expr::col(TbUser::Email).is_in(USERS.map(|(email, _)| email)))
            .to_owned(),
        Query::delete()
            .from_table(TbCity::Table)
            .and_where(Expr::col(TbCity::Name).is_in(CITIES))
            .to_owned(),
        Query::delete()
            .from_table(TbRole::Table)
            .and_where(Expr::col(TbRole::Authority).is_in(ROLES))
            .to_owned(),
    ]
}

#[derive(DeriveIden)]
enum TbRole {
    Table,
    Id,
    Authority,
}

#[derive(DeriveIden)]
enum TbUser {
    Table,
    Id,
    Email,
    Password,
}

#[derive(DeriveIden)]
enum TbUserRole {
    Table,
    UserId,
    RoleId,
}

#[derive(DeriveIden)]
enum TbCity {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum TbEvent {
    Table,
    Name,
    Date,
    Url,
    CityId,
}
