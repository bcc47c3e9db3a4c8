use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

const GENDERS: [&str; 2] = ["male", "female"];
const FILM_TYPES: [&str; 2] = ["movie", "tv_show"];
const ROLES: [&str; 9] = [
    "actor",
    "director",
    "writer",
    "producer",
    "composer",
    "cinematographer",
    "editor",
    "designer",
    "voice_actor",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Genre::Table)
                    .if_not_exists()
                    .col(uuid(Genre::Id).primary_key())
                    .col(string_len(Genre::Name, 255))
                    .col(text_null(Genre::Description))
                    .col(timestamp_with_time_zone(Genre::Created))
                    .col(timestamp_with_time_zone(Genre::Modified))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(uuid(Person::Id).primary_key())
                    .col(string_len(Person::FullName, 255))
                    .col(text_null(Person::Gender).check(Expr::col(Person::Gender).is_in(GENDERS)))
                    .col(timestamp_with_time_zone(Person::Created))
                    .col(timestamp_with_time_zone(Person::Modified))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FilmWork::Table)
                    .if_not_exists()
                    .col(uuid(FilmWork::Id).primary_key())
                    .col(string_len(FilmWork::Title, 255))
                    .col(text_null(FilmWork::Description))
                    .col(string_len_null(FilmWork::Certificate, 512))
                    .col(string_len_null(FilmWork::FilePath, 100))
                    .col(date_null(FilmWork::CreationDate))
                    .col(
                        double_null(FilmWork::Rating)
                            .check(Expr::col(FilmWork::Rating).between(0.0, 100.0)),
                    )
                    .col(
                        string_len(FilmWork::Type, 50)
                            .check(Expr::col(FilmWork::Type).is_in(FILM_TYPES)),
                    )
                    .col(timestamp_with_time_zone(FilmWork::Created))
                    .col(timestamp_with_time_zone(FilmWork::Modified))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_film_work_creation_date")
                    .table(FilmWork::Table)
                    .col(FilmWork::CreationDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GenreFilmWork::Table)
                    .if_not_exists()
                    .col(uuid(GenreFilmWork::Id).primary_key())
                    .col(uuid(GenreFilmWork::FilmWorkId))
                    .col(uuid(GenreFilmWork::GenreId))
                    .col(timestamp_with_time_zone(GenreFilmWork::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_genre_film_work_film_work")
                            .from(GenreFilmWork::Table, GenreFilmWork::FilmWorkId)
                            .to(FilmWork::Table, FilmWork::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_genre_film_work_genre")
                            .from(GenreFilmWork::Table, GenreFilmWork::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A film carries a given genre at most once.
        manager
            .create_index(
                Index::create()
                    .name("idx_genre_film_work_unique")
                    .table(GenreFilmWork::Table)
                    .col(GenreFilmWork::FilmWorkId)
                    .col(GenreFilmWork::GenreId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_genre_film_work_genre")
                    .table(GenreFilmWork::Table)
                    .col(GenreFilmWork::GenreId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PersonFilmWork::Table)
                    .if_not_exists()
                    .col(uuid(PersonFilmWork::Id).primary_key())
                    .col(uuid(PersonFilmWork::PersonId))
                    .col(uuid(PersonFilmWork::FilmWorkId))
                    .col(
                        string_len(PersonFilmWork::Role, 50)
                            .check(Expr::col(PersonFilmWork::Role).is_in(ROLES)),
                    )
                    .col(timestamp_with_time_zone(PersonFilmWork::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_person_film_work_person")
                            .from(PersonFilmWork::Table, PersonFilmWork::PersonId)
                            .to(Person::Table, Person::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_person_film_work_film_work")
                            .from(PersonFilmWork::Table, PersonFilmWork::FilmWorkId)
                            .to(FilmWork::Table, FilmWork::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Same credit never recorded twice; multiple roles per pair stay legal.
        manager
            .create_index(
                Index::create()
                    .name("idx_person_film_work_unique")
                    .table(PersonFilmWork::Table)
                    .col(PersonFilmWork::FilmWorkId)
                    .col(PersonFilmWork::PersonId)
                    .col(PersonFilmWork::Role)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_person_film_work_person")
                    .table(PersonFilmWork::Table)
                    .col(PersonFilmWork::PersonId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PersonFilmWork::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(GenreFilmWork::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(FilmWork::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Person::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Genre::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Genre {
    Table,
    Id,
    Name,
    Description,
    Created,
    Modified,
}

#[derive(DeriveIden)]
enum Person {
    Table,
    Id,
    FullName,
    Gender,
    Created,
    Modified,
}

#[derive(DeriveIden)]
enum FilmWork {
    Table,
    Id,
    Title,
    Description,
    Certificate,
    FilePath,
    CreationDate,
    Rating,
    Type,
    Created,
    Modified,
}

#[derive(DeriveIden)]
enum GenreFilmWork {
    Table,
    Id,
    FilmWorkId,
    GenreId,
    Created,
}

#[derive(DeriveIden)]
enum PersonFilmWork {
    Table,
    Id,
    PersonId,
    FilmWorkId,
    Role,
    Created,
}
