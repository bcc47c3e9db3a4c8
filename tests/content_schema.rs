use std::collections::HashSet;

use movie_catalog::{
    catalog::{Catalog, FilmWorkInput},
    db,
    entities::{
        film_work::FilmType, genre_film_work, person::Gender, person_film_work,
        person_film_work::Role,
    },
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbBackend, EntityTrait, PaginatorTrait, QueryFilter, Statement,
};
use uuid::Uuid;

async fn catalog() -> Catalog {
    let db = db::connect_and_migrate("sqlite::memory:", 1)
        .await
        .expect("in-memory database should connect and migrate");
    Catalog::new(db)
}

fn film(title: &str, rating: Option<f64>) -> FilmWorkInput {
    FilmWorkInput {
        title: title.to_owned(),
        description: None,
        certificate: None,
        file_path: None,
        creation_date: None,
        rating,
        kind: FilmType::Movie,
    }
}

#[tokio::test]
async fn creates_and_reads_back_a_genre() {
    let catalog = catalog().await;

    let created = catalog.create_genre("Drama", Some("Serious fare")).await.unwrap();
    let fetched = catalog.genre(created.id).await.unwrap().expect("genre should exist");

    assert_eq!(fetched.name, "Drama");
    assert_eq!(fetched.description.as_deref(), Some("Serious fare"));
    assert_eq!(fetched.created, fetched.modified);
    assert_eq!(fetched.to_string(), "Drama");
}

#[tokio::test]
async fn assigns_a_distinct_id_to_every_entity() {
    let catalog = catalog().await;
    let mut ids = HashSet::new();

    for name in ["Action", "Comedy", "Horror"] {
        ids.insert(catalog.create_genre(name, None).await.unwrap().id);
    }
    for name in ["Ada Lovelace", "Grace Hopper"] {
        ids.insert(catalog.create_person(name, Some(Gender::Female)).await.unwrap().id);
    }
    ids.insert(catalog.create_film_work(film("Metropolis", None)).await.unwrap().id);

    assert_eq!(ids.len(), 6);
}

#[tokio::test]
async fn accepts_ratings_on_the_range_boundaries() {
    let catalog = catalog().await;

    let low = catalog.create_film_work(film("Flop", Some(0.0))).await.unwrap();
    let high = catalog.create_film_work(film("Masterpiece", Some(100.0))).await.unwrap();

    assert_eq!(low.rating, Some(0.0));
    assert_eq!(high.rating, Some(100.0));
}

#[tokio::test]
async fn rejects_ratings_outside_the_range() {
    let catalog = catalog().await;

    assert!(catalog.create_film_work(film("Too Low", Some(-1.0))).await.is_err());
    assert!(catalog.create_film_work(film("Too High", Some(101.0))).await.is_err());
}

#[tokio::test]
async fn rejects_a_film_type_outside_the_enumeration() {
    let catalog = catalog().await;
    let now = chrono::Utc::now().fixed_offset();

    let res = catalog
        .db()
        .execute(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            r#"INSERT INTO "film_work" ("id", "title", "type", "created", "modified") VALUES (?, ?, ?, ?, ?)"#,
            [
                Uuid::new_v4().into(),
                "Smuggled".into(),
                "documentary".into(),
                now.into(),
                now.into(),
            ],
        ))
        .await;

    assert!(res.is_err(), "type outside {{movie, tv_show}} must be rejected");
}

#[tokio::test]
async fn rejects_a_role_outside_the_enumeration() {
    let catalog = catalog().await;
    let person = catalog.create_person("Fritz Lang", Some(Gender::Male)).await.unwrap();
    let film_work = catalog.create_film_work(film("M", Some(83.0))).await.unwrap();
    let now = chrono::Utc::now().fixed_offset();

    let res = catalog
        .db()
        .execute(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            r#"INSERT INTO "person_film_work" ("id", "person_id", "film_work_id", "role", "created") VALUES (?, ?, ?, ?, ?)"#,
            [
                Uuid::new_v4().into(),
                person.id.into(),
                film_work.id.into(),
                "stunt_double".into(),
                now.into(),
            ],
        ))
        .await;

    assert!(res.is_err(), "role outside the enumerated set must be rejected");
}

#[tokio::test]
async fn rejects_a_gender_outside_the_enumeration() {
    let catalog = catalog().await;
    let now = chrono::Utc::now().fixed_offset();

    let res = catalog
        .db()
        .execute(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            r#"INSERT INTO "person" ("id", "full_name", "gender", "created", "modified") VALUES (?, ?, ?, ?, ?)"#,
            [
                Uuid::new_v4().into(),
                "Anonymous".into(),
                "other".into(),
                now.into(),
                now.into(),
            ],
        ))
        .await;

    assert!(res.is_err(), "gender outside {{male, female}} must be rejected");
}

#[tokio::test]
async fn deleting_a_genre_cascades_to_its_links() {
    let catalog = catalog().await;
    let genre = catalog.create_genre("Sci-Fi", None).await.unwrap();
    let film_work = catalog.create_film_work(film("Solaris", Some(90.0))).await.unwrap();
    catalog.add_genre_to_film(film_work.id, genre.id).await.unwrap();

    assert_eq!(catalog.delete_genre(genre.id).await.unwrap(), 1);

    let links = genre_film_work::Entity::find()
        .filter(genre_film_work::Column::FilmWorkId.eq(film_work.id))
        .count(catalog.db())
        .await
        .unwrap();
    assert_eq!(links, 0);
    assert!(catalog.film_work(film_work.id).await.unwrap().is_some());
}

#[tokio::test]
async fn deleting_a_film_cascades_to_its_credits() {
    let catalog = catalog().await;
    let person = catalog.create_person("Andrei Tarkovsky", Some(Gender::Male)).await.unwrap();
    let film_work = catalog.create_film_work(film("Stalker", Some(92.0))).await.unwrap();
    catalog.add_credit(person.id, film_work.id, Role::Director).await.unwrap();

    assert_eq!(catalog.delete_film_work(film_work.id).await.unwrap(), 1);

    let credits = person_film_work::Entity::find()
        .filter(person_film_work::Column::PersonId.eq(person.id))
        .count(catalog.db())
        .await
        .unwrap();
    assert_eq!(credits, 0);
    assert!(catalog.person(person.id).await.unwrap().is_some());
}

#[tokio::test]
async fn one_person_may_hold_several_roles_on_one_film() {
    let catalog = catalog().await;
    let person = catalog.create_person("Orson Welles", Some(Gender::Male)).await.unwrap();
    let film_work = catalog.create_film_work(film("Citizen Kane", Some(100.0))).await.unwrap();

    catalog.add_credit(person.id, film_work.id, Role::Actor).await.unwrap();
    catalog.add_credit(person.id, film_work.id, Role::Director).await.unwrap();

    let credits = catalog.credits_of(film_work.id).await.unwrap();
    assert_eq!(credits.len(), 2);

    // The same credit a second time is a duplicate.
    assert!(catalog.add_credit(person.id, film_work.id, Role::Actor).await.is_err());
}

#[tokio::test]
async fn a_film_carries_a_genre_at_most_once() {
    let catalog = catalog().await;
    let genre = catalog.create_genre("Noir", None).await.unwrap();
    let film_work = catalog.create_film_work(film("The Third Man", Some(88.0))).await.unwrap();

    catalog.add_genre_to_film(film_work.id, genre.id).await.unwrap();
    assert!(catalog.add_genre_to_film(film_work.id, genre.id).await.is_err());
}

#[tokio::test]
async fn resolves_many_to_many_relationships_both_ways() {
    let catalog = catalog().await;
    let genre = catalog.create_genre("Western", None).await.unwrap();
    let person = catalog.create_person("Sergio Leone", Some(Gender::Male)).await.unwrap();
    let film_work =
        catalog.create_film_work(film("Once Upon a Time in the West", Some(95.0))).await.unwrap();

    catalog.add_genre_to_film(film_work.id, genre.id).await.unwrap();
    catalog.add_credit(person.id, film_work.id, Role::Director).await.unwrap();

    let genres = catalog.genres_of(&film_work).await.unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0].id, genre.id);

    let people = catalog.people_of(&film_work).await.unwrap();
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].id, person.id);

    let films = catalog.films_of_genre(&genre).await.unwrap();
    assert_eq!(films.len(), 1);
    assert_eq!(films[0].id, film_work.id);
}

#[tokio::test]
async fn unlinking_leaves_both_parents_in_place() {
    let catalog = catalog().await;
    let genre = catalog.create_genre("Thriller", None).await.unwrap();
    let person = catalog.create_person("Alfred Hitchcock", Some(Gender::Male)).await.unwrap();
    let film_work = catalog.create_film_work(film("Vertigo", Some(97.0))).await.unwrap();
    catalog.add_genre_to_film(film_work.id, genre.id).await.unwrap();
    catalog.add_credit(person.id, film_work.id, Role::Director).await.unwrap();

    assert_eq!(catalog.remove_genre_from_film(film_work.id, genre.id).await.unwrap(), 1);
    assert_eq!(catalog.remove_credit(person.id, film_work.id, Role::Director).await.unwrap(), 1);

    assert!(catalog.genre(genre.id).await.unwrap().is_some());
    assert!(catalog.person(person.id).await.unwrap().is_some());
    assert!(catalog.film_work(film_work.id).await.unwrap().is_some());
}

#[tokio::test]
async fn updates_bump_modified_but_not_created() {
    let catalog = catalog().await;
    let genre = catalog.create_genre("Romance", None).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    let updated = catalog.update_genre(genre.id, "Romance", Some("Love stories")).await.unwrap();

    assert_eq!(updated.created, genre.created);
    assert!(updated.modified > genre.modified);
    assert_eq!(updated.description.as_deref(), Some("Love stories"));
}

#[tokio::test]
async fn full_update_replaces_film_fields() {
    let catalog = catalog().await;
    let created = catalog.create_film_work(film("Working Title", None)).await.unwrap();

    let updated = catalog
        .update_film_work(
            created.id,
            FilmWorkInput {
                title: "Final Title".to_owned(),
                description: Some("A re-cut".to_owned()),
                certificate: Some("PG-13".to_owned()),
                file_path: Some("movies/final_title.mp4".to_owned()),
                creation_date: Some(chrono::NaiveDate::from_ymd_opt(1968, 12, 21).unwrap()),
                rating: Some(75.5),
                kind: FilmType::TvShow,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Final Title");
    assert_eq!(updated.r#type, FilmType::TvShow);
    assert_eq!(updated.rating, Some(75.5));
    assert_eq!(updated.to_string(), "Final Title");
}
