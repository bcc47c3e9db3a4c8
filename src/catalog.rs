use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    ModelTrait, QueryFilter, Set, entity::prelude::Date,
};
use uuid::Uuid;

use crate::{
    entities::{
        film_work::{self, FilmType},
        genre, genre_film_work,
        person::{self, Gender},
        person_film_work::{self, Role},
    },
    error::{AppError, AppResult},
};

/// Fields of a film work supplied by the caller. Identity and timestamps are
/// assigned by the catalog itself.
#[derive(Clone, Debug)]
pub struct FilmWorkInput {
    pub title: String,
    pub description: Option<String>,
    pub certificate: Option<String>,
    pub file_path: Option<String>,
    pub creation_date: Option<Date>,
    pub rating: Option<f64>,
    pub kind: FilmType,
}

/// Typed access surface over the content schema.
#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    // --- genres ---

    pub async fn create_genre(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<genre::Model> {
        let row = genre::ActiveModel {
            name: Set(name.to_owned()),
            description: Set(description.map(str::to_owned)),
            ..genre::ActiveModel::new()
        };
        Ok(row.insert(&self.db).await?)
    }

    pub async fn genre(&self, id: Uuid) -> AppResult<Option<genre::Model>> {
        Ok(genre::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn genres(&self) -> AppResult<Vec<genre::Model>> {
        Ok(genre::Entity::find().all(&self.db).await?)
    }

    pub async fn update_genre(
        &self,
        id: Uuid,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<genre::Model> {
        let found = self.genre(id).await?.ok_or(AppError::NotFound("genre"))?;
        let mut row: genre::ActiveModel = found.into();
        row.name = Set(name.to_owned());
        row.description = Set(description.map(str::to_owned));
        Ok(row.update(&self.db).await?)
    }

    pub async fn delete_genre(&self, id: Uuid) -> AppResult<u64> {
        let res = genre::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }

    // --- people ---

    pub async fn create_person(
        &self,
        full_name: &str,
        gender: Option<Gender>,
    ) -> AppResult<person::Model> {
        let row = person::ActiveModel {
            full_name: Set(full_name.to_owned()),
            gender: Set(gender),
            ..person::ActiveModel::new()
        };
        Ok(row.insert(&self.db).await?)
    }

    pub async fn person(&self, id: Uuid) -> AppResult<Option<person::Model>> {
        Ok(person::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn people(&self) -> AppResult<Vec<person::Model>> {
        Ok(person::Entity::find().all(&self.db).await?)
    }

    pub async fn update_person(
        &self,
        id: Uuid,
        full_name: &str,
        gender: Option<Gender>,
    ) -> AppResult<person::Model> {
        let found = self.person(id).await?.ok_or(AppError::NotFound("person"))?;
        let mut row: person::ActiveModel = found.into();
        row.full_name = Set(full_name.to_owned());
        row.gender = Set(gender);
        Ok(row.update(&self.db).await?)
    }

    pub async fn delete_person(&self, id: Uuid) -> AppResult<u64> {
        let res = person::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }

    // --- film works ---

    pub async fn create_film_work(&self, input: FilmWorkInput) -> AppResult<film_work::Model> {
        let row = film_work::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            certificate: Set(input.certificate),
            file_path: Set(input.file_path),
            creation_date: Set(input.creation_date),
            rating: Set(input.rating),
            r#type: Set(input.kind),
            ..film_work::ActiveModel::new()
        };
        Ok(row.insert(&self.db).await?)
    }

    pub async fn film_work(&self, id: Uuid) -> AppResult<Option<film_work::Model>> {
        Ok(film_work::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn film_works(&self) -> AppResult<Vec<film_work::Model>> {
        Ok(film_work::Entity::find().all(&self.db).await?)
    }

    pub async fn update_film_work(
        &self,
        id: Uuid,
        input: FilmWorkInput,
    ) -> AppResult<film_work::Model> {
        let found = self.film_work(id).await?.ok_or(AppError::NotFound("film work"))?;
        let mut row: film_work::ActiveModel = found.into();
        row.title = Set(input.title);
        row.description = Set(input.description);
        row.certificate = Set(input.certificate);
        row.file_path = Set(input.file_path);
        row.creation_date = Set(input.creation_date);
        row.rating = Set(input.rating);
        row.r#type = Set(input.kind);
        Ok(row.update(&self.db).await?)
    }

    pub async fn delete_film_work(&self, id: Uuid) -> AppResult<u64> {
        let res = film_work::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }

    // --- relationships ---

    pub async fn add_genre_to_film(
        &self,
        film_work_id: Uuid,
        genre_id: Uuid,
    ) -> AppResult<genre_film_work::Model> {
        let row = genre_film_work::ActiveModel {
            film_work_id: Set(film_work_id),
            genre_id: Set(genre_id),
            ..genre_film_work::ActiveModel::new()
        };
        Ok(row.insert(&self.db).await?)
    }

    pub async fn remove_genre_from_film(
        &self,
        film_work_id: Uuid,
        genre_id: Uuid,
    ) -> AppResult<u64> {
        let res = genre_film_work::Entity::delete_many()
            .filter(genre_film_work::Column::FilmWorkId.eq(film_work_id))
            .filter(genre_film_work::Column::GenreId.eq(genre_id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn add_credit(
        &self,
        person_id: Uuid,
        film_work_id: Uuid,
        role: Role,
    ) -> AppResult<person_film_work::Model> {
        let row = person_film_work::ActiveModel {
            person_id: Set(person_id),
            film_work_id: Set(film_work_id),
            role: Set(role),
            ..person_film_work::ActiveModel::new()
        };
        Ok(row.insert(&self.db).await?)
    }

    pub async fn remove_credit(
        &self,
        person_id: Uuid,
        film_work_id: Uuid,
        role: Role,
    ) -> AppResult<u64> {
        let res = person_film_work::Entity::delete_many()
            .filter(person_film_work::Column::PersonId.eq(person_id))
            .filter(person_film_work::Column::FilmWorkId.eq(film_work_id))
            .filter(person_film_work::Column::Role.eq(role))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn genres_of(&self, film: &film_work::Model) -> AppResult<Vec<genre::Model>> {
        Ok(film.find_related(genre::Entity).all(&self.db).await?)
    }

    pub async fn people_of(&self, film: &film_work::Model) -> AppResult<Vec<person::Model>> {
        Ok(film.find_related(person::Entity).all(&self.db).await?)
    }

    pub async fn films_of_genre(&self, genre: &genre::Model) -> AppResult<Vec<film_work::Model>> {
        Ok(genre.find_related(film_work::Entity).all(&self.db).await?)
    }

    pub async fn credits_of(&self, film_work_id: Uuid) -> AppResult<Vec<person_film_work::Model>> {
        Ok(person_film_work::Entity::find()
            .filter(person_film_work::Column::FilmWorkId.eq(film_work_id))
            .all(&self.db)
            .await?)
    }
}
