use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, FieldErrors};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cliente")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    #[sea_orm(unique)]
    pub email: String,
    pub telefono: String,
    pub ciudad: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const NOMBRE: &str = "nombre";
pub const APELLIDO: &str = "apellido";
pub const EMAIL: &str = "email";
pub const TELEFONO: &str = "telefono";
pub const CIUDAD: &str = "ciudad";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$")
        .expect("email regex compiles")
});

/// Whitespace-only counts as blank.
pub fn validate_required(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(FieldErrors::single(field, "must not be blank")));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    validate_required(EMAIL, email)?;
    if !EMAIL_RE.is_match(email) {
        return Err(errors::ModelError::Validation(FieldErrors::single(EMAIL, "invalid email format")));
    }
    Ok(())
}

/// Field values for an insert; the id comes from the table's sequence.
#[derive(Clone, Debug)]
pub struct NewCliente<'a> {
    pub nombre: &'a str,
    pub apellido: &'a str,
    pub email: &'a str,
    pub telefono: &'a str,
    pub ciudad: &'a str,
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(errors::ModelError::from_db)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(errors::ModelError::from_db)
}

pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Email.eq(email))
        .one(db)
        .await
        .map_err(errors::ModelError::from_db)
}

pub async fn find_by_ciudad(db: &DatabaseConnection, ciudad: &str) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Ciudad.eq(ciudad))
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(errors::ModelError::from_db)
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, errors::ModelError> {
    Entity::find().count(db).await.map_err(errors::ModelError::from_db)
}

pub async fn create(db: &DatabaseConnection, new: NewCliente<'_>) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        nombre: Set(new.nombre.to_string()),
        apellido: Set(new.apellido.to_string()),
        email: Set(new.email.to_string()),
        telefono: Set(new.telefono.to_string()),
        ciudad: Set(new.ciudad.to_string()),
    };
    am.insert(db).await.map_err(errors::ModelError::from_db)
}

/// Overwrite every column of the row identified by `model.id`.
pub async fn update(db: &DatabaseConnection, model: Model) -> Result<Model, errors::ModelError> {
    let id = model.id;
    let am = ActiveModel {
        id: sea_orm::ActiveValue::Unchanged(model.id),
        nombre: Set(model.nombre),
        apellido: Set(model.apellido),
        email: Set(model.email),
        telefono: Set(model.telefono),
        ciudad: Set(model.ciudad),
    };
    am.update(db).await.map_err(|e| match errors::ModelError::from_db(e) {
        errors::ModelError::NotFound(_) => errors::ModelError::NotFound(format!("cliente {id} not found")),
        other => other,
    })
}

/// Returns true if a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(errors::ModelError::from_db)?;
    Ok(res.rows_affected > 0)
}
