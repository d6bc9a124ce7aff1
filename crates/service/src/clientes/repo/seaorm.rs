use async_trait::async_trait;
use models::cliente::{self, NewCliente};
use sea_orm::DatabaseConnection;

use crate::clientes::domain::Cliente;
use crate::clientes::repository::ClienteRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
///
/// Email uniqueness rests on the table's unique constraint; a losing writer
/// gets `Conflict`.
pub struct SeaOrmClienteRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmClienteRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ClienteRepository for SeaOrmClienteRepository {
    async fn find_all(&self) -> Result<Vec<Cliente>, ServiceError> {
        let rows = cliente::find_all(&self.db).await?;
        Ok(rows.into_iter().map(Cliente::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Cliente>, ServiceError> {
        Ok(cliente::find_by_id(&self.db, id).await?.map(Cliente::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Cliente>, ServiceError> {
        Ok(cliente::find_by_email(&self.db, email).await?.map(Cliente::from))
    }

    async fn find_by_ciudad(&self, ciudad: &str) -> Result<Vec<Cliente>, ServiceError> {
        let rows = cliente::find_by_ciudad(&self.db, ciudad).await?;
        Ok(rows.into_iter().map(Cliente::from).collect())
    }

    async fn save(&self, c: Cliente) -> Result<Cliente, ServiceError> {
        let saved = match c.id {
            None => {
                cliente::create(&self.db, NewCliente {
                    nombre: &c.nombre,
                    apellido: &c.apellido,
                    email: &c.email,
                    telefono: &c.telefono,
                    ciudad: &c.ciudad,
                })
                .await?
            }
            Some(id) => {
                cliente::update(&self.db, cliente::Model {
                    id,
                    nombre: c.nombre,
                    apellido: c.apellido,
                    email: c.email,
                    telefono: c.telefono,
                    ciudad: c.ciudad,
                })
                .await?
            }
        };
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(cliente::delete(&self.db, id).await?)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(cliente::find_by_id(&self.db, id).await?.is_some())
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(cliente::count(&self.db).await?)
    }
}
