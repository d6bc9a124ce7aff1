use async_trait::async_trait;

use super::domain::Cliente;
use crate::errors::ServiceError;

/// Persistence contract for `Cliente` records.
///
/// `save` inserts when `id` is `None` and overwrites the row with that id
/// otherwise. Implementations report a missing row on update as `NotFound`
/// and an email already held by another record as `Conflict`, atomically
/// with the write.
#[async_trait]
pub trait ClienteRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Cliente>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Cliente>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Cliente>, ServiceError>;
    async fn find_by_ciudad(&self, ciudad: &str) -> Result<Vec<Cliente>, ServiceError>;
    async fn save(&self, cliente: Cliente) -> Result<Cliente, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

/// Simple in-memory repository for tests, doc examples and running without a database.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct Rows {
        by_id: BTreeMap<i64, Cliente>,
        // Only grows, so deleted ids are never handed out again.
        last_id: i64,
    }

    #[derive(Default)]
    pub struct InMemoryClienteRepository {
        rows: Mutex<Rows>,
    }

    impl InMemoryClienteRepository {
        fn lock(&self) -> Result<MutexGuard<'_, Rows>, ServiceError> {
            self.rows.lock().map_err(|_| ServiceError::Db("in-memory store lock poisoned".into()))
        }
    }

    #[async_trait]
    impl ClienteRepository for InMemoryClienteRepository {
        async fn find_all(&self) -> Result<Vec<Cliente>, ServiceError> {
            Ok(self.lock()?.by_id.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Cliente>, ServiceError> {
            Ok(self.lock()?.by_id.get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Cliente>, ServiceError> {
            Ok(self.lock()?.by_id.values().find(|c| c.email == email).cloned())
        }

        async fn find_by_ciudad(&self, ciudad: &str) -> Result<Vec<Cliente>, ServiceError> {
            Ok(self.lock()?.by_id.values().filter(|c| c.ciudad == ciudad).cloned().collect())
        }

        async fn save(&self, mut cliente: Cliente) -> Result<Cliente, ServiceError> {
            let mut rows = self.lock()?;
            if rows.by_id.values().any(|c| c.email == cliente.email && c.id != cliente.id) {
                return Err(ServiceError::email_in_use(&cliente.email));
            }
            let id = match cliente.id {
                Some(id) => {
                    if !rows.by_id.contains_key(&id) {
                        return Err(ServiceError::not_found(id));
                    }
                    id
                }
                None => {
                    rows.last_id += 1;
                    rows.last_id
                }
            };
            cliente.id = Some(id);
            rows.by_id.insert(id, cliente.clone());
            Ok(cliente)
        }

        async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.lock()?.by_id.remove(&id).is_some())
        }

        async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.lock()?.by_id.contains_key(&id))
        }

        async fn count(&self) -> Result<u64, ServiceError> {
            Ok(self.lock()?.by_id.len() as u64)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn cliente(email: &str) -> Cliente {
            Cliente {
                id: None,
                nombre: "Juan".into(),
                apellido: "Pérez".into(),
                email: email.into(),
                telefono: "1234567890".into(),
                ciudad: "CDMX".into(),
            }
        }

        #[tokio::test]
        async fn save_assigns_increasing_ids_and_never_reuses_them() {
            let repo = InMemoryClienteRepository::default();
            let a = repo.save(cliente("a@example.com")).await.unwrap();
            let b = repo.save(cliente("b@example.com")).await.unwrap();
            assert_eq!(a.id, Some(1));
            assert_eq!(b.id, Some(2));

            assert!(repo.delete_by_id(2).await.unwrap());
            let c = repo.save(cliente("c@example.com")).await.unwrap();
            assert_eq!(c.id, Some(3));
        }

        #[tokio::test]
        async fn save_rejects_email_held_by_another_record() {
            let repo = InMemoryClienteRepository::default();
            let a = repo.save(cliente("a@example.com")).await.unwrap();
            let res = repo.save(cliente("a@example.com")).await;
            assert!(matches!(res, Err(ServiceError::Conflict(_))));

            // Saving a record with its own email is an update, not a conflict.
            let mut same = a.clone();
            same.ciudad = "Monterrey".into();
            assert_eq!(repo.save(same).await.unwrap().ciudad, "Monterrey");
            assert_eq!(repo.count().await.unwrap(), 1);
        }

        #[tokio::test]
        async fn save_with_unknown_id_is_not_found() {
            let repo = InMemoryClienteRepository::default();
            let mut ghost = cliente("ghost@example.com");
            ghost.id = Some(42);
            assert!(matches!(repo.save(ghost).await, Err(ServiceError::NotFound(_))));
            assert_eq!(repo.count().await.unwrap(), 0);
        }
    }
}
