use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Cliente, ClienteInput};
use super::repository::ClienteRepository;
use crate::errors::ServiceError;

/// Business service for `Cliente` records, independent of web framework.
///
/// The repository is injected at construction; `R` may be a trait object so the
/// transport layer can hold `ClienteService<dyn ClienteRepository>`.
pub struct ClienteService<R: ClienteRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ClienteRepository + ?Sized> ClienteService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list_all(&self) -> Result<Vec<Cliente>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Cliente, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(id))
    }

    /// Exact, case-sensitive match on `ciudad`.
    pub async fn list_by_ciudad(&self, ciudad: &str) -> Result<Vec<Cliente>, ServiceError> {
        self.repo.find_by_ciudad(ciudad).await
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        self.repo.count().await
    }

    /// Validate and store a new record.
    ///
    /// # Examples
    /// ```
    /// use service::clientes::{ClienteInput, ClienteService, repository::mock::InMemoryClienteRepository};
    /// use std::sync::Arc;
    /// let svc = ClienteService::new(Arc::new(InMemoryClienteRepository::default()));
    /// let input = ClienteInput::new("Juan", "Pérez", "juan.perez@example.com", "1234567890", "CDMX");
    /// let created = tokio_test::block_on(svc.create(input.clone())).unwrap();
    /// assert_eq!(created.id, Some(1));
    /// assert!(tokio_test::block_on(svc.create(input)).is_err());
    /// ```
    #[instrument(skip(self, input), fields(email = ?input.email))]
    pub async fn create(&self, input: ClienteInput) -> Result<Cliente, ServiceError> {
        input.validate_for_create()?;
        let nuevo = input.into_new_cliente();

        if let Some(existing) = self.repo.find_by_email(&nuevo.email).await? {
            debug!(existing_id = ?existing.id, "email already registered");
            return Err(ServiceError::email_in_use(&nuevo.email));
        }

        let email = nuevo.email.clone();
        let saved = self.repo.save(nuevo).await.map_err(|e| match e {
            // Lost a race with a concurrent writer.
            ServiceError::Conflict(_) => ServiceError::email_in_use(&email),
            other => other,
        })?;
        info!(id = ?saved.id, "cliente_created");
        Ok(saved)
    }

    /// Partial update: only fields present in `input` change.
    ///
    /// Re-submitting the record's current email is not a conflict.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: ClienteInput) -> Result<Cliente, ServiceError> {
        input.validate_for_update()?;
        let mut existing = self.get_by_id(id).await?;

        if let Some(email) = input.email.as_deref().filter(|e| *e != existing.email) {
            if let Some(holder) = self.repo.find_by_email(email).await? {
                if holder.id != Some(id) {
                    return Err(ServiceError::email_in_use(email));
                }
            }
        }

        input.merge_into(&mut existing);
        let email = existing.email.clone();
        let saved = self.repo.save(existing).await.map_err(|e| match e {
            ServiceError::Conflict(_) => ServiceError::email_in_use(&email),
            other => other,
        })?;
        info!(id, "cliente_updated");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(ServiceError::not_found(id));
        }
        if !self.repo.delete_by_id(id).await? {
            // Removed by someone else between the two calls.
            return Err(ServiceError::not_found(id));
        }
        info!(id, "cliente_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clientes::repository::mock::InMemoryClienteRepository;

    fn svc() -> ClienteService<InMemoryClienteRepository> {
        ClienteService::new(Arc::new(InMemoryClienteRepository::default()))
    }

    fn juan() -> ClienteInput {
        ClienteInput::new("Juan", "Pérez", "juan.perez@example.com", "1234567890", "CDMX")
    }

    fn ana() -> ClienteInput {
        ClienteInput::new("Ana", "García", "ana.garcia@example.com", "6984756648", "Monterrey")
    }

    #[tokio::test]
    async fn create_then_get_returns_input_plus_id() {
        let svc = svc();
        let created = svc.create(juan()).await.unwrap();
        let id = created.id.unwrap();

        let fetched = svc.get_by_id(id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.nombre, "Juan");
        assert_eq!(fetched.apellido, "Pérez");
        assert_eq!(fetched.email, "juan.perez@example.com");
        assert_eq!(fetched.telefono, "1234567890");
        assert_eq!(fetched.ciudad, "CDMX");
    }

    #[tokio::test]
    async fn scenario_empty_store_create_list_duplicate() {
        let svc = svc();
        let created = svc.create(juan()).await.unwrap();
        assert_eq!(created.id, Some(1));

        let all = svc.list_all().await.unwrap();
        assert_eq!(all, vec![created]);

        let dup = svc.create(juan()).await;
        match dup {
            Err(ServiceError::Conflict(msg)) => assert!(msg.contains("juan.perez@example.com")),
            other => panic!("expected conflict, got {other:?}"),
        }
        assert_eq!(svc.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn create_with_invalid_input_does_not_touch_store() {
        let svc = svc();
        let bad = ClienteInput { nombre: Some(" ".into()), email: Some("nope".into()), ..juan() };
        match svc.create(bad).await {
            Err(ServiceError::Validation(e)) => {
                assert_eq!(e.len(), 2);
                assert!(e.get("nombre").is_some());
                assert!(e.get("email").is_some());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(svc.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn get_missing_is_not_found_with_id_in_message() {
        match svc().get_by_id(99).await {
            Err(ServiceError::NotFound(msg)) => assert!(msg.contains("99")),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_city_only_changes_city() {
        let svc = svc();
        let before = svc.create(juan()).await.unwrap();
        let id = before.id.unwrap();

        let after = svc
            .update(id, ClienteInput { ciudad: Some("X".into()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(after, Cliente { ciudad: "X".into(), ..before });
        assert_eq!(svc.get_by_id(id).await.unwrap(), after);
    }

    #[tokio::test]
    async fn update_several_fields() {
        let svc = svc();
        let id = svc.create(juan()).await.unwrap().id.unwrap();
        let input = ClienteInput {
            nombre: Some("Juan Carlos".into()),
            telefono: Some("4657377488".into()),
            ..Default::default()
        };
        let updated = svc.update(id, input).await.unwrap();
        assert_eq!(updated.nombre, "Juan Carlos");
        assert_eq!(updated.telefono, "4657377488");
        assert_eq!(updated.apellido, "Pérez");
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let res = svc().update(5, ClienteInput { ciudad: Some("X".into()), ..Default::default() }).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_to_email_of_another_record_conflicts() {
        let svc = svc();
        let juan_id = svc.create(juan()).await.unwrap().id.unwrap();
        svc.create(ana()).await.unwrap();

        let res = svc
            .update(juan_id, ClienteInput { email: Some("ana.garcia@example.com".into()), ciudad: Some("X".into()), ..Default::default() })
            .await;
        assert!(matches!(res, Err(ServiceError::Conflict(_))));
        // nothing applied
        assert_eq!(svc.get_by_id(juan_id).await.unwrap().ciudad, "CDMX");
    }

    #[tokio::test]
    async fn update_with_same_email_is_not_a_conflict() {
        let svc = svc();
        let id = svc.create(juan()).await.unwrap().id.unwrap();
        let updated = svc.update(id, juan()).await.unwrap();
        assert_eq!(updated.email, "juan.perez@example.com");
    }

    #[tokio::test]
    async fn update_with_blank_field_is_rejected() {
        let svc = svc();
        let id = svc.create(juan()).await.unwrap().id.unwrap();
        let res = svc.update(id, ClienteInput { apellido: Some("".into()), ..Default::default() }).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        assert_eq!(svc.get_by_id(id).await.unwrap().apellido, "Pérez");
    }

    #[tokio::test]
    async fn delete_then_get_and_delete_again_are_not_found() {
        let svc = svc();
        let id = svc.create(juan()).await.unwrap().id.unwrap();
        svc.create(ana()).await.unwrap();

        svc.delete(id).await.unwrap();
        assert!(matches!(svc.get_by_id(id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(id).await, Err(ServiceError::NotFound(_))));
        assert_eq!(svc.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn list_by_city_is_exact_subset() {
        let svc = svc();
        svc.create(juan()).await.unwrap();
        svc.create(ana()).await.unwrap();
        svc.create(ClienteInput::new("Carlos", "Rodríguez", "carlos.rodriguez@example.com", "5944957739", "CDMX")).await.unwrap();

        let cdmx = svc.list_by_ciudad("CDMX").await.unwrap();
        assert_eq!(cdmx.len(), 2);
        assert!(cdmx.iter().all(|c| c.ciudad == "CDMX"));

        assert!(svc.list_by_ciudad("cdmx").await.unwrap().is_empty());
        assert!(svc.list_by_ciudad("Tijuana").await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_with_same_email_let_one_through() {
        let svc = Arc::new(svc());
        let mut handles = Vec::new();
        for i in 0..8 {
            let svc = Arc::clone(&svc);
            handles.push(tokio::spawn(async move {
                let input = ClienteInput { telefono: Some(format!("{i}")), ..juan() };
                svc.create(input).await
            }));
        }
        let mut ok = 0;
        let mut conflicts = 0;
        for h in handles {
            match h.await.unwrap() {
                Ok(_) => ok += 1,
                Err(ServiceError::Conflict(_)) => conflicts += 1,
                Err(e) => panic!("unexpected error {e}"),
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(conflicts, 7);
        assert_eq!(svc.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn long_field_values_are_accepted() {
        let svc = svc();
        let phone = "+52 (55) 1234-5678 ext. 1234567890";
        let input = ClienteInput { telefono: Some(phone.into()), ..juan() };
        let created = svc.create(input).await.unwrap();
        assert_eq!(created.telefono, phone);

        let ciudad = "San Pedro Garza Garcia ".repeat(8);
        let updated = svc
            .update(created.id.unwrap(), ClienteInput { ciudad: Some(ciudad.clone()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(updated.ciudad, ciudad);
    }
}
