//! Demo records loaded into an empty store at startup.

use tracing::info;

use super::domain::ClienteInput;
use super::repository::ClienteRepository;
use super::service::ClienteService;
use crate::errors::ServiceError;

const DEMO: [(&str, &str, &str, &str, &str); 20] = [
    ("Juan", "Pérez", "juan.perez@example.com", "1234567890", "CDMX"),
    ("Ana", "García", "ana.garcia@example.com", "6984756648", "Monterrey"),
    ("Carlos", "Rodríguez", "carlos.rodriguez@example.com", "5944957739", "CDMX"),
    ("María", "López", "maria.lopez@example.com", "3746274827", "EDOMEX"),
    ("Pedro", "Martínez", "pedro.martinez@example.com", "3126381652", "Guadalajara"),
    ("Laura", "Sánchez", "laura.sanchez@example.com", "2638154352", "EDOMEX"),
    ("Miguel", "González", "miguel.gonzalez@example.com", "1230984736", "Guadalajara"),
    ("Sofía", "Fernández", "sofia.fernandez@example.com", "9384756232", "Monterrey"),
    ("Javier", "Díaz", "javier.diaz@example.com", "4837502739", "CDMX"),
    ("Carmen", "Ruiz", "carmen.ruiz@example.com", "6758403729", "EDOMEX"),
    ("David", "Moreno", "david.moreno@example.com", "2817394729", "Monterrey"),
    ("Elena", "Jiménez", "elena.jimenez@example.com", "1829301729", "Monterrey"),
    ("Alberto", "Torres", "alberto.torres@example.com", "2736183627", "Guadalajara"),
    ("Lucía", "Vargas", "lucia.vargas@example.com", "2514365869", "EDOMEX"),
    ("Roberto", "Reyes", "roberto.reyes@example.com", "3126459780", "CDMX"),
    ("Isabel", "Navarro", "isabel.navarro@example.com", "9807656432", "Guadalajara"),
    ("Fernando", "Castro", "fernando.castro@example.com", "8263746152", "CDMX"),
    ("Marta", "Ortega", "marta.ortega@example.com", "3748256673", "Monterrey"),
    ("Pablo", "Gallego", "pablo.gallego@example.com", "0192738546", "EDOMEX"),
    ("Cristina", "Vega", "cristina.vega@example.com", "9323847182", "CDMX"),
];

pub fn demo_clientes() -> Vec<ClienteInput> {
    DEMO.iter()
        .map(|(nombre, apellido, email, telefono, ciudad)| ClienteInput::new(nombre, apellido, email, telefono, ciudad))
        .collect()
}

impl<R: ClienteRepository + ?Sized> ClienteService<R> {
    /// Insert `records` only when the store is empty; returns how many were inserted.
    pub async fn seed_if_empty(&self, records: Vec<ClienteInput>) -> Result<usize, ServiceError> {
        if self.count().await? > 0 {
            return Ok(0);
        }
        let mut inserted = 0;
        for input in records {
            self.create(input).await?;
            inserted += 1;
        }
        info!(inserted, "seeded demo clientes");
        Ok(inserted)
    }
}
