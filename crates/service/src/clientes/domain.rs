use models::cliente::{self, APELLIDO, CIUDAD, NOMBRE, TELEFONO};
use models::errors::FieldErrors;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Customer record as seen by the business layer.
///
/// `id` is `None` until the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cliente {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub telefono: String,
    pub ciudad: String,
}

/// Create/update payload. Every field is optional so the same type carries
/// full bodies on create and partial bodies on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClienteInput {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub ciudad: Option<String>,
}

impl ClienteInput {
    pub fn new(nombre: &str, apellido: &str, email: &str, telefono: &str, ciudad: &str) -> Self {
        Self {
            nombre: Some(nombre.to_string()),
            apellido: Some(apellido.to_string()),
            email: Some(email.to_string()),
            telefono: Some(telefono.to_string()),
            ciudad: Some(ciudad.to_string()),
        }
    }

    /// Every field must be present, non-blank, and the email well formed.
    /// All violations are reported together.
    pub fn validate_for_create(&self) -> Result<(), ServiceError> {
        let mut errors = FieldErrors::new();
        errors.absorb(cliente::validate_required(NOMBRE, self.nombre.as_deref().unwrap_or_default()));
        errors.absorb(cliente::validate_required(APELLIDO, self.apellido.as_deref().unwrap_or_default()));
        errors.absorb(cliente::validate_email(self.email.as_deref().unwrap_or_default()));
        errors.absorb(cliente::validate_required(TELEFONO, self.telefono.as_deref().unwrap_or_default()));
        errors.absorb(cliente::validate_required(CIUDAD, self.ciudad.as_deref().unwrap_or_default()));
        errors.into_result().map_err(ServiceError::from)
    }

    /// Absent fields are fine; supplied ones follow the create rules.
    pub fn validate_for_update(&self) -> Result<(), ServiceError> {
        let mut errors = FieldErrors::new();
        if let Some(v) = &self.nombre { errors.absorb(cliente::validate_required(NOMBRE, v)); }
        if let Some(v) = &self.apellido { errors.absorb(cliente::validate_required(APELLIDO, v)); }
        if let Some(v) = &self.email { errors.absorb(cliente::validate_email(v)); }
        if let Some(v) = &self.telefono { errors.absorb(cliente::validate_required(TELEFONO, v)); }
        if let Some(v) = &self.ciudad { errors.absorb(cliente::validate_required(CIUDAD, v)); }
        errors.into_result().map_err(ServiceError::from)
    }

    /// Unsaved record from a validated create payload.
    pub fn into_new_cliente(self) -> Cliente {
        Cliente {
            id: None,
            nombre: self.nombre.unwrap_or_default(),
            apellido: self.apellido.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            telefono: self.telefono.unwrap_or_default(),
            ciudad: self.ciudad.unwrap_or_default(),
        }
    }

    /// Partial merge: supplied fields overwrite, absent ones are kept.
    pub fn merge_into(self, target: &mut Cliente) {
        if let Some(v) = self.nombre { target.nombre = v; }
        if let Some(v) = self.apellido { target.apellido = v; }
        if let Some(v) = self.email { target.email = v; }
        if let Some(v) = self.telefono { target.telefono = v; }
        if let Some(v) = self.ciudad { target.ciudad = v; }
    }
}

impl From<cliente::Model> for Cliente {
    fn from(m: cliente::Model) -> Self {
        Self {
            id: Some(m.id),
            nombre: m.nombre,
            apellido: m.apellido,
            email: m.email,
            telefono: m.telefono,
            ciudad: m.ciudad,
        }
    }
}
