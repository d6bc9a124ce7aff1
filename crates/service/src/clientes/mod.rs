//! Cliente module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;
pub mod seed;

pub use domain::{Cliente, ClienteInput};
pub use repository::ClienteRepository;
pub use service::ClienteService;
