//! Service layer: the persistence gateway and data access on top of `models`.
//! - `store` opens one unit-of-work per request and owns commit/rollback.
//! - `repository` implements get/create/update/delete once, generic over the entity.
//! - `company` / `obligation` plug the two entities into the repository.

pub mod errors;
pub mod store;
pub mod repository;
pub mod company;
pub mod obligation;
#[cfg(test)]
pub mod test_support;

pub use company::{Companies, CompanyRepository};
pub use obligation::{ObligationRepository, Obligations};
pub use repository::{Repository, Resource};
pub use store::{Session, Store};
