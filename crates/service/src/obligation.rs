use sea_orm::{DeleteMany, EntityTrait, Select};

use models::obligation::{self, NewObligation, ObligationPatch};

use crate::repository::{Repository, Resource};

/// Obligation rows. `company_ref` is not checked here; the foreign key rejects
/// unknown companies at insert/update time.
pub struct Obligations;

impl Resource for Obligations {
    type Entity = obligation::Entity;
    type Model = obligation::Model;
    type ActiveModel = obligation::ActiveModel;
    type New = NewObligation;
    type Patch = ObligationPatch;

    const NAME: &'static str = "obligation";

    fn id(model: &obligation::Model) -> i32 { model.id }

    fn find_by_id(id: i32) -> Select<obligation::Entity> { obligation::Entity::find_by_id(id) }

    fn delete_by_id(id: i32) -> DeleteMany<obligation::Entity> { obligation::Entity::delete_by_id(id) }

    fn new_active_model(input: NewObligation) -> obligation::ActiveModel { input.into_active_model() }

    fn apply_patch(patch: ObligationPatch, am: &mut obligation::ActiveModel) { patch.apply(am) }
}

pub type ObligationRepository = Repository<Obligations>;
