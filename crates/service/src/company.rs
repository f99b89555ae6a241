use sea_orm::{DeleteMany, EntityTrait, Select};

use models::company::{self, CompanyPatch, NewCompany};

use crate::repository::{Repository, Resource};

/// Company rows; deleting one cascades to its obligations at the storage level.
pub struct Companies;

impl Resource for Companies {
    type Entity = company::Entity;
    type Model = company::Model;
    type ActiveModel = company::ActiveModel;
    type New = NewCompany;
    type Patch = CompanyPatch;

    const NAME: &'static str = "company";

    fn id(model: &company::Model) -> i32 { model.id }

    fn find_by_id(id: i32) -> Select<company::Entity> { company::Entity::find_by_id(id) }

    fn delete_by_id(id: i32) -> DeleteMany<company::Entity> { company::Entity::delete_by_id(id) }

    fn new_active_model(input: NewCompany) -> company::ActiveModel { input.into_active_model() }

    fn apply_patch(patch: CompanyPatch, am: &mut company::ActiveModel) { patch.apply(am) }
}

pub type CompanyRepository = Repository<Companies>;
