use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::obligation;
use crate::validation::{optional_non_blank, require_non_blank, Validate};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub tax_id: String,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Obligation,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Obligation => Entity::has_many(obligation::Entity).into() }
    }
}

impl Related<obligation::Entity> for Entity {
    fn to() -> RelationDef { Relation::Obligation.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Create body for `POST /v1/companies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    #[serde(rename = "cnpj", alias = "tax_id")]
    pub tax_id: String,
    #[serde(rename = "endereco", alias = "address", default)]
    pub address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefone", alias = "phone", default)]
    pub phone: Option<String>,
}

impl NewCompany {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            tax_id: Set(self.tax_id),
            address: Set(self.address),
            email: Set(self.email),
            phone: Set(self.phone),
        }
    }
}

impl Validate for NewCompany {
    fn validate(&self) -> Result<(), ModelError> {
        require_non_blank("nome", &self.name)?;
        require_non_blank("cnpj", &self.tax_id)
    }
}

/// Update body for `PUT /v1/companies/{id}`; omitted or null fields stay as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPatch {
    #[serde(rename = "nome", alias = "name", default)]
    pub name: Option<String>,
    #[serde(rename = "cnpj", alias = "tax_id", default)]
    pub tax_id: Option<String>,
    #[serde(rename = "endereco", alias = "address", default)]
    pub address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefone", alias = "phone", default)]
    pub phone: Option<String>,
}

impl CompanyPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.tax_id.is_none()
            && self.address.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }

    /// Overwrite only the columns this patch carries.
    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.name { am.name = Set(v); }
        if let Some(v) = self.tax_id { am.tax_id = Set(v); }
        if let Some(v) = self.address { am.address = Set(Some(v)); }
        if let Some(v) = self.email { am.email = Set(Some(v)); }
        if let Some(v) = self.phone { am.phone = Set(Some(v)); }
    }
}

impl Validate for CompanyPatch {
    fn validate(&self) -> Result<(), ModelError> {
        optional_non_blank("nome", self.name.as_deref())?;
        optional_non_blank("cnpj", self.tax_id.as_deref())
    }
}

/// Response shape for every company endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRead {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cnpj")]
    pub tax_id: String,
    #[serde(rename = "endereco")]
    pub address: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
}

impl From<Model> for CompanyRead {
    fn from(m: Model) -> Self {
        Self { id: m.id, name: m.name, tax_id: m.tax_id, address: m.address, email: m.email, phone: m.phone }
    }
}
