use sea_orm::{entity::prelude::*, sea_query::ForeignKeyAction, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::company;
use crate::errors::ModelError;
use crate::validation::{optional_non_blank, require_non_blank, Validate};

/// A recurring filing/reporting duty owned by a company.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "obligations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub periodicity: Option<String>,
    pub company_ref: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Company,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Company => Entity::belongs_to(company::Entity)
                .from(Column::CompanyRef)
                .to(company::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef { Relation::Company.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewObligation {
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    #[serde(rename = "periodicidade", alias = "periodicity", default)]
    pub periodicity: Option<String>,
    #[serde(rename = "empresa_id", alias = "company_ref")]
    pub company_ref: i32,
}

impl NewObligation {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            periodicity: Set(self.periodicity),
            company_ref: Set(self.company_ref),
        }
    }
}

impl Validate for NewObligation {
    fn validate(&self) -> Result<(), ModelError> {
        require_non_blank("nome", &self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObligationPatch {
    #[serde(rename = "nome", alias = "name", default)]
    pub name: Option<String>,
    #[serde(rename = "periodicidade", alias = "periodicity", default)]
    pub periodicity: Option<String>,
    #[serde(rename = "empresa_id", alias = "company_ref", default)]
    pub company_ref: Option<i32>,
}

impl ObligationPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.periodicity.is_none() && self.company_ref.is_none()
    }

    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.name { am.name = Set(v); }
        if let Some(v) = self.periodicity { am.periodicity = Set(Some(v)); }
        if let Some(v) = self.company_ref { am.company_ref = Set(v); }
    }
}

impl Validate for ObligationPatch {
    fn validate(&self) -> Result<(), ModelError> {
        optional_non_blank("nome", self.name.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObligationRead {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "periodicidade")]
    pub periodicity: Option<String>,
    #[serde(rename = "empresa_id")]
    pub company_ref: i32,
}

impl From<Model> for ObligationRead {
    fn from(m: Model) -> Self {
        Self { id: m.id, name: m.name, periodicity: m.periodicity, company_ref: m.company_ref }
    }
}
