use serde_json::json;

use crate::company::{self, CompanyPatch, CompanyRead, NewCompany};
use crate::errors::ModelError;
use crate::obligation::{NewObligation, ObligationPatch, ObligationRead};
use crate::Validate;

#[test]
fn new_company_reads_public_field_names() {
    let input: NewCompany = serde_json::from_value(json!({
        "nome": "Empresa Teste",
        "cnpj": "12345678901234",
        "endereco": "Rua Teste, 123",
        "email": "teste@empresa.com",
        "telefone": "11987654321"
    }))
    .unwrap();
    assert_eq!(input.name, "Empresa Teste");
    assert_eq!(input.tax_id, "12345678901234");
    assert_eq!(input.address.as_deref(), Some("Rua Teste, 123"));
    assert_eq!(input.phone.as_deref(), Some("11987654321"));
    assert!(input.validate().is_ok());
}

#[test]
fn new_company_accepts_english_aliases_and_optional_contact_fields() {
    let input: NewCompany = serde_json::from_value(json!({"name": "Acme", "tax_id": "1"})).unwrap();
    assert_eq!(input.name, "Acme");
    assert!(input.address.is_none() && input.email.is_none() && input.phone.is_none());
}

#[test]
fn new_company_requires_tax_id() {
    let res = serde_json::from_value::<NewCompany>(json!({"nome": "Sem CNPJ"}));
    assert!(res.is_err());
}

#[test]
fn blank_required_fields_fail_validation() {
    let input: NewCompany = serde_json::from_value(json!({"nome": "  ", "cnpj": "1"})).unwrap();
    assert_eq!(input.validate(), Err(ModelError::Validation("nome required".into())));

    let patch: CompanyPatch = serde_json::from_value(json!({"cnpj": ""})).unwrap();
    assert!(patch.validate().is_err());
}

#[test]
fn patch_treats_null_and_missing_alike() {
    let patch: CompanyPatch = serde_json::from_value(json!({"nome": "X", "email": null})).unwrap();
    assert_eq!(patch.name.as_deref(), Some("X"));
    assert!(patch.email.is_none() && patch.tax_id.is_none());
    assert!(!patch.is_empty());
    assert!(CompanyPatch::default().is_empty());
}

#[test]
fn patch_apply_only_touches_present_fields() {
    use sea_orm::{ActiveValue, IntoActiveModel};

    let stored = company::Model {
        id: 1,
        name: "Old".into(),
        tax_id: "123".into(),
        address: Some("Rua A".into()),
        email: None,
        phone: None,
    };
    let mut am = stored.into_active_model();
    CompanyPatch { name: Some("New".into()), ..Default::default() }.apply(&mut am);

    assert_eq!(am.name, ActiveValue::Set("New".to_string()));
    assert_eq!(am.tax_id, ActiveValue::Unchanged("123".to_string()));
    assert_eq!(am.address, ActiveValue::Unchanged(Some("Rua A".to_string())));
}

#[test]
fn company_read_emits_public_field_names() {
    let read = CompanyRead::from(company::Model {
        id: 7,
        name: "Acme".into(),
        tax_id: "99".into(),
        address: None,
        email: Some("a@acme.com".into()),
        phone: None,
    });
    let v = serde_json::to_value(&read).unwrap();
    assert_eq!(v["id"], 7);
    assert_eq!(v["nome"], "Acme");
    assert_eq!(v["cnpj"], "99");
    assert!(v["endereco"].is_null());
    assert_eq!(v["email"], "a@acme.com");
    assert!(v.get("name").is_none());
}

#[test]
fn obligation_shapes_use_public_field_names() {
    let input: NewObligation = serde_json::from_value(json!({
        "nome": "Obrigacao Teste",
        "periodicidade": "Mensal",
        "empresa_id": 1
    }))
    .unwrap();
    assert_eq!(input.company_ref, 1);
    assert_eq!(input.periodicity.as_deref(), Some("Mensal"));

    let missing_company = serde_json::from_value::<NewObligation>(json!({"nome": "x"}));
    assert!(missing_company.is_err());

    let wrong_type = serde_json::from_value::<NewObligation>(json!({"nome": "x", "empresa_id": "one"}));
    assert!(wrong_type.is_err());

    let read = ObligationRead { id: 3, name: "DCTF".into(), periodicity: None, company_ref: 1 };
    let v = serde_json::to_value(&read).unwrap();
    assert_eq!(v["empresa_id"], 1);
    assert!(v["periodicidade"].is_null());

    let patch: ObligationPatch = serde_json::from_value(json!({"periodicidade": "Anual"})).unwrap();
    assert!(patch.name.is_none() && patch.company_ref.is_none());
    assert!(patch.validate().is_ok());
}
