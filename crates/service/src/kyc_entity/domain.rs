use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use models::{entity_address, entity_date, entity_name, kyc_entity};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Name {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub surname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityDate {
    /// e.g. `birth`, `death`
    pub date_type: Option<String>,
    pub date: Option<NaiveDate>,
}

/// A KYC entity with its child collections fully materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycEntity {
    pub id: String,
    pub addresses: Vec<Address>,
    pub dates: Vec<EntityDate>,
    pub deceased: bool,
    pub gender: Option<String>,
    pub names: Vec<Name>,
}

/// Body of create and update requests. Missing fields take their defaults;
/// there is no validation step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityPayload {
    pub addresses: Vec<Address>,
    pub dates: Vec<EntityDate>,
    pub deceased: bool,
    pub gender: Option<String>,
    pub names: Vec<Name>,
}

impl KycEntity {
    /// The entity a payload describes once it has been stored under `id`.
    pub fn from_payload(id: impl Into<String>, payload: EntityPayload) -> Self {
        Self {
            id: id.into(),
            addresses: payload.addresses,
            dates: payload.dates,
            deceased: payload.deceased,
            gender: payload.gender,
            names: payload.names,
        }
    }

    pub fn from_rows(
        root: kyc_entity::Model,
        addresses: Vec<entity_address::Model>,
        names: Vec<entity_name::Model>,
        dates: Vec<entity_date::Model>,
    ) -> Self {
        Self {
            id: root.id,
            addresses: addresses.into_iter().map(Address::from).collect(),
            dates: dates.into_iter().map(EntityDate::from).collect(),
            deceased: root.deceased,
            gender: root.gender,
            names: names.into_iter().map(Name::from).collect(),
        }
    }
}

impl From<entity_address::Model> for Address {
    fn from(m: entity_address::Model) -> Self {
        Self { address_line: m.address_line, city: m.city, postal_code: m.postal_code, country: m.country }
    }
}

impl From<entity_name::Model> for Name {
    fn from(m: entity_name::Model) -> Self {
        Self { first_name: m.first_name, middle_name: m.middle_name, surname: m.surname }
    }
}

impl From<entity_date::Model> for EntityDate {
    fn from(m: entity_date::Model) -> Self {
        Self { date_type: m.date_type, date: m.event_date }
    }
}

/// Address predicate: an entity matches when any of its addresses does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressFilter {
    /// Exact, case-sensitive country comparison.
    CountryEquals(String),
    /// Case-insensitive substring of the address line.
    LineContains(String),
}

/// Name predicate: an entity matches when any of its names does.
/// All variants are case-insensitive substring searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    FirstNameContains(String),
    MiddleNameContains(String),
    SurnameContains(String),
}

impl AddressFilter {
    pub fn matches(&self, address: &Address) -> bool {
        match self {
            AddressFilter::CountryEquals(c) => address.country.as_deref() == Some(c.as_str()),
            AddressFilter::LineContains(s) => contains_ignore_case(address.address_line.as_deref(), s),
        }
    }

    pub fn matches_entity(&self, entity: &KycEntity) -> bool {
        entity.addresses.iter().any(|a| self.matches(a))
    }
}

impl NameFilter {
    pub fn matches(&self, name: &Name) -> bool {
        match self {
            NameFilter::FirstNameContains(s) => contains_ignore_case(name.first_name.as_deref(), s),
            NameFilter::MiddleNameContains(s) => contains_ignore_case(name.middle_name.as_deref(), s),
            NameFilter::SurnameContains(s) => contains_ignore_case(name.surname.as_deref(), s),
        }
    }

    pub fn matches_entity(&self, entity: &KycEntity) -> bool {
        entity.names.iter().any(|n| self.matches(n))
    }
}

/// Both sides are folded by the same function. Null fields never match,
/// mirroring SQL `NULL LIKE ...`.
pub fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    match haystack {
        Some(h) => h.to_lowercase().contains(&needle.to_lowercase()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(line: &str, country: &str) -> Address {
        Address { address_line: Some(line.into()), country: Some(country.into()), ..Default::default() }
    }

    #[test]
    fn payload_defaults_missing_fields() {
        let p: EntityPayload = serde_json::from_str(r#"{"gender":"F"}"#).unwrap();
        assert_eq!(p.gender.as_deref(), Some("F"));
        assert!(!p.deceased);
        assert!(p.addresses.is_empty() && p.names.is_empty() && p.dates.is_empty());
    }

    #[test]
    fn entity_serializes_camel_case() {
        let e = KycEntity::from_payload(
            "abc",
            EntityPayload {
                addresses: vec![address("123 Main St", "US")],
                names: vec![Name { first_name: Some("Ada".into()), ..Default::default() }],
                dates: vec![EntityDate { date_type: Some("birth".into()), date: NaiveDate::from_ymd_opt(1815, 12, 10) }],
                deceased: true,
                gender: None,
            },
        );
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["id"], "abc");
        assert_eq!(v["addresses"][0]["addressLine"], "123 Main St");
        assert_eq!(v["names"][0]["firstName"], "Ada");
        assert_eq!(v["dates"][0]["dateType"], "birth");
        assert_eq!(v["dates"][0]["date"], "1815-12-10");
        assert_eq!(v["deceased"], true);
    }

    #[test]
    fn country_filter_is_exact() {
        let f = AddressFilter::CountryEquals("US".into());
        assert!(f.matches(&address("1 A St", "US")));
        assert!(!f.matches(&address("1 A St", "USA")));
        assert!(!f.matches(&address("1 A St", "us")));
    }

    #[test]
    fn line_filter_is_case_insensitive_substring() {
        let f = AddressFilter::LineContains("Main".into());
        assert!(f.matches(&address("123 Main St", "US")));
        assert!(f.matches(&address("9 MAINLAND Rd", "US")));
        assert!(!f.matches(&address("456 Elm St", "US")));
        assert!(!f.matches(&Address::default()));
    }

    #[test]
    fn name_filters_target_their_field() {
        let n = Name { first_name: Some("Ada".into()), middle_name: Some("Augusta".into()), surname: Some("Lovelace".into()) };
        assert!(NameFilter::FirstNameContains("ad".into()).matches(&n));
        assert!(NameFilter::MiddleNameContains("gust".into()).matches(&n));
        assert!(NameFilter::SurnameContains("LACE".into()).matches(&n));
        assert!(!NameFilter::SurnameContains("Ada".into()).matches(&n));
    }
}
