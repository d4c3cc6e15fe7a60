//! The financial products offered by the agency, loaded once from `content/services.yaml`.
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use thiserror::Error;

const BUILTIN_SERVICES: &str = include_str!("../content/services.yaml");

/// Identifier of a service, as used in `/services/<id>/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ServiceId {
    UnitTrust,
    Prs,
    Insurance,
    Medical,
    Estate,
    Corporate,
}

impl ServiceId {
    /// Every service, in the order they appear in the navigation.
    pub const ALL: [ServiceId; 6] = [
        ServiceId::UnitTrust,
        ServiceId::Prs,
        ServiceId::Insurance,
        ServiceId::Medical,
        ServiceId::Estate,
        ServiceId::Corporate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceId::UnitTrust => "unit-trust",
            ServiceId::Prs => "prs",
            ServiceId::Insurance => "insurance",
            ServiceId::Medical => "medical",
            ServiceId::Estate => "estate",
            ServiceId::Corporate => "corporate",
        }
    }

    /// URL of the detail page of this service.
    pub fn url(self) -> String {
        format!("/services/{}/", self.as_str())
    }
}

impl Display for ServiceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownService(s.to_string()))
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub title: String,
    pub long_desc: String,
    pub benefits: Vec<String>,
    pub image: String,
    pub gallery: Option<Vec<String>>,
    pub detailed_sections: Option<Vec<DetailSection>>,
}

/// The short form of a service used by the navigation dropdown and the services listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSummary {
    pub id: ServiceId,
    pub name: String,
    pub menu_desc: String,
    pub short_desc: String,
    pub listing_image: String,
}

/// Result of looking up a service by the identifier found in a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceLookup<'a> {
    Found(&'a ServiceRecord),
    NotFound,
}

#[derive(Deserialize)]
struct RawService {
    id: String,
    title: String,
    long_desc: String,
    benefits: Vec<String>,
    image: String,
    gallery: Option<Vec<String>>,
    detailed_sections: Option<Vec<DetailSection>>,
    summary: RawSummary,
}

#[derive(Deserialize)]
struct RawSummary {
    name: String,
    menu_desc: String,
    short_desc: String,
    listing_image: String,
}

#[derive(Error)]
pub enum CatalogError {
    #[error("Unknown service identifier `{0}`")]
    UnknownService(String),

    #[error("The catalog has no record for the service `{0}`")]
    MissingService(ServiceId),

    #[error("The service `{0}` is defined more than once")]
    DuplicateService(ServiceId),

    #[error("The service `{id}` has no {field}")]
    IncompleteRecord { id: ServiceId, field: &'static str },

    #[error("The title `{0}` is used by more than one service")]
    DuplicateTitle(String),

    #[error("Failed to parse the service catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl Debug for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Immutable mapping from [`ServiceId`] to its content. Built once at startup and handed to the pages.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: FxHashMap<ServiceId, ServiceRecord>,
    summaries: Vec<ServiceSummary>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_SERVICES)
    }

    /// Parses and validates a catalog document. Every [`ServiceId`] must be defined exactly once, with a unique, non-empty title and at least one benefit.
    pub fn from_yaml_str(source: &str) -> Result<Self, CatalogError> {
        let raw_services: Vec<RawService> = serde_yaml::from_str(source)?;

        let mut records = FxHashMap::default();
        let mut summaries = Vec::with_capacity(raw_services.len());
        let mut titles = FxHashSet::default();

        for raw in raw_services {
            let id: ServiceId = raw.id.parse()?;

            if raw.title.trim().is_empty() {
                return Err(CatalogError::IncompleteRecord { id, field: "title" });
            }
            if raw.benefits.is_empty() {
                return Err(CatalogError::IncompleteRecord {
                    id,
                    field: "benefits",
                });
            }
            if !titles.insert(raw.title.clone()) {
                return Err(CatalogError::DuplicateTitle(raw.title));
            }

            let record = ServiceRecord {
                title: raw.title,
                long_desc: raw.long_desc,
                benefits: raw.benefits,
                image: raw.image,
                gallery: raw.gallery,
                detailed_sections: raw.detailed_sections,
            };
            if records.insert(id, record).is_some() {
                return Err(CatalogError::DuplicateService(id));
            }

            summaries.push(ServiceSummary {
                id,
                name: raw.summary.name,
                menu_desc: raw.summary.menu_desc,
                short_desc: raw.summary.short_desc,
                listing_image: raw.summary.listing_image,
            });
        }

        if let Some(missing) = ServiceId::ALL.into_iter().find(|id| !records.contains_key(id)) {
            return Err(CatalogError::MissingService(missing));
        }

        summaries.sort_by_key(|summary| summary.id);

        Ok(Self { records, summaries })
    }

    /// Resolves an identifier taken from a request path. Anything that is not a known [`ServiceId`], including the empty string, is [`ServiceLookup::NotFound`].
    pub fn lookup(&self, identifier: &str) -> ServiceLookup<'_> {
        match identifier
            .parse::<ServiceId>()
            .ok()
            .and_then(|id| self.records.get(&id))
        {
            Some(record) => ServiceLookup::Found(record),
            None => ServiceLookup::NotFound,
        }
    }

    pub fn get(&self, id: ServiceId) -> Option<&ServiceRecord> {
        self.records.get(&id)
    }

    /// Every service with its record, in [`ServiceId::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ServiceId, &ServiceRecord)> {
        ServiceId::ALL
            .into_iter()
            .filter_map(|id| self.records.get(&id).map(|record| (id, record)))
    }

    pub fn summaries(&self) -> &[ServiceSummary] {
        &self.summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn found(lookup: ServiceLookup<'_>) -> &ServiceRecord {
        match lookup {
            ServiceLookup::Found(record) => record,
            ServiceLookup::NotFound => panic!("expected a record"),
        }
    }

    #[test]
    fn every_key_resolves_to_a_complete_record() {
        let catalog = catalog();

        for id in ServiceId::ALL {
            let record = found(catalog.lookup(id.as_str()));
            assert!(!record.title.is_empty(), "{} has no title", id);
            assert!(!record.benefits.is_empty(), "{} has no benefits", id);
        }
    }

    #[test]
    fn unit_trust() {
        let catalog = catalog();
        let record = found(catalog.lookup("unit-trust"));

        assert_eq!(record.title, "Unit Trust Funds");
        assert!(
            record
                .benefits
                .iter()
                .any(|benefit| benefit == "Professional Fund Management")
        );
    }

    #[test]
    fn prs_has_a_gallery_of_three() {
        let catalog = catalog();
        let record = found(catalog.lookup("prs"));

        assert_eq!(record.title, "Private Retirement Schemes (PRS)");
        assert_eq!(record.gallery.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn corporate_detailed_sections() {
        let catalog = catalog();
        let record = found(catalog.lookup("corporate"));

        let titles: Vec<&str> = record
            .detailed_sections
            .iter()
            .flatten()
            .map(|section| section.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Empowering Your Workforce", "Business Continuity Planning"]
        );
    }

    #[test]
    fn unknown_and_empty_identifiers_are_not_found() {
        let catalog = catalog();

        assert_eq!(catalog.lookup("nonexistent"), ServiceLookup::NotFound);
        assert_eq!(catalog.lookup(""), ServiceLookup::NotFound);
        assert_eq!(catalog.lookup("Unit-Trust"), ServiceLookup::NotFound);
        assert_eq!(catalog.lookup("unit-trust/"), ServiceLookup::NotFound);
    }

    #[test]
    fn lookup_is_idempotent() {
        let catalog = catalog();

        for identifier in ["unit-trust", "estate", "nonexistent", ""] {
            assert_eq!(catalog.lookup(identifier), catalog.lookup(identifier));
        }
    }

    #[test]
    fn service_id_round_trips_through_its_key() {
        for id in ServiceId::ALL {
            assert_eq!(id.as_str().parse::<ServiceId>().unwrap(), id);
        }
        assert!(matches!(
            "pension".parse::<ServiceId>(),
            Err(CatalogError::UnknownService(key)) if key == "pension"
        ));
        assert_eq!(ServiceId::Prs.url(), "/services/prs/");
    }

    #[test]
    fn summaries_follow_navigation_order() {
        let catalog = catalog();
        let ids: Vec<ServiceId> = catalog.summaries().iter().map(|s| s.id).collect();

        assert_eq!(ids, ServiceId::ALL.to_vec());
        assert_eq!(catalog.summaries()[1].name, "Retirement (PRS)");
        assert_eq!(catalog.iter().count(), 6);
    }

    fn service_yaml(id: &str, title: &str, benefits: &str) -> String {
        format!(
            "- id: {id}\n  title: \"{title}\"\n  long_desc: text\n  benefits: {benefits}\n  image: img\n  summary:\n    name: n\n    menu_desc: m\n    short_desc: s\n    listing_image: l\n"
        )
    }

    fn full_yaml_with(replace: &str, with: String) -> String {
        ServiceId::ALL
            .into_iter()
            .map(|id| {
                if id.as_str() == replace {
                    with.clone()
                } else {
                    service_yaml(id.as_str(), &format!("Title {}", id), "[one]")
                }
            })
            .collect()
    }

    #[test]
    fn minimal_catalog_without_optional_fields() {
        let catalog = Catalog::from_yaml_str(&full_yaml_with("", String::new())).unwrap();
        let record = catalog.get(ServiceId::Medical).unwrap();

        assert_eq!(record.gallery, None);
        assert_eq!(record.detailed_sections, None);
    }

    #[test]
    fn rejects_unknown_services() {
        let yaml = format!(
            "{}{}",
            full_yaml_with("", String::new()),
            service_yaml("crypto", "Crypto", "[one]")
        );

        assert!(matches!(
            Catalog::from_yaml_str(&yaml),
            Err(CatalogError::UnknownService(key)) if key == "crypto"
        ));
    }

    #[test]
    fn rejects_missing_services() {
        let yaml: String = ServiceId::ALL[..5]
            .iter()
            .map(|id| service_yaml(id.as_str(), &format!("Title {}", id), "[one]"))
            .collect();

        assert!(matches!(
            Catalog::from_yaml_str(&yaml),
            Err(CatalogError::MissingService(ServiceId::Corporate))
        ));
    }

    #[test]
    fn rejects_incomplete_records() {
        let no_benefits = full_yaml_with("estate", service_yaml("estate", "Estate", "[]"));
        assert!(matches!(
            Catalog::from_yaml_str(&no_benefits),
            Err(CatalogError::IncompleteRecord {
                id: ServiceId::Estate,
                field: "benefits"
            })
        ));

        let no_title = full_yaml_with("prs", service_yaml("prs", " ", "[one]"));
        assert!(matches!(
            Catalog::from_yaml_str(&no_title),
            Err(CatalogError::IncompleteRecord {
                id: ServiceId::Prs,
                field: "title"
            })
        ));
    }

    #[test]
    fn rejects_duplicates() {
        let duplicate_title = full_yaml_with("prs", service_yaml("prs", "Title unit-trust", "[one]"));
        assert!(matches!(
            Catalog::from_yaml_str(&duplicate_title),
            Err(CatalogError::DuplicateTitle(title)) if title == "Title unit-trust"
        ));

        let duplicate_id = format!(
            "{}{}",
            full_yaml_with("", String::new()),
            service_yaml("medical", "Another", "[one]")
        );
        assert!(matches!(
            Catalog::from_yaml_str(&duplicate_id),
            Err(CatalogError::DuplicateService(ServiceId::Medical))
        ));
    }

    #[test]
    fn rejects_malformed_documents() {
        let error = Catalog::from_yaml_str("- id: [unclosed").unwrap_err();

        assert!(matches!(error, CatalogError::Parse(_)));
        assert!(error.to_string().starts_with("Failed to parse the service catalog"));
    }
}
