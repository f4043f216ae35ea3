//! Trusted reference sources

use serde::{Deserialize, Serialize};

/// A trusted reference source (immutable reference data)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
    pub description: String,
}

impl Resource {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: description.into(),
        }
    }
}

/// The built-in catalog of trusted sources.
pub fn default_catalog() -> Vec<Resource> {
    vec![
        Resource::new(
            "CDC",
            "https://www.cdc.gov",
            "Centers for Disease Control and Prevention: public health guidance and data",
        ),
        Resource::new(
            "WHO",
            "https://www.who.int",
            "World Health Organization: global health information and advisories",
        ),
        Resource::new(
            "NIH",
            "https://www.nih.gov",
            "National Institutes of Health: medical research and health topics",
        ),
        Resource::new(
            "Mayo Clinic",
            "https://www.mayoclinic.org",
            "Patient-oriented explanations of diseases, symptoms and treatments",
        ),
        Resource::new(
            "MedlinePlus",
            "https://medlineplus.gov",
            "Consumer health encyclopedia from the U.S. National Library of Medicine",
        ),
        Resource::new(
            "PubMed",
            "https://pubmed.ncbi.nlm.nih.gov",
            "Searchable index of peer-reviewed biomedical literature",
        ),
        Resource::new(
            "Cochrane Library",
            "https://www.cochranelibrary.com",
            "Systematic reviews of healthcare interventions",
        ),
        Resource::new(
            "Cleveland Clinic",
            "https://my.clevelandclinic.org",
            "Clinician-reviewed health library and condition guides",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_catalog_has_eight_unique_names() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 8);
        let names: HashSet<&str> = catalog.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), 8);
        assert!(catalog.iter().all(|r| r.url.starts_with("https://")));
    }
}
