// Service Catalog - the fixed set of services a session starts with

use serde::{Deserialize, Serialize};

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
}

/// Services grouped under one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub services: Vec<CategoryService>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryService {
    pub id: String,
    pub name: String,
}

pub const DEFAULT_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "hospital-opd",
        name: "OPD Appointments",
        category: "Hospital & Healthcare",
    },
    CatalogEntry {
        id: "hospital-diagnostic",
        name: "Diagnostic Center",
        category: "Hospital & Healthcare",
    },
    CatalogEntry {
        id: "bank-teller",
        name: "Teller Services",
        category: "Bank & Financial",
    },
    CatalogEntry {
        id: "bank-loan",
        name: "Loan Advisory",
        category: "Bank & Financial",
    },
    CatalogEntry {
        id: "restaurant-table",
        name: "Table Reservation",
        category: "Restaurant & Dining",
    },
    CatalogEntry {
        id: "restaurant-takeaway",
        name: "Takeaway Queue",
        category: "Restaurant & Dining",
    },
    CatalogEntry {
        id: "salon-haircut",
        name: "Haircut & Styling",
        category: "Salon & Beauty",
    },
    CatalogEntry {
        id: "government-docs",
        name: "Document Submission",
        category: "Government Office",
    },
];

/// Group `(id, name, category)` triples by category, in order of first appearance
pub fn categories<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>) -> Vec<Category> {
    let mut grouped: Vec<Category> = Vec::new();
    for (id, name, category) in entries {
        let service = CategoryService {
            id: id.to_string(),
            name: name.to_string(),
        };
        match grouped.iter_mut().find(|c| c.name == category) {
            Some(existing) => existing.services.push(service),
            None => grouped.push(Category {
                name: category.to_string(),
                services: vec![service],
            }),
        }
    }
    grouped
}

impl CatalogEntry {
    pub fn as_triple(&self) -> (&'static str, &'static str, &'static str) {
        (self.id, self.name, self.category)
    }
}
