//! List filters of the validation module, persisted in localStorage.

use contracts::domain::a100_bon_commande::BonCommande;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const STORAGE_KEY: &str = "a100_validation_bc_filters_v1";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BcSortField {
    #[default]
    IssuedOn,
    Amount,
    Supplier,
}

impl BcSortField {
    pub fn code(self) -> &'static str {
        match self {
            BcSortField::IssuedOn => "issuedOn",
            BcSortField::Amount => "amount",
            BcSortField::Supplier => "supplier",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "amount" => BcSortField::Amount,
            "supplier" => BcSortField::Supplier,
            _ => BcSortField::IssuedOn,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BcFilterState {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub min_amount: Option<f64>,
    #[serde(default)]
    pub sort_by: BcSortField,
    #[serde(default)]
    pub sort_ascending: bool,
}

impl Default for BcFilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            min_amount: None,
            sort_by: BcSortField::IssuedOn,
            sort_ascending: false,
        }
    }
}

impl BcFilterState {
    /// Case-insensitive match on reference, supplier, site and description.
    pub fn matches(&self, doc: &BonCommande) -> bool {
        if let Some(min) = self.min_amount {
            if doc.amount < min {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&doc.id, &doc.supplier, &doc.site, &doc.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply(&self, docs: &[BonCommande]) -> Vec<BonCommande> {
        let mut out: Vec<BonCommande> = docs.iter().filter(|d| self.matches(d)).cloned().collect();
        out.sort_by(|a, b| {
            let ord = match self.sort_by {
                BcSortField::IssuedOn => a.issued_on.cmp(&b.issued_on),
                BcSortField::Amount => a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal),
                BcSortField::Supplier => a.supplier.cmp(&b.supplier),
            };
            if self.sort_ascending {
                ord
            } else {
                ord.reverse()
            }
        });
        out
    }

    pub fn active_count(&self) -> usize {
        usize::from(!self.search.trim().is_empty()) + usize::from(self.min_amount.is_some())
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_persisted() -> Option<BcFilterState> {
    let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    serde_json::from_str::<BcFilterState>(&raw).ok()
}

fn save_persisted(st: &BcFilterState) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(st) else {
        return;
    };
    let _ = storage.set_item(STORAGE_KEY, &raw);
}

pub fn persist_state(signal: RwSignal<BcFilterState>) {
    save_persisted(&signal.get_untracked());
}

pub fn create_state() -> RwSignal<BcFilterState> {
    RwSignal::new(load_persisted().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a100_bon_commande::BcStatus;

    fn doc(id: &str, supplier: &str, amount: f64, day: u32) -> BonCommande {
        BonCommande {
            id: id.into(),
            supplier: supplier.into(),
            site: "Chantier Nord".into(),
            description: "Ciment".into(),
            amount,
            currency: "€".into(),
            status: BcStatus::Pending,
            issued_on: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            requested_by: "M. Diallo".into(),
            urgent: false,
        }
    }

    fn docs() -> Vec<BonCommande> {
        vec![
            doc("BC-1", "Lafarge", 12_000.0, 3),
            doc("BC-2", "Bouygues", 800.0, 10),
            doc("BC-3", "Vinci", 45_000.0, 7),
        ]
    }

    fn ids(docs: &[BonCommande]) -> Vec<&str> {
        docs.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_default_sorts_newest_first() {
        let out = BcFilterState::default().apply(&docs());
        assert_eq!(ids(&out), vec!["BC-2", "BC-3", "BC-1"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let f = BcFilterState {
            search: "  vinCI ".into(),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&docs())), vec!["BC-3"]);
        assert_eq!(f.active_count(), 1);
    }

    #[test]
    fn test_min_amount_and_ascending_amount_sort() {
        let f = BcFilterState {
            min_amount: Some(1_000.0),
            sort_by: BcSortField::Amount,
            sort_ascending: true,
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&docs())), vec!["BC-1", "BC-3"]);
        assert_eq!(f.active_count(), 1);
    }

    #[test]
    fn test_persisted_format() {
        let f = BcFilterState {
            search: "lafarge".into(),
            min_amount: Some(500.0),
            sort_by: BcSortField::Supplier,
            sort_ascending: true,
        };
        let raw = serde_json::to_string(&f).unwrap();
        assert_eq!(
            raw,
            r#"{"search":"lafarge","minAmount":500.0,"sortBy":"supplier","sortAscending":true}"#
        );
        let back: BcFilterState = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, f);
    }

    #[test]
    fn test_partial_persisted_state_uses_defaults() {
        let back: BcFilterState = serde_json::from_str(r#"{"search":"x"}"#).unwrap();
        assert_eq!(back.search, "x");
        assert_eq!(back.sort_by, BcSortField::IssuedOn);
        assert!(!back.sort_ascending);
    }

    #[test]
    fn test_sort_field_codes() {
        for field in [BcSortField::IssuedOn, BcSortField::Amount, BcSortField::Supplier] {
            assert_eq!(BcSortField::from_code(field.code()), field);
        }
        assert_eq!(BcSortField::from_code("bogus"), BcSortField::IssuedOn);
    }
}
