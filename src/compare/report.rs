//! Side-by-side plan comparison and its plain-text report

use crate::catalog::{Catalog, InsurancePlan};
use crate::i18n::Translator;
use serde::Serialize;

/// Most plans shown side by side
pub const MAX_COMPARED: usize = 3;

/// Format rupees with Indian digit grouping: ₹10,00,000
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round().abs() as u64;
    let digits = rounded.to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };
    let sign = if amount < 0.0 && rounded > 0 { "-" } else { "" };
    format!("{sign}₹{grouped}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub label: String,
    pub cells: Vec<String>,
}

/// Up to three catalog plans, in selection order
#[derive(Debug, Clone)]
pub struct Comparison<'a> {
    plans: Vec<&'a InsurancePlan>,
}

impl<'a> Comparison<'a> {
    /// Select plans by id. Unknown and repeated ids are skipped; selections past
    /// the first three are dropped.
    pub fn select(catalog: &'a Catalog, ids: &[u32]) -> Self {
        let mut plans: Vec<&InsurancePlan> = Vec::with_capacity(MAX_COMPARED);
        for &id in ids {
            if plans.iter().any(|p| p.id == id) {
                continue;
            }
            match catalog.get(id) {
                Some(plan) if plans.len() < MAX_COMPARED => plans.push(plan),
                Some(_) => log::warn!("comparison holds {} plans; ignoring plan {}", MAX_COMPARED, id),
                None => log::warn!("plan {} is not in the catalog", id),
            }
        }
        Self { plans }
    }

    pub fn plans(&self) -> &[&'a InsurancePlan] {
        &self.plans
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Distinct features across the selection, in order of first appearance
    pub fn features(&self) -> Vec<&'a str> {
        let mut features: Vec<&str> = Vec::new();
        for plan in self.plans.iter().copied() {
            for feature in &plan.features {
                if !features.contains(&feature.as_str()) {
                    features.push(feature);
                }
            }
        }
        features
    }

    pub fn cheapest(&self) -> Option<&'a InsurancePlan> {
        self.plans
            .iter()
            .copied()
            .min_by(|a, b| a.premium.total_cmp(&b.premium))
    }

    pub fn highest_rated(&self) -> Option<&'a InsurancePlan> {
        // max_by returns the last maximum; reverse so ties go to the earlier pick
        self.plans
            .iter()
            .rev()
            .copied()
            .max_by(|a, b| a.rating.total_cmp(&b.rating))
    }

    pub fn rows(&self, t: &Translator) -> Vec<ComparisonRow> {
        let yes_no = |flag: bool| t.translate(if flag { "yes" } else { "no" }).to_string();

        let mut rows = vec![
            ComparisonRow {
                label: t.translate("annualPremium").to_string(),
                cells: self.plans.iter().map(|p| format_inr(p.premium)).collect(),
            },
            ComparisonRow {
                label: t.translate("sumInsured").to_string(),
                cells: self.plans.iter().map(|p| format_inr(p.coverage)).collect(),
            },
            ComparisonRow {
                label: t.translate("rating").to_string(),
                cells: self.plans.iter().map(|p| format!("{:.1}/5", p.rating)).collect(),
            },
            ComparisonRow {
                label: t.translate("recommended").to_string(),
                cells: self.plans.iter().map(|p| yes_no(p.recommended)).collect(),
            },
        ];

        for feature in self.features() {
            rows.push(ComparisonRow {
                label: feature.to_string(),
                cells: self
                    .plans
                    .iter()
                    .map(|p| yes_no(p.features.iter().any(|f| f == feature)))
                    .collect(),
            });
        }

        rows
    }

    /// Plain-text report handed to a document exporter
    pub fn render_report(&self, t: &Translator) -> String {
        let mut out = String::new();
        out.push_str(t.translate("policyComparison"));
        out.push('\n');
        out.push_str(&"=".repeat(60));
        out.push('\n');

        if self.plans.is_empty() {
            out.push_str(t.translate("noPlansFound"));
            out.push('\n');
            return out;
        }

        let rows = self.rows(t);
        let label_width = rows
            .iter()
            .map(|r| r.label.chars().count())
            .chain(std::iter::once(t.translate("features").chars().count()))
            .max()
            .unwrap_or(0);
        let col_width = self
            .plans
            .iter()
            .map(|p| p.name.chars().count())
            .max()
            .unwrap_or(0)
            .max(12);

        out.push_str(&pad(t.translate("features"), label_width));
        for plan in &self.plans {
            out.push_str(" | ");
            out.push_str(&pad(&plan.name, col_width));
        }
        out.push('\n');

        for row in &rows {
            out.push_str(&pad(&row.label, label_width));
            for cell in &row.cells {
                out.push_str(" | ");
                out.push_str(&pad(cell, col_width));
            }
            out.push('\n');
        }

        out
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr_uses_indian_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(950.0), "₹950");
        assert_eq!(format_inr(12_450.0), "₹12,450");
        assert_eq!(format_inr(1_000_000.0), "₹10,00,000");
        assert_eq!(format_inr(5_000_000.0), "₹50,00,000");
        assert_eq!(format_inr(123_456_789.0), "₹12,34,56,789");
    }

    #[test]
    fn test_select_limits_and_skips() {
        let catalog = Catalog::builtin();
        let cmp = Comparison::select(&catalog, &[2, 2, 99, 1, 3, 4]);
        let ids: Vec<u32> = cmp.plans().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_features_and_rows() {
        let catalog = Catalog::builtin();
        let cmp = Comparison::select(&catalog, &[1, 2, 3]);
        let t = Translator::builtin();

        assert_eq!(
            cmp.features(),
            vec!["Cashless Claims", "Pre/Post Hospitalization", "Day Care", "Maternity", "Wellness Benefits"]
        );

        let rows = cmp.rows(&t);
        assert_eq!(rows[0].label, "Annual Premium");
        assert_eq!(rows[0].cells, vec!["₹12,450", "₹10,800", "₹14,200"]);
        assert_eq!(rows[1].cells, vec!["₹10,00,000"; 3]);

        assert_eq!(rows[2].label, "Rating");

        let maternity = rows.iter().find(|r| r.label == "Maternity").unwrap();
        assert_eq!(maternity.cells, vec!["Yes", "No", "Yes"]);
    }

    #[test]
    fn test_cheapest_and_highest_rated() {
        let catalog = Catalog::builtin();
        let cmp = Comparison::select(&catalog, &[1, 2, 3]);
        assert_eq!(cmp.cheapest().map(|p| p.id), Some(2));
        assert_eq!(cmp.highest_rated().map(|p| p.id), Some(1));

        // 6 and 3 share a 4.3 rating; the earlier selection wins
        let tie = Comparison::select(&catalog, &[6, 3]);
        assert_eq!(tie.highest_rated().map(|p| p.id), Some(6));
    }

    #[test]
    fn test_render_report() {
        let catalog = Catalog::builtin();
        let t = Translator::builtin();
        let report = Comparison::select(&catalog, &[1, 2]).render_report(&t);

        assert!(report.starts_with("Policy Comparison\n"));
        assert!(report.contains("Star Health Family Floater"));
        assert!(report.contains("₹10,800"));

        let empty = Comparison::select(&catalog, &[]).render_report(&t);
        assert!(empty.contains("No Plans Found"));
    }
}
