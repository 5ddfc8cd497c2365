//! Hiring company extraction.

use super::text::clean_text;
use super::{run_chain, Strategy};
use crate::annotation::{AnnotatedDocument, EntityLabel};

pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// `<meta>` keys that name the site owner.
pub const COMPANY_META_NAMES: &[&str] = &["og:site_name", "company"];

const COMPANY_CHAIN: &[(&str, Strategy<String>)] =
    &[("markup_meta", from_meta), ("org_entity", from_org_entity)];

pub fn extract_company(doc: &AnnotatedDocument) -> String {
    run_chain("company", doc, COMPANY_CHAIN).unwrap_or_else(|| UNKNOWN_COMPANY.to_string())
}

fn from_meta(doc: &AnnotatedDocument) -> Option<String> {
    COMPANY_META_NAMES
        .iter()
        .filter_map(|name| doc.hints().meta(name))
        .map(|content| clean_text(&content))
        .find(|content| !content.is_empty())
}

fn from_org_entity(doc: &AnnotatedDocument) -> Option<String> {
    doc.spans_labeled(EntityLabel::Org)
        .map(|span| span.text.clone())
        .find(|text| !text.trim().is_empty())
}
