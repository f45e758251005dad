//! Property extraction for raw journal documents.
//!
//! Every accessor is total: a missing or wrong-shaped property yields `None`
//! (or an empty list) and mapping never fails. Properties the mapper does not
//! know about are ignored.

use crate::domain::entities::trade::Trade;
use crate::domain::ports::document_store::RawDocument;
use serde_json::Value;

// Property names in the journal database.
const PROP_POSITION: &str = "Position";
const PROP_DATE: &str = "Entry / Exit Date";
const PROP_RISK_REWARD: &str = "Actual RR achieved: W(+1), L(-1), BE(0)";
const PROP_OUTCOME: &str = "Outcome";
pub const PROP_CONFLUENCES: &str = "Confluences";
pub const PROP_ORDER_TYPE: &str = "Order Type";
pub const PROP_SESSION: &str = "Session";
pub const PROP_MISTAKES: &str = "Mistakes";
const PROP_STOP_LOSS: &str = "S/L Pips";
const PROP_RISK_PERCENT: &str = "% Risk";
const PROP_PNL: &str = "Gross PnL";
const PROP_NOTES: &str = "Notes";

/// Relation labels for one document, already resolved to display strings.
#[derive(Debug, Clone, Default)]
pub struct ResolvedRelations {
    pub confluences: Vec<String>,
    pub order_types: Vec<String>,
    pub sessions: Vec<String>,
    pub mistakes: Vec<String>,
}

fn prop<'a>(doc: &'a RawDocument, name: &str) -> Option<&'a Value> {
    doc.properties.get(name)
}

/// `{"select": {"name": "Long"}}` → `"Long"`
pub fn select_name(doc: &RawDocument, name: &str) -> Option<String> {
    prop(doc, name)?
        .get("select")?
        .get("name")?
        .as_str()
        .map(String::from)
}

/// `{"date": {"start": "2024-03-01"}}` → `"2024-03-01"`
pub fn date_start(doc: &RawDocument, name: &str) -> Option<String> {
    prop(doc, name)?
        .get("date")?
        .get("start")?
        .as_str()
        .map(String::from)
}

/// `{"number": 1.5}` → `1.5`. Absent or non-numeric stays `None`, never `0.0`.
pub fn number(doc: &RawDocument, name: &str) -> Option<f64> {
    prop(doc, name)?.get("number")?.as_f64()
}

/// `{"formula": {"string": "win"}}` → `"win"`
pub fn formula_string(doc: &RawDocument, name: &str) -> Option<String> {
    prop(doc, name)?
        .get("formula")?
        .get("string")?
        .as_str()
        .map(String::from)
}

/// First `plain_text` of a rich-text property.
pub fn rich_text(doc: &RawDocument, name: &str) -> Option<String> {
    prop(doc, name)?
        .get("rich_text")?
        .get(0)?
        .get("plain_text")?
        .as_str()
        .map(String::from)
}

/// Ids of a relation property, in source order. Entries without an id are
/// skipped.
pub fn relation_ids(doc: &RawDocument, name: &str) -> Vec<String> {
    prop(doc, name)
        .and_then(|p| p.get("relation"))
        .and_then(|r| r.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("id").and_then(|v| v.as_str()).map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// The document's title: the first non-empty `plain_text` of whichever
/// property has `"type": "title"`.
pub fn title_text(doc: &RawDocument) -> Option<String> {
    let props = doc.properties.as_object()?;
    let title_prop = props
        .values()
        .find(|p| p.get("type").and_then(|t| t.as_str()) == Some("title"))?;
    title_prop
        .get("title")?
        .get(0)?
        .get("plain_text")?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Map one raw record plus its resolved relations into a normalized `Trade`.
/// Pure and infallible: whatever the record looks like, a `Trade` comes out.
pub fn map_document(doc: &RawDocument, relations: ResolvedRelations) -> Trade {
    Trade {
        id: doc.id.clone(),
        position: select_name(doc, PROP_POSITION).unwrap_or_default(),
        date: date_start(doc, PROP_DATE).unwrap_or_default(),
        risk_reward: number(doc, PROP_RISK_REWARD),
        outcome: formula_string(doc, PROP_OUTCOME).unwrap_or_default(),
        confluences: relations.confluences,
        order_types: relations.order_types,
        sessions: relations.sessions,
        mistakes: relations.mistakes,
        stop_loss_pips: number(doc, PROP_STOP_LOSS),
        risk_percent: number(doc, PROP_RISK_PERCENT),
        pnl: number(doc, PROP_PNL),
        notes: rich_text(doc, PROP_NOTES).unwrap_or_default(),
    }
}
