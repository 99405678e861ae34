use crate::domain::model::Record;
use crate::domain::ports::Renderable;
use serde::{Deserialize, Serialize};

/// A prime component, e.g. "Braton Prime Barrel".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimePart {
    pub name: String,
    pub ducats: Option<u32>,
    /// Relics that can drop this part
    pub relics: Vec<String>,
}

impl PrimePart {
    pub fn from_record(record: &Record) -> serde_json::Result<Self> {
        serde_json::from_value(record.to_value())
    }
}

impl Renderable for PrimePart {
    fn render(&self) -> String {
        let mut out = self.name.clone();
        if let Some(ducats) = self.ducats {
            out.push_str(&format!("\n  Ducats: {}", ducats));
        }
        if !self.relics.is_empty() {
            out.push_str(&format!("\n  Found in: {}", self.relics.join(", ")));
        }
        out
    }

    fn kind_tag(&self) -> &'static str {
        "Prime Part"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relic {
    pub name: String,
    /// Lith, Meso, Neo, Axi, Requiem
    pub tier: Option<String>,
    pub rewards: Vec<String>,
    pub vaulted: bool,
}

impl Relic {
    pub fn from_record(record: &Record) -> serde_json::Result<Self> {
        serde_json::from_value(record.to_value())
    }
}

impl Renderable for Relic {
    fn render(&self) -> String {
        let mut out = match &self.tier {
            Some(tier) if !tier.is_empty() => format!("{} {}", tier, self.name),
            _ => self.name.clone(),
        };
        if self.vaulted {
            out.push_str(" (Vaulted)");
        }
        if !self.rewards.is_empty() {
            out.push_str(&format!("\n  Rewards: {}", self.rewards.join(", ")));
        }
        out
    }

    fn kind_tag(&self) -> &'static str {
        "Relic"
    }
}

/// The closed set of variants a record can be classified into.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum ClassifiedItem {
    #[serde(rename = "Prime Part")]
    PrimePart(PrimePart),
    #[serde(rename = "Relic")]
    Relic(Relic),
}

impl ClassifiedItem {
    pub fn is_relic(&self) -> bool {
        matches!(self, ClassifiedItem::Relic(_))
    }
}

impl Renderable for ClassifiedItem {
    fn render(&self) -> String {
        match self {
            ClassifiedItem::PrimePart(part) => part.render(),
            ClassifiedItem::Relic(relic) => relic.render(),
        }
    }

    fn kind_tag(&self) -> &'static str {
        match self {
            ClassifiedItem::PrimePart(part) => part.kind_tag(),
            ClassifiedItem::Relic(relic) => relic.kind_tag(),
        }
    }
}
