//! The `visualData` payload shared by the prompt builder and the renderer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bazi::BaziChart;
use crate::hexagram::HexagramReading;
use crate::qimen::QimenReading;

/// Charts attached to a divination.
///
/// `bazi`, `hexagram` and `qimen` are computed here and serialize as
/// `null` when not applicable. `ziwei` and `fengshui` come from the
/// interpreter verbatim and are omitted when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualData {
    #[serde(default)]
    pub bazi: Option<BaziChart>,
    #[serde(default)]
    pub hexagram: Option<HexagramReading>,
    #[serde(default)]
    pub qimen: Option<QimenReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ziwei: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fengshui: Option<Value>,
}

impl VisualData {
    pub fn is_empty(&self) -> bool {
        self.bazi.is_none()
            && self.hexagram.is_none()
            && self.qimen.is_none()
            && self.ziwei.is_none()
            && self.fengshui.is_none()
    }

    /// Keep the computed charts; take only `ziwei` and `fengshui` from
    /// an interpreter-supplied `visualData` object.
    pub fn merge_interpreted(&self, interpreted: Option<&Value>) -> VisualData {
        let pick = |key: &str| {
            interpreted
                .and_then(|v| v.get(key))
                .filter(|v| !v.is_null())
                .cloned()
        };
        VisualData {
            ziwei: pick("ziwei"),
            fengshui: pick("fengshui"),
            ..self.clone()
        }
    }
}
