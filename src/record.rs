// src/record.rs
//
// One member entry from the dataset. Fields stay in the order the source
// file lists them (serde_json `preserve_order`), which is also display order.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Field codes the matcher and renderer care about.
pub mod field {
    pub const NAME: &str = "HG_NM";
    pub const STAFF: &str = "STAFF";
    pub const SECRETARY: &str = "SECRETARY";
    pub const SECRETARY2: &str = "SECRETARY2";
    pub const STATUS: &str = "STATUS_CD";
}

/// Field code → human label. Unknown codes are shown as-is.
static LABELS: &[(&str, &str)] = &[
    ("HG_NM", "한글 이름"),
    ("HJ_NM", "한자 이름"),
    ("ENG_NM", "영문 이름"),
    ("BTH_GBN_NM", "음력/양력"),
    ("BTH_DATE", "생년월일"),
    ("POLY_NM", "정당명"),
    ("ORIG_NM", "선거구"),
    ("CMIT_NM", "대표 위원회"),
    ("REELE_GBN_NM", "재선 횟수"),
    ("UNITS", "당선 횟수"),
    ("CMITS", "소속 위원회 목록"),
    ("SEX_GBN_NM", "성별"),
    ("TEL_NO", "전화번호"),
    ("ASSEM_ADDR", "사무실 호실"),
    ("E_MAIL", "이메일"),
    ("HOMEPAGE", "홈페이지"),
    ("STAFF", "보좌관"),
    ("SECRETARY", "선임비서관"),
    ("SECRETARY2", "비서관"),
    ("STATUS_CD", "재직 구분"),
];

pub fn label_for(code: &str) -> &str {
    LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

/// The three staff-role fields, in match priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StaffRole {
    Staff,
    Secretary,
    Secretary2,
}

impl StaffRole {
    pub const PRIORITY: [StaffRole; 3] = [StaffRole::Staff, StaffRole::Secretary, StaffRole::Secretary2];

    pub fn field(self) -> &'static str {
        match self {
            StaffRole::Staff => field::STAFF,
            StaffRole::Secretary => field::SECRETARY,
            StaffRole::Secretary2 => field::SECRETARY2,
        }
    }

    pub fn label(self) -> &'static str {
        label_for(self.field())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// String value of a field. Non-string values count as absent.
    pub fn text(&self, code: &str) -> Option<&str> {
        self.fields.get(code).and_then(Value::as_str)
    }

    /// Primary display name (`HG_NM`), or "" when missing.
    pub fn name(&self) -> &str {
        self.text(field::NAME).unwrap_or("")
    }

    /// Comma-separated names of one staff role, each trimmed.
    pub fn staff(&self, role: StaffRole) -> impl Iterator<Item = &str> {
        self.text(role.field())
            .into_iter()
            .flat_map(|raw| raw.split(','))
            .map(str::trim)
    }

    /// All fields in file order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }
}

/// Display text for a field value, or None when it should be hidden:
/// JSON null, "", or the literal string "null" in any case.
pub fn display_value(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if text.is_empty() || text.eq_ignore_ascii_case("null") {
        None
    } else {
        Some(text)
    }
}
