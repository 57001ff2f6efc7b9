// src/render.rs
//
// Match results → display document. Frontend-neutral: the GUI draws the
// blocks with egui, the CLI prints the Display form.

use std::fmt;

use crate::dataset::{Dataset, LoadError};
use crate::notes::{NoteKey, NoteStore};
use crate::record::{display_value, field, label_for};
use crate::search::{self, MatchKind, MatchResult, QueryError};
use crate::store::KeyValue;

pub const NOTE_SAVED: &str = "메모가 저장되었습니다!";
pub const NOTE_HEADING: &str = "메모";
pub const NOTE_PLACEHOLDER: &str = "메모를 입력하세요";
pub const NOTE_SAVE_BUTTON: &str = "메모 저장";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Document {
    /// Query was empty after trimming.
    Prompt,
    /// The dataset could not be read.
    LoadFailed(String),
    NotFound { query: String },
    Results { summary: String, blocks: Vec<ResultBlock> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultBlock {
    pub heading: String,
    /// (label, value) in record order, hidden fields already removed
    pub fields: Vec<(String, String)>,
    /// Present for staff matches only
    pub note: Option<NoteEditor>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteEditor {
    pub key: NoteKey,
    /// Pre-filled from the store at render time; the GUI edits it in place.
    pub text: String,
}

impl Document {
    pub fn load_failed(err: &LoadError) -> Self {
        Document::LoadFailed(format!("데이터를 불러오는 중 오류가 발생했습니다: {}", err))
    }

    /// Single-line message for the non-result variants.
    pub fn message(&self) -> Option<String> {
        match self {
            Document::Prompt => Some(QueryError::Empty.to_string()),
            Document::LoadFailed(msg) => Some(msg.clone()),
            Document::NotFound { query } => Some(format!("'{}'(으)로 검색된 정보가 없습니다.", query)),
            Document::Results { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Document::Results { .. })
    }

    pub fn blocks(&self) -> &[ResultBlock] {
        match self {
            Document::Results { blocks, .. } => blocks,
            _ => &[],
        }
    }

    pub fn blocks_mut(&mut self) -> &mut [ResultBlock] {
        match self {
            Document::Results { blocks, .. } => blocks,
            _ => &mut [],
        }
    }
}

/// Build the document for `results`. `raw_query` is shown exactly as typed.
pub fn render<S: KeyValue>(raw_query: &str, results: &[MatchResult<'_>], notes: &NoteStore<S>) -> Document {
    if results.is_empty() {
        return Document::NotFound { query: s!(raw_query) };
    }

    let blocks = results.iter().map(|m| render_block(raw_query, m, notes)).collect();
    Document::Results {
        summary: format!("'{}'(으)로 검색된 결과:", raw_query),
        blocks,
    }
}

fn render_block<S: KeyValue>(raw_query: &str, m: &MatchResult<'_>, notes: &NoteStore<S>) -> ResultBlock {
    let subject = m.record.name();

    let heading = match &m.kind {
        MatchKind::Subject => format!("{} 님은 의원입니다.", raw_query),
        MatchKind::Staff { role, name } => {
            format!("'{}' 님은 '{}' 의원실의 {}입니다.", name, subject, role.label())
        }
    };

    let fields = m
        .record
        .fields()
        .filter(|(code, _)| *code != field::STATUS)
        .filter_map(|(code, value)| display_value(value).map(|v| (s!(label_for(code)), v)))
        .collect();

    let note = m.staff_name().map(|staff| {
        let key = NoteKey::new(subject, staff);
        let text = notes.load(&key);
        NoteEditor { key, text }
    });

    ResultBlock { heading, fields, note }
}

/// Search and render in one step, mapping an empty query to the prompt.
pub fn search_and_render<S: KeyValue>(raw_query: &str, dataset: &Dataset, notes: &NoteStore<S>) -> Document {
    match search::search(raw_query, dataset) {
        Ok(results) => {
            logf!("Search: {:?} → {} result(s)", raw_query, results.len());
            render(raw_query, &results, notes)
        }
        Err(QueryError::Empty) => {
            logd!("Search: empty query");
            Document::Prompt
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Document::Results { summary, blocks } = self else {
            // Non-result variants always carry a message
            return writeln!(f, "{}", self.message().unwrap_or_default());
        };

        writeln!(f, "{}", summary)?;
        for block in blocks {
            writeln!(f)?;
            writeln!(f, "## {}", block.heading)?;
            for (label, value) in &block.fields {
                writeln!(f, "{}: {}", label, value)?;
            }
            if let Some(note) = &block.note {
                writeln!(f, "[{}] {}", NOTE_HEADING, note.key.storage_key())?;
                if note.text.is_empty() {
                    writeln!(f, "  ({})", NOTE_PLACEHOLDER)?;
                } else {
                    for line in note.text.lines() {
                        writeln!(f, "  {}", line)?;
                    }
                }
            }
        }
        Ok(())
    }
}
