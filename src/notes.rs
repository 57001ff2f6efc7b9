// src/notes.rs
//
// Free-text notes about staff members, keyed by (member name, staff name).
// Saving is best-effort: backend failures are logged, never surfaced.

use crate::config::consts::{NOTE_KEY_PREFIX, NOTE_KEY_SEP};
use crate::config::options::NotesBackend;
use crate::store::{FileKv, KeyValue, MemoryKv, StoreError};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NoteKey {
    pub subject: String,
    pub staff: String,
}

impl NoteKey {
    pub fn new(subject: impl Into<String>, staff: impl Into<String>) -> Self {
        Self { subject: subject.into(), staff: staff.into() }
    }

    /// Storage key: `memo-<subject>-<staff>`.
    /// NOTE: names containing '-' can collide (e.g. ("a-b","c") vs ("a","b-c")).
    pub fn storage_key(&self) -> String {
        join!(NOTE_KEY_PREFIX, &self.subject, NOTE_KEY_SEP, &self.staff)
    }
}

pub struct NoteStore<S: KeyValue> {
    backend: S,
}

impl<S: KeyValue> NoteStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Stored text, or "" if nothing was saved under this key.
    pub fn load(&self, key: &NoteKey) -> String {
        self.backend.get(&key.storage_key()).unwrap_or_default()
    }

    /// Overwrite the note at `key`.
    pub fn save(&mut self, key: &NoteKey, text: &str) {
        let k = key.storage_key();
        match self.backend.set(&k, text) {
            Ok(()) => logf!("Notes: Saved {} ({} chars)", k, text.chars().count()),
            Err(e) => loge!("Notes: Save failed {}: {}", k, e),
        }
    }

    pub fn backend(&self) -> &S { &self.backend }
}

/// Type-erased store so frontends can pick a backend at runtime.
pub type DynNoteStore = NoteStore<Box<dyn KeyValue>>;

impl KeyValue for Box<dyn KeyValue> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

pub fn open(backend: &NotesBackend) -> Result<DynNoteStore, StoreError> {
    let kv: Box<dyn KeyValue> = match backend {
        NotesBackend::File(path) => Box::new(FileKv::open(path)?),
        NotesBackend::Memory => Box::new(MemoryKv::new()),
    };
    Ok(NoteStore::new(kv))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_format_is_hyphen_joined() {
        assert_eq!(NoteKey::new("Kim", "Park").storage_key(), "memo-Kim-Park");
    }

    #[test]
    fn save_then_load_roundtrips_and_default_is_empty() {
        let mut notes = NoteStore::new(MemoryKv::new());
        let key = NoteKey::new("Kim", "Park");
        assert_eq!(notes.load(&key), "");
        notes.save(&key, "met at hearing");
        assert_eq!(notes.load(&key), "met at hearing");
        notes.save(&key, "");
        assert_eq!(notes.load(&key), "");
        assert_eq!(notes.load(&NoteKey::new("Kim", "Lee")), "");
    }

    #[test]
    fn hyphenated_names_collide() {
        let mut notes = NoteStore::new(MemoryKv::new());
        notes.save(&NoteKey::new("a-b", "c"), "first");
        assert_eq!(notes.load(&NoteKey::new("a", "b-c")), "first");
    }

    struct FailingKv;
    impl KeyValue for FailingKv {
        fn get(&self, _key: &str) -> Option<String> { None }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io {
                path: "nowhere".into(),
                source: std::io::Error::other("disk full"),
            })
        }
    }

    #[test]
    fn failed_save_does_not_propagate() {
        let mut notes = NoteStore::new(FailingKv);
        let key = NoteKey::new("Kim", "Park");
        notes.save(&key, "lost");
        assert_eq!(notes.load(&key), "");
    }

    #[test]
    fn boxed_backend_works() {
        let mut notes: DynNoteStore = NoteStore::new(Box::new(MemoryKv::new()));
        let key = NoteKey::new("Kim", "Park");
        notes.save(&key, "x");
        assert_eq!(notes.load(&key), "x");
    }
}
