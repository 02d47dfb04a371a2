//! Localization file editing operations
//!
//! Provides functions for modifying localization files:
//! - Find messages by ID or by source string
//! - Add, update, delete messages
//! - Patch one file on top of another

use std::collections::HashMap;

use super::{LocalizationFile, Message};
use crate::error::{Error, Result};
use crate::hash::hash_str;

/// Result of applying a patch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Existing messages whose text was replaced
    pub updated: usize,
    /// Messages appended to the end of the file
    pub added: usize,
}

impl LocalizationFile {
    /// Find a message by hash ID
    #[must_use]
    pub fn find_by_id(&self, id: u32) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Get a mutable reference to a message by hash ID
    pub fn find_by_id_mut(&mut self, id: u32) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.id == id)
    }

    /// Find a message by the source string its ID was hashed from
    ///
    /// # Errors
    /// Returns [`Error::EncodingError`] if `key` can't be encoded as Latin-1.
    pub fn find_by_text(&self, key: &str) -> Result<Option<&Message>> {
        Ok(self.find_by_id(hash_str(key)?))
    }

    /// Get a message's text by hash ID
    #[must_use]
    pub fn text(&self, id: u32) -> Option<&str> {
        self.find_by_id(id).map(|m| m.text.as_str())
    }

    /// Replace the text of an existing message
    ///
    /// # Returns
    /// `true` if the message was found and updated, `false` if not found
    pub fn set_text(&mut self, id: u32, text: impl Into<String>) -> bool {
        if let Some(message) = self.find_by_id_mut(id) {
            message.text = text.into();
            true
        } else {
            false
        }
    }

    /// Add a message, or replace the text if the ID already exists
    ///
    /// # Returns
    /// `true` if a new message was added, `false` if an existing one was updated
    pub fn insert(&mut self, id: u32, text: impl Into<String>) -> bool {
        let text = text.into();
        if let Some(message) = self.find_by_id_mut(id) {
            message.text = text;
            false
        } else {
            self.messages.push(Message { id, text });
            true
        }
    }

    /// Delete a message by hash ID
    ///
    /// # Returns
    /// The removed message if found, `None` otherwise
    pub fn remove(&mut self, id: u32) -> Option<Message> {
        let pos = self.messages.iter().position(|m| m.id == id)?;
        Some(self.messages.remove(pos))
    }

    /// Get the number of messages
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if the file has no messages
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over messages in file order
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Patch another localization file on top of this one
    ///
    /// Messages whose ID already exists overwrite the existing text in
    /// place; new IDs are appended in patch order. The patch wins on every
    /// ID it touches, including IDs repeated within the patch itself.
    ///
    /// # Errors
    /// Returns [`Error::LanguageMismatch`] if both files have a language ID
    /// and they differ. Clear the patch's `lang_id` to patch across
    /// languages.
    pub fn update(&mut self, patch: &LocalizationFile) -> Result<MergeStats> {
        if let Some((base, patch)) = self.lang_id.zip(patch.lang_id).filter(|(b, p)| b != p) {
            return Err(Error::LanguageMismatch { base, patch });
        }

        let mut id_to_index: HashMap<u32, usize> = self
            .messages
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id, i))
            .collect();

        let mut stats = MergeStats::default();
        for new_message in &patch.messages {
            if let Some(&index) = id_to_index.get(&new_message.id) {
                self.messages[index].text.clone_from(&new_message.text);
                stats.updated += 1;
            } else {
                id_to_index.insert(new_message.id, self.messages.len());
                self.messages.push(new_message.clone());
                stats.added += 1;
            }
        }

        tracing::debug!(
            "Patch applied: {} updated, {} added",
            stats.updated,
            stats.added
        );

        Ok(stats)
    }

    /// Sort all messages by ID
    pub fn sort_by_id(&mut self) {
        self.messages.sort_by_key(|m| m.id);
    }
}

impl<'a> IntoIterator for &'a LocalizationFile {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::hash;

    fn file(lang_id: Option<u32>, messages: &[(u32, &str)]) -> LocalizationFile {
        LocalizationFile {
            lang_id,
            messages: messages.iter().map(|&(id, text)| Message::new(id, text)).collect(),
        }
    }

    #[test]
    fn test_update_overwrites_and_appends() {
        let mut base = file(None, &[(1, "A"), (2, "B")]);
        let patch = file(None, &[(2, "B2"), (3, "C")]);

        let stats = base.update(&patch).unwrap();

        assert_eq!(base, file(None, &[(1, "A"), (2, "B2"), (3, "C")]));
        assert_eq!(stats, MergeStats { updated: 1, added: 1 });
    }

    #[test]
    fn test_update_keeps_position_of_overwritten() {
        let mut base = file(None, &[(3, "c"), (1, "a"), (2, "b")]);
        base.update(&file(None, &[(1, "A")])).unwrap();
        let ids: Vec<u32> = base.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(base.text(1), Some("A"));
    }

    #[test]
    fn test_update_language_mismatch() {
        let mut base = file(Some(5), &[(1, "A")]);
        let patch = file(Some(9), &[(1, "B")]);

        let err = base.update(&patch).unwrap_err();
        assert!(matches!(err, Error::LanguageMismatch { base: 5, patch: 9 }));
        let msg = err.to_string();
        assert!(msg.contains('5') && msg.contains('9'));
        // Nothing was applied
        assert_eq!(base.text(1), Some("A"));
    }

    #[test]
    fn test_update_without_patch_language() {
        let mut base = file(Some(5), &[(1, "A")]);
        base.update(&file(None, &[(1, "B")])).unwrap();
        assert_eq!(base.lang_id, Some(5));
        assert_eq!(base.text(1), Some("B"));
    }

    #[test]
    fn test_update_same_language() {
        let mut base = file(Some(5), &[]);
        base.update(&file(Some(5), &[(1, "x")])).unwrap();
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_update_repeated_id_in_patch() {
        let mut base = file(None, &[]);
        let stats = base.update(&file(None, &[(4, "first"), (4, "second")])).unwrap();
        assert_eq!(base, file(None, &[(4, "second")]));
        assert_eq!(stats, MergeStats { updated: 1, added: 1 });
    }

    #[test]
    fn test_sequential_patches_fold_left() {
        let mut base = file(None, &[(1, "a")]);
        base.update(&file(None, &[(1, "b"), (2, "x")])).unwrap();
        base.update(&file(None, &[(2, "y"), (1, "c")])).unwrap();
        assert_eq!(base, file(None, &[(1, "c"), (2, "y")]));
    }

    #[test]
    fn test_sort_by_id() {
        let mut base = file(None, &[(3, "c"), (1, "a"), (2, "b")]);
        base.sort_by_id();
        let ids: Vec<u32> = base.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_find_by_text_hashes_key() {
        let base = file(None, &[(hash(b"hello"), "World")]);
        assert_eq!(base.find_by_text("HELLO").unwrap().map(|m| m.text.as_str()), Some("World"));
        assert!(base.find_by_text("missing").unwrap().is_none());
        assert!(base.find_by_text("\u{3042}").is_err());
    }

    #[test]
    fn test_set_text_and_insert() {
        let mut base = file(None, &[(1, "a")]);
        assert!(base.set_text(1, "b"));
        assert!(!base.set_text(2, "nope"));
        assert_eq!(base.len(), 1);

        assert!(base.insert(2, "two"));
        assert!(!base.insert(1, "one"));
        assert_eq!(base, file(None, &[(1, "one"), (2, "two")]));
    }

    #[test]
    fn test_remove() {
        let mut base = file(None, &[(1, "a"), (2, "b")]);
        assert_eq!(base.remove(1), Some(Message::new(1, "a")));
        assert_eq!(base.remove(1), None);
        assert_eq!(base.len(), 1);
    }
}
