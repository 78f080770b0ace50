//! Point input under each subtopic, kept separately per subtopic so typing
//! in one row never leaks into another.

use std::collections::HashMap;

use crate::api::{ApiError, TermSubpoint, TermSubpointPayload};
use crate::utils::validation::require;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointDraft {
    pub text: String,
    /// The point being edited, `None` when adding.
    pub editing: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubpointDrafts {
    rows: HashMap<i64, PointDraft>,
}

impl SubpointDrafts {
    pub fn get(&self, subtopic_id: i64) -> Option<&PointDraft> {
        self.rows.get(&subtopic_id)
    }

    pub fn text(&self, subtopic_id: i64) -> String {
        self.rows
            .get(&subtopic_id)
            .map(|row| row.text.clone())
            .unwrap_or_default()
    }

    pub fn editing(&self, subtopic_id: i64) -> Option<i64> {
        self.rows.get(&subtopic_id).and_then(|row| row.editing)
    }

    pub fn set_text(&mut self, subtopic_id: i64, text: String) {
        self.rows.entry(subtopic_id).or_default().text = text;
    }

    pub fn start_edit(&mut self, point: &TermSubpoint) {
        self.rows.insert(
            point.subtopic_id,
            PointDraft {
                text: point.point.clone(),
                editing: Some(point.id),
            },
        );
    }

    pub fn clear(&mut self, subtopic_id: i64) {
        self.rows.remove(&subtopic_id);
    }

    /// Drops rows whose subtopic is gone.
    pub fn retain_subtopics(&mut self, subtopic_ids: &[i64]) {
        self.rows.retain(|id, _| subtopic_ids.contains(id));
    }

    /// Edit id and payload for the row under `subtopic_id`.
    pub fn payload(&self, subtopic_id: i64) -> Result<(Option<i64>, TermSubpointPayload), ApiError> {
        let row = self.rows.get(&subtopic_id).cloned().unwrap_or_default();
        require("Point", &row.text)?;
        Ok((
            row.editing,
            TermSubpointPayload {
                subtopic_id,
                point: row.text.trim().to_string(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_independent() {
        let mut drafts = SubpointDrafts::default();
        drafts.set_text(1, "first".into());
        drafts.set_text(2, "second".into());
        assert_eq!(drafts.text(1), "first");
        assert_eq!(drafts.text(2), "second");

        drafts.clear(1);
        assert_eq!(drafts.text(1), "");
        assert_eq!(drafts.text(2), "second");
    }

    #[test]
    fn editing_a_point_fills_only_its_row() {
        let mut drafts = SubpointDrafts::default();
        drafts.set_text(3, "typing".into());
        drafts.start_edit(&TermSubpoint {
            id: 40,
            subtopic_id: 4,
            point: "Existing".into(),
        });
        assert_eq!(drafts.editing(4), Some(40));
        assert_eq!(drafts.editing(3), None);
        assert_eq!(drafts.text(3), "typing");

        let (id, payload) = drafts.payload(4).expect("payload");
        assert_eq!(id, Some(40));
        assert_eq!(payload.subtopic_id, 4);
        assert_eq!(payload.point, "Existing");
    }

    #[test]
    fn blank_point_is_rejected() {
        let mut drafts = SubpointDrafts::default();
        drafts.set_text(5, "   ".into());
        let err = drafts.payload(5).expect_err("blank");
        assert_eq!(err.error, "Point is required.");
        assert!(drafts.payload(6).is_err());
    }

    #[test]
    fn retain_drops_removed_subtopics() {
        let mut drafts = SubpointDrafts::default();
        drafts.set_text(1, "a".into());
        drafts.set_text(2, "b".into());
        drafts.retain_subtopics(&[2]);
        assert!(drafts.get(1).is_none());
        assert!(drafts.get(2).is_some());
    }
}
