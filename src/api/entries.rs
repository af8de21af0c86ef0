//! Entry Documents Client
//!
//! One document per journal entry, stored under the signed-in user's
//! collection. Documents are never mutated after creation.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use super::{error_from_response, get_api_base, storage, ApiError};
use crate::picture::PictureRef;
use crate::state::session::AuthUser;

/// A persisted journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub date: String,
    pub title: String,
    pub picture_url: String,
    pub description: String,
}

/// The four editable fields of the entry form, prior to persistence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub date: String,
    pub title: String,
    pub picture_url: String,
    pub description: String,
}

/// Wire form of a new entry document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDoc {
    pub date: String,
    pub title: String,
    pub picture_url: String,
    pub description: String,
}

impl EntryDraft {
    /// Finalize the draft into the document to persist, substituting the
    /// resolved picture URL for the form's local value.
    pub fn into_doc(self, picture_url: String) -> EntryDoc {
        EntryDoc {
            date: self.date,
            title: self.title,
            picture_url,
            description: self.description,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreateEntryResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct EntryListResponse {
    entries: Vec<JournalEntry>,
}

/// Persist one entry for the signed-in user, uploading the picture first
/// when the draft still points at a local resource.
///
/// Strictly sequential: fetch local bytes, upload, resolve the download
/// URL, write the document. Any failure aborts the chain and is returned
/// to the caller; nothing written so far is rolled back. The placeholder
/// sentinel is stored verbatim without an upload.
pub async fn save_entry(user: &AuthUser, draft: EntryDraft) -> Result<String, ApiError> {
    let picture_url = if PictureRef::parse(&draft.picture_url).needs_upload() {
        storage::save_picture(user, &draft.picture_url).await?
    } else {
        draft.picture_url.clone()
    };

    let doc = draft.into_doc(picture_url);
    create_entry(user, &doc).await
}

/// Write one entry document to the user's collection, returning its id
pub async fn create_entry(user: &AuthUser, doc: &EntryDoc) -> Result<String, ApiError> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/users/{}/entries", api_base, user.user_id))
        .header("Authorization", &format!("Bearer {}", user.token))
        .json(doc)?
        .send()
        .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let result: CreateEntryResponse = response.json().await?;
    Ok(result.id)
}

/// Fetch all entries for the signed-in user
pub async fn list_entries(user: &AuthUser) -> Result<Vec<JournalEntry>, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/users/{}/entries", api_base, user.user_id))
        .header("Authorization", &format!("Bearer {}", user.token))
        .send()
        .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let result: EntryListResponse = response.json().await?;
    Ok(result.entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::PLACEHOLDER_PICTURE;

    fn draft(picture_url: &str) -> EntryDraft {
        EntryDraft {
            date: "2024-01-05".to_string(),
            title: "Hike".to_string(),
            picture_url: picture_url.to_string(),
            description: "Great day".to_string(),
        }
    }

    #[test]
    fn test_placeholder_draft_is_stored_verbatim() {
        // The sentinel never triggers an upload and survives unchanged.
        let draft = draft(PLACEHOLDER_PICTURE);
        assert!(!PictureRef::parse(&draft.picture_url).needs_upload());

        let doc = draft.into_doc(PLACEHOLDER_PICTURE.to_string());
        assert_eq!(doc.date, "2024-01-05");
        assert_eq!(doc.title, "Hike");
        assert_eq!(doc.picture_url, PLACEHOLDER_PICTURE);
        assert_eq!(doc.description, "Great day");
    }

    #[test]
    fn test_local_draft_is_substituted_with_download_url() {
        // A local object URL must be replaced by the upload result, never
        // persisted as-is.
        let local = "blob:https://app.example/123-456";
        let draft = draft(local);
        assert!(PictureRef::parse(&draft.picture_url).needs_upload());

        let doc = draft.into_doc("https://cdn.example/users/u1/pictures/1".to_string());
        assert_eq!(doc.picture_url, "https://cdn.example/users/u1/pictures/1");
        assert_ne!(doc.picture_url, local);
    }

    #[test]
    fn test_entry_doc_wire_shape() {
        let doc = draft(PLACEHOLDER_PICTURE).into_doc(PLACEHOLDER_PICTURE.to_string());
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["date"], "2024-01-05");
        assert_eq!(json["title"], "Hike");
        assert_eq!(json["pictureUrl"], PLACEHOLDER_PICTURE);
        assert_eq!(json["description"], "Great day");
    }

    #[test]
    fn test_journal_entry_wire_shape() {
        let entry: JournalEntry = serde_json::from_str(
            r#"{
                "id": "e1",
                "date": "2024-01-05",
                "title": "Hike",
                "pictureUrl": "https://cdn.example/p.png",
                "description": "Great day"
            }"#,
        )
        .unwrap();
        assert_eq!(entry.id, "e1");
        assert_eq!(entry.picture_url, "https://cdn.example/p.png");
    }

    #[test]
    fn test_entry_list_wire_shape() {
        let result: EntryListResponse = serde_json::from_str(
            r#"{"entries":[{"id":"e1","date":"d","title":"t","pictureUrl":"p","description":""}]}"#,
        )
        .unwrap();
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].id, "e1");
    }
}
