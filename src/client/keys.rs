//! Key management operations

use reqwest::Method;
use reqwest::multipart::{Form, Part};

use super::client::AdminClient;
use crate::errors::Result;
use crate::types::{
    Ack, ImportReport, InvalidKeysDeleted, KeyCreate, KeyImport, KeyMutation, KeyPage, KeyQuery,
    KeySync, SyncReport,
};

impl AdminClient {
    /// List keys, paginated, optionally filtered by status.
    ///
    /// `page` and `page_size` are always sent; `status` only when non-empty.
    pub async fn keys(&self, query: &KeyQuery) -> Result<KeyPage> {
        let mut params: Vec<(&str, String)> = vec![
            ("page", query.page.to_string()),
            ("page_size", query.page_size.to_string()),
        ];
        if let Some(status) = query.status.as_deref().filter(|s| !s.is_empty()) {
            params.push(("status", status.to_string()));
        }
        let builder = self.request(Method::GET, "/admin/keys").query(&params);
        self.send(builder).await
    }

    /// Add a single key with a starting balance.
    pub async fn add_key(&self, key: &str, balance: f64) -> Result<KeyMutation> {
        let body = KeyCreate {
            key: key.to_string(),
            balance,
        };
        let builder = self.request(Method::POST, "/admin/keys").json(&body);
        self.send(builder).await
    }

    /// Delete one key by record id.
    pub async fn delete_key(&self, key_id: i64) -> Result<Ack> {
        let builder = self.request(Method::DELETE, &format!("/admin/keys/{}", key_id));
        self.send(builder).await
    }

    /// Bulk-import keys as JSON.
    pub async fn import_keys(&self, keys: &[KeyCreate]) -> Result<ImportReport> {
        let body = KeyImport {
            keys: keys.to_vec(),
        };
        let builder = self.request(Method::POST, "/admin/keys/import").json(&body);
        self.send(builder).await
    }

    /// Upload a CSV file (`key,balance` per line) for import.
    pub async fn import_keys_csv(&self, file_name: &str, content: Vec<u8>) -> Result<ImportReport> {
        let part = Part::bytes(content)
            .file_name(file_name.to_string())
            .mime_str("text/csv")?;
        let form = Form::new().part("file", part);
        let builder = self.multipart("/admin/keys/import/csv", form);
        self.send(builder).await
    }

    /// Upload a plain-text file (one key per line) for import.
    pub async fn import_keys_text(
        &self,
        file_name: &str,
        content: Vec<u8>,
        default_balance: f64,
    ) -> Result<ImportReport> {
        let part = Part::bytes(content)
            .file_name(file_name.to_string())
            .mime_str("text/plain")?;
        let form = Form::new().part("file", part);
        let builder = self
            .multipart("/admin/keys/import/text", form)
            .query(&[("default_balance", default_balance)]);
        self.send(builder).await
    }

    /// Bulk-remove keys the server flags as invalid.
    pub async fn delete_invalid_keys(&self) -> Result<InvalidKeysDeleted> {
        let builder = self.request(Method::DELETE, "/admin/keys/invalid/batch");
        self.send(builder).await
    }

    /// Refresh every key's balance against the upstream.
    pub async fn sync_all_keys(&self) -> Result<SyncReport> {
        let builder = self.request(Method::POST, "/admin/sync");
        self.send(builder).await
    }

    /// Refresh one key's balance against the upstream.
    pub async fn sync_key(&self, key_id: i64) -> Result<KeySync> {
        let builder = self.request(Method::POST, &format!("/admin/keys/{}/sync", key_id));
        self.send(builder).await
    }
}
