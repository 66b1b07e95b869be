//! In-memory stores for handler tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::{ProfileStore, VisitStore};
use crate::error::{AppError, Result};
use crate::models::user_profile::UserProfile;
use crate::models::visit::Visit;

#[derive(Default)]
pub struct MemoryVisitStore {
    table_created: Mutex<bool>,
    create_calls: Mutex<usize>,
    rows: Mutex<Vec<(u64, Visit)>>,
}

impl MemoryVisitStore {
    pub fn rows(&self) -> Vec<Visit> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn create_calls(&self) -> usize {
        *self.create_calls.lock().unwrap()
    }
}

#[async_trait]
impl VisitStore for MemoryVisitStore {
    async fn ensure_table(&self) -> Result<()> {
        *self.create_calls.lock().unwrap() += 1;
        *self.table_created.lock().unwrap() = true;
        Ok(())
    }

    async fn insert(&self, user_ip: &str, timestamp: NaiveDateTime) -> Result<()> {
        if !*self.table_created.lock().unwrap() {
            return Err(AppError::Database(sqlx::Error::Protocol(
                "Table 'visits' doesn't exist".into(),
            )));
        }

        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as u64 + 1;
        rows.push((
            id,
            Visit {
                user_ip: user_ip.to_string(),
                timestamp,
            },
        ));
        Ok(())
    }

    async fn recent(&self, limit: u32) -> Result<Vec<Visit>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|(a_id, a), (b_id, b)| {
            b.timestamp.cmp(&a.timestamp).then(b_id.cmp(a_id))
        });
        Ok(rows
            .into_iter()
            .take(limit as usize)
            .map(|(_, v)| v)
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryProfileStore {
    docs: Mutex<HashMap<String, UserProfile>>,
}

impl MemoryProfileStore {
    pub fn seed(&self, profile: UserProfile) {
        self.docs
            .lock()
            .unwrap()
            .insert(profile.username.clone(), profile);
    }

    pub fn get(&self, username: &str) -> Option<UserProfile> {
        self.docs.lock().unwrap().get(username).cloned()
    }

    pub fn len(&self) -> usize {
        self.docs.lock().unwrap().len()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn find(&self, username: &str) -> Result<Option<UserProfile>> {
        Ok(self.get(username))
    }

    async fn upsert(&self, username: &str, first_name: &str, age: i32) -> Result<()> {
        let mut docs = self.docs.lock().unwrap();
        match docs.get_mut(username) {
            Some(profile) => profile.apply(first_name.to_string(), age),
            None => {
                docs.insert(
                    username.to_string(),
                    UserProfile::new(username.to_string(), first_name.to_string(), age),
                );
            }
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn repeated_table_creation_keeps_rows() {
        let store = MemoryVisitStore::default();
        store.ensure_table().await.unwrap();
        store
            .insert("203.0.*.*", chrono::Utc::now().naive_utc())
            .await
            .unwrap();
        store.ensure_table().await.unwrap();
        store.ensure_table().await.unwrap();

        assert_eq!(store.create_calls(), 3);
        assert_eq!(store.rows().len(), 1);
    }

    #[actix_web::test]
    async fn recent_breaks_timestamp_ties_by_insertion() {
        let store = MemoryVisitStore::default();
        store.ensure_table().await.unwrap();
        let at = chrono::Utc::now().naive_utc();
        store.insert("10.0.*.*", at).await.unwrap();
        store.insert("10.1.*.*", at).await.unwrap();

        let recent = store.recent(10).await.unwrap();
        assert_eq!(recent[0].user_ip, "10.1.*.*");
        assert_eq!(recent[1].user_ip, "10.0.*.*");
    }
}
