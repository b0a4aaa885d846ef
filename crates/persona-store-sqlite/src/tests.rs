//! Integration tests for `SqliteStore` against an in-memory database.

use persona_core::{Person, PersonStore, Sex};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn juan() -> Person { Person::new("Juan", "Perez", Some(30), Some(Sex::Male)) }

fn maria() -> Person {
  Person::new("Maria", "Lopez", Some(25), Some(Sex::Female))
}

// ─── Insert and read ─────────────────────────────────────────────────────────

#[tokio::test]
async fn save_assigns_id_and_find_returns_it() {
  let s = store().await;

  let saved = s.save(juan()).await.unwrap();
  let id = saved.id.expect("id assigned");
  assert_eq!(saved, Person { id: Some(id), ..juan() });

  let fetched = s.find_by_id(id).await.unwrap();
  assert_eq!(fetched, Some(saved));
}

#[tokio::test]
async fn save_assigns_distinct_ids() {
  let s = store().await;
  let a = s.save(juan()).await.unwrap().id.unwrap();
  let b = s.save(maria()).await.unwrap().id.unwrap();
  assert_ne!(a, b);
  assert_eq!(s.count().await.unwrap(), 2);
}

#[tokio::test]
async fn save_rejects_person_with_id() {
  let s = store().await;
  let err = s
    .save(Person::with_id(3, "Juan", "Perez", 30, Sex::Male))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::AlreadyPersisted(3)));
  assert_eq!(s.count().await.unwrap(), 0);
}

#[tokio::test]
async fn save_rejects_incomplete_person() {
  let s = store().await;
  let err = s
    .save(Person::new("Juan", "Perez", Some(30), None))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Incomplete("sex")));
}

#[tokio::test]
async fn find_missing_returns_none() {
  let s = store().await;
  assert!(s.find_by_id(1).await.unwrap().is_none());
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_overwrites_row() {
  let s = store().await;
  let id = s.save(juan()).await.unwrap().id.unwrap();

  let changed = Person::with_id(id, "Juana", "Perez", 31, Sex::Female);
  let updated = s.update(changed.clone()).await.unwrap();
  assert_eq!(updated, changed);
  assert_eq!(s.find_by_id(id).await.unwrap(), Some(changed));
  assert_eq!(s.count().await.unwrap(), 1);
}

#[tokio::test]
async fn update_never_inserts() {
  let s = store().await;

  let err = s
    .update(Person::with_id(77, "Juan", "Perez", 30, Sex::Male))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::NotFound(77)));

  let err = s.update(juan()).await.unwrap_err();
  assert!(matches!(err, Error::MissingId));

  assert_eq!(s.count().await.unwrap(), 0);
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn find_all_returns_rows_in_id_order() {
  let s = store().await;
  let a = s.save(juan()).await.unwrap();
  let b = s.save(maria()).await.unwrap();

  assert_eq!(s.find_all().await.unwrap(), vec![a, b]);
}

#[tokio::test]
async fn find_by_sex_filters() {
  let s = store().await;
  s.save(juan()).await.unwrap();
  let f1 = s.save(maria()).await.unwrap();
  s.save(Person::new("Pedro", "Gomez", Some(40), Some(Sex::Male)))
    .await
    .unwrap();
  let f2 = s
    .save(Person::new("Ana", "Diaz", Some(18), Some(Sex::Female)))
    .await
    .unwrap();

  let women = s.find_by_sex(Sex::Female).await.unwrap();
  assert_eq!(women, vec![f1, f2]);

  let men = s.find_by_sex(Sex::Male).await.unwrap();
  assert_eq!(men.len(), 2);
  assert!(men.iter().all(|p| p.sex == Some(Sex::Male)));
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_reports_whether_row_existed() {
  let s = store().await;
  let id = s.save(juan()).await.unwrap().id.unwrap();

  assert!(s.delete_by_id(id).await.unwrap());
  assert!(!s.delete_by_id(id).await.unwrap());
  assert!(s.find_by_id(id).await.unwrap().is_none());
  assert_eq!(s.count().await.unwrap(), 0);
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn reopening_file_keeps_rows() {
  let dir = std::env::temp_dir()
    .join(format!("persona-store-test-{}", std::process::id()));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("reopen.db");
  let _ = std::fs::remove_file(&path);

  let id = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.save(maria()).await.unwrap().id.unwrap()
  };

  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(
    s.find_by_id(id).await.unwrap(),
    Some(Person { id: Some(id), ..maria() })
  );

  drop(s);
  let _ = std::fs::remove_dir_all(&dir);
}
