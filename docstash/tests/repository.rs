use std::collections::HashSet;

use chrono::{DateTime, Duration, TimeZone, Utc};
use docstash::{InMemoryRepository, memory::InMemoryBackend, prelude::*};

fn repository() -> InMemoryRepository {
    DocumentRepository::new(InMemoryBackend::new())
}

fn t(hours: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap() + Duration::hours(hours)
}

fn author(id: &str) -> Author {
    Author::builder().id(id).name(format!("Author {id}")).build()
}

/// Stores D1, D2 and D3 and returns their generated ids in that order.
async fn seed(repository: &InMemoryRepository) -> [String; 3] {
    let mut d1 = Document::builder()
        .title("Report A")
        .content("budget figures")
        .author(author("a1"))
        .created(t(0))
        .build();
    let mut d2 = Document::builder()
        .title("Report B")
        .content("summary")
        .author(author("a2"))
        .created(t(1))
        .build();
    let mut d3 = Document::builder()
        .title("Memo")
        .content("budget notes")
        .author(author("a1"))
        .created(t(2))
        .build();

    for document in [&mut d1, &mut d2, &mut d3] {
        repository.upsert(document).await.unwrap();
    }

    [d1, d2, d3].map(|document| document.id.unwrap())
}

async fn search_ids(repository: &InMemoryRepository, request: &SearchRequest) -> HashSet<String> {
    repository
        .search(request)
        .await
        .unwrap()
        .into_iter()
        .filter_map(|document| document.id)
        .collect()
}

fn set<const N: usize>(ids: [&String; N]) -> HashSet<String> {
    ids.into_iter().cloned().collect()
}

#[tokio::test]
async fn upsert_generates_retrievable_id() {
    let repository = repository();
    let mut document = Document::builder().title("Untitled").created(t(5)).build();

    let stored = repository.upsert(&mut document).await.unwrap();

    assert!(document.has_identity());
    assert_eq!(stored, document);
    assert_eq!(document.created, Some(t(5)));
    let found = repository.find_by_id(document.id()).await.unwrap();
    assert_eq!(found, Some(document));
}

#[tokio::test]
async fn upsert_treats_blank_id_as_missing() {
    let repository = repository();
    let mut document = Document::builder().id("   ").title("Blank").build();

    repository.upsert(&mut document).await.unwrap();

    let id = document.id.clone().unwrap();
    assert_ne!(id, "   ");
    assert!(!id.trim().is_empty());
    assert!(repository.find_by_id(id.as_str()).await.unwrap().is_some());
}

#[tokio::test]
async fn generated_ids_are_unique() {
    let repository = repository();

    for _ in 0..100 {
        repository.upsert(&mut Document::default()).await.unwrap();
    }

    assert_eq!(repository.len().await.unwrap(), 100);
}

#[tokio::test]
async fn upsert_preserves_explicit_id() {
    let repository = repository();
    let mut document = Document::builder().id("X").title("A").build();

    repository.upsert(&mut document).await.unwrap();

    assert_eq!(document.id(), Some("X"));
    let stored = repository.find_by_id("X").await.unwrap().unwrap();
    assert_eq!(stored.id(), Some("X"));
    assert_eq!(stored.title.as_deref(), Some("A"));
}

#[tokio::test]
async fn upsert_replaces_instead_of_merging() {
    let repository = repository();

    repository
        .upsert(&mut Document::builder().id("X").title("A").content("first body").build())
        .await
        .unwrap();
    repository
        .upsert(&mut Document::builder().id("X").title("B").build())
        .await
        .unwrap();

    assert_eq!(repository.len().await.unwrap(), 1);
    let stored = repository.find_by_id("X").await.unwrap().unwrap();
    assert_eq!(stored, Document::builder().id("X").title("B").build());
    assert_eq!(stored.content, None);
}

#[tokio::test]
async fn find_by_id_contract() {
    let repository = repository();
    let mut document = Document::builder().id("known").title("Known").build();
    repository.upsert(&mut document).await.unwrap();

    for id in [None, Some(""), Some("   ")] {
        assert!(matches!(
            repository.find_by_id(id).await,
            Err(DocumentStoreError::InvalidArgument(_))
        ));
    }

    assert_eq!(repository.find_by_id("nonexistent").await.unwrap(), None);
    assert_eq!(repository.find_by_id("known").await.unwrap(), Some(document));
}

#[tokio::test]
async fn search_is_a_conjunction_of_active_filters() {
    let repository = repository();
    let [d1, d2, d3] = seed(&repository).await;

    let request = SearchRequest::builder()
        .title_prefixes(["Report"])
        .author_ids(["a1"])
        .build();
    assert_eq!(search_ids(&repository, &request).await, set([&d1]));

    assert_eq!(
        search_ids(&repository, &SearchRequest::new()).await,
        set([&d1, &d2, &d3])
    );

    let window = SearchRequest::builder()
        .created_from(t(0))
        .created_to(t(2))
        .build();
    assert_eq!(search_ids(&repository, &window).await, set([&d2]));

    let budget = SearchRequest::builder().contains_contents(["budget"]).build();
    assert_eq!(search_ids(&repository, &budget).await, set([&d1, &d3]));
}

#[tokio::test]
async fn empty_filters_behave_like_absent_ones() {
    let repository = repository();
    let [d1, d2, d3] = seed(&repository).await;

    let empty = SearchRequest::builder()
        .title_prefixes(Vec::<String>::new())
        .contains_contents(Vec::<String>::new())
        .author_ids(Vec::<String>::new())
        .build();

    assert_eq!(search_ids(&repository, &empty).await, set([&d1, &d2, &d3]));

    let narrowed = SearchRequest {
        author_ids: Some(vec![]),
        ..SearchRequest::builder().title_prefixes(["Memo"]).build()
    };
    assert_eq!(search_ids(&repository, &narrowed).await, set([&d3]));
}

#[tokio::test]
async fn inverted_date_bounds_yield_nothing() {
    let repository = repository();
    seed(&repository).await;

    let request = SearchRequest::builder()
        .created_from(t(2))
        .created_to(t(0))
        .build();

    assert!(repository.search(&request).await.unwrap().is_empty());
}

#[tokio::test]
async fn author_filter_skips_documents_without_author() {
    let repository = repository();
    let [d1, _, d3] = seed(&repository).await;
    repository
        .upsert(&mut Document::builder().title("Orphan").build())
        .await
        .unwrap();

    let request = SearchRequest::builder().author_ids(["a1"]).build();

    assert_eq!(search_ids(&repository, &request).await, set([&d1, &d3]));
}

#[tokio::test]
async fn repeated_search_is_idempotent() {
    let repository = repository();
    seed(&repository).await;
    let request = SearchRequest::builder().contains_contents(["budget", "summary"]).build();

    let first = search_ids(&repository, &request).await;
    let second = search_ids(&repository, &request).await;

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
    assert_eq!(repository.len().await.unwrap(), 3);
}

#[tokio::test]
async fn repositories_can_share_a_backend() {
    let backend = InMemoryBackend::new();
    let writer = DocumentRepository::new(&backend);
    let reader = DocumentRepository::new(&backend);

    writer
        .upsert(&mut Document::builder().id("shared").build())
        .await
        .unwrap();

    assert!(reader.find_by_id("shared").await.unwrap().is_some());
    assert!(!reader.is_empty().await.unwrap());
}

#[tokio::test]
async fn shutdown_consumes_the_repository() {
    let repository = DocumentRepository::new(
        InMemoryBackend::builder().capacity(8).build().await.unwrap(),
    );

    assert!(repository.is_empty().await.unwrap());
    repository.shutdown().await.unwrap();
}

#[tokio::test]
async fn backend_writes_stay_keyed_on_document_id() {
    let repository = repository();
    repository
        .upsert(&mut Document::builder().id("X").title("A").build())
        .await
        .unwrap();

    repository
        .backend()
        .put_document(Document::builder().id("X").title("B").build())
        .await
        .unwrap();
    let blank = repository
        .backend()
        .put_document(Document::builder().id("   ").build())
        .await;

    assert!(matches!(blank, Err(DocumentStoreError::InvalidArgument(_))));
    assert_eq!(repository.find_by_id("Y").await.unwrap(), None);

    let stored = repository.search(&SearchRequest::new()).await.unwrap();
    assert_eq!(stored, vec![Document::builder().id("X").title("B").build()]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_upserts_generate_distinct_ids() {
    const WRITERS: usize = 64;
    let backend = InMemoryBackend::new();

    let handles = (0..WRITERS)
        .map(|_| {
            let repository = DocumentRepository::new(backend.clone());
            tokio::spawn(async move {
                let mut document = Document::default();
                repository.upsert(&mut document).await.map(|_| document.id)
            })
        })
        .collect::<Vec<_>>();

    let mut ids = HashSet::new();
    for handle in handles {
        let id = handle.await.unwrap().unwrap().unwrap();
        assert!(!id.trim().is_empty());
        ids.insert(id);
    }

    let repository = DocumentRepository::new(backend);
    assert_eq!(ids.len(), WRITERS);
    assert_eq!(repository.len().await.unwrap(), WRITERS);
    for id in &ids {
        assert!(repository.find_by_id(id.as_str()).await.unwrap().is_some());
    }
}

#[tokio::test]
async fn no_break_space_ids_are_real_ids() {
    let repository = repository();

    assert_eq!(repository.find_by_id("\u{00A0}").await.unwrap(), None);
    assert!(matches!(
        repository.find_by_id("\u{2003}\t").await,
        Err(DocumentStoreError::InvalidArgument(_))
    ));

    let mut document = Document::builder().id("\u{00A0}").title("Nbsp").build();
    repository.upsert(&mut document).await.unwrap();

    assert_eq!(document.id(), Some("\u{00A0}"));
    assert_eq!(repository.find_by_id("\u{00A0}").await.unwrap(), Some(document));
}
