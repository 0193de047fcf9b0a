//! Integration tests for link CRUD scoped to a parent category.

use linkhub_db::models::category::CreateCategory;
use linkhub_db::models::link::{CreateLink, UpdateLink};
use linkhub_db::repositories::{CategoryRepo, LinkRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_category(pool: &PgPool, name: &str) -> i64 {
    CategoryRepo::create(
        pool,
        &CreateCategory {
            name: name.to_string(),
            order: 0,
        },
    )
    .await
    .unwrap()
    .id
}

fn new_link(title: &str) -> CreateLink {
    CreateLink {
        title: title.to_string(),
        url: "http://x".to_string(),
        order: 0,
        is_active: true,
        category_id: 0,
    }
}

fn replacement(title: &str, is_active: bool) -> UpdateLink {
    UpdateLink {
        title: title.to_string(),
        url: "http://y".to_string(),
        order: 4,
        is_active,
        category_id: 0,
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_assigns_rank_per_category(pool: PgPool) {
    let a = create_category(&pool, "A").await;
    let b = create_category(&pool, "B").await;

    let a1 = LinkRepo::create(&pool, a, &new_link("a1")).await.unwrap().unwrap();
    let a2 = LinkRepo::create(&pool, a, &new_link("a2")).await.unwrap().unwrap();
    let b1 = LinkRepo::create(&pool, b, &new_link("b1")).await.unwrap().unwrap();

    assert_eq!(a1.order, 1);
    assert_eq!(a2.order, 2);
    assert_eq!(b1.order, 1, "ranks are scoped per category");
    assert!(a1.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_ignores_body_category_id(pool: PgPool) {
    let target = create_category(&pool, "Target").await;
    let other = create_category(&pool, "Other").await;

    let mut input = new_link("x");
    input.category_id = other;
    let link = LinkRepo::create(&pool, target, &input).await.unwrap().unwrap();

    assert_eq!(link.category_id, target);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_in_missing_category_returns_none(pool: PgPool) {
    let result = LinkRepo::create(&pool, 999_999, &new_link("orphan"))
        .await
        .unwrap();
    assert!(result.is_none());

    let all = LinkRepo::list_all(&pool).await.unwrap();
    assert!(all.is_empty(), "nothing may be persisted");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_appends_get_distinct_ranks(pool: PgPool) {
    let category = create_category(&pool, "Busy").await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            LinkRepo::create(&pool, category, &new_link(&format!("l{i}")))
                .await
                .unwrap()
                .unwrap()
                .order
        }));
    }

    let mut ranks = Vec::new();
    for handle in handles {
        ranks.push(handle.await.unwrap());
    }
    ranks.sort_unstable();
    assert_eq!(ranks, (1..=8).collect::<Vec<_>>());
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_active_listing_hides_inactive(pool: PgPool) {
    let category = create_category(&pool, "Mixed").await;
    let mut hidden = new_link("hidden");
    hidden.is_active = false;
    LinkRepo::create(&pool, category, &hidden).await.unwrap().unwrap();
    LinkRepo::create(&pool, category, &new_link("shown")).await.unwrap().unwrap();

    let links = LinkRepo::list_active_by_category(&pool, category)
        .await
        .unwrap()
        .expect("category exists");
    assert_eq!(links.len(), 1);
    assert!(links.iter().all(|l| l.is_active));

    let all = LinkRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2, "admin listing includes inactive links");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_active_listing_of_missing_category_is_none(pool: PgPool) {
    let result = LinkRepo::list_active_by_category(&pool, 999_999)
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Ownership-scoped update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_fields(pool: PgPool) {
    let category = create_category(&pool, "A").await;
    let link = LinkRepo::create(&pool, category, &new_link("old")).await.unwrap().unwrap();

    let updated = LinkRepo::update(&pool, category, link.id, &replacement("new", false))
        .await
        .unwrap()
        .expect("link belongs to category");

    assert_eq!(updated.title, "new");
    assert_eq!(updated.url, "http://y");
    assert_eq!(updated.order, 4);
    assert!(!updated.is_active);
    assert_eq!(updated.category_id, category);
    assert!(updated.updated_at >= link.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_wrong_category_leaves_row(pool: PgPool) {
    let owner = create_category(&pool, "Owner").await;
    let stranger = create_category(&pool, "Stranger").await;
    let link = LinkRepo::create(&pool, owner, &new_link("mine")).await.unwrap().unwrap();

    let mut input = replacement("hijacked", true);
    input.category_id = stranger;
    let result = LinkRepo::update(&pool, stranger, link.id, &input).await.unwrap();
    assert!(result.is_none());

    let unchanged = LinkRepo::find_by_id(&pool, link.id).await.unwrap().unwrap();
    assert_eq!(unchanged.title, "mine");
    assert_eq!(unchanged.category_id, owner);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_requires_matching_category(pool: PgPool) {
    let owner = create_category(&pool, "Owner").await;
    let stranger = create_category(&pool, "Stranger").await;
    let link = LinkRepo::create(&pool, owner, &new_link("mine")).await.unwrap().unwrap();

    assert!(!LinkRepo::delete(&pool, stranger, link.id).await.unwrap());
    assert!(LinkRepo::find_by_id(&pool, link.id).await.unwrap().is_some());

    assert!(LinkRepo::delete(&pool, owner, link.id).await.unwrap());
    assert!(LinkRepo::find_by_id(&pool, link.id).await.unwrap().is_none());
}
