//! Integration tests for the Diesel adapters against embedded PostgreSQL.
//!
//! Covers the SQL the in-memory store cannot: the `short OR long` search
//! filter, the pivot join, the conflict-free attach, and token fingerprint
//! lookup.

use acronyms_backend::domain::ports::{
    AcronymRepository, CategoryRepository, TokenAuthenticator, UserRepository,
};
use acronyms_backend::domain::{
    AccessToken, AcronymContent, AcronymId, CategoryId, ErrorCode, NewAcronym, UserId,
};
use acronyms_backend::outbound::persistence::{
    DbPool, DieselAcronymRepository, DieselCategoryRepository, DieselTokenAuthenticator,
    DieselUserRepository, PoolConfig, run_pending_migrations,
};
use pg_embedded_setup_unpriv::{TemporaryDatabase, TestCluster};
use postgres::{Client, NoTls};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use uuid::Uuid;

mod support;

use support::pg_embed::test_cluster;
use support::{format_postgres_error, handle_cluster_setup_failure};

const TOKEN: &str = "ada-token";

struct TestContext {
    runtime: Runtime,
    acronyms: DieselAcronymRepository,
    categories: DieselCategoryRepository,
    users: DieselUserRepository,
    authenticator: DieselTokenAuthenticator,
    user_id: UserId,
    category_id: CategoryId,
    // Dropped before the cluster that hosts it.
    _database: TemporaryDatabase,
    _cluster: TestCluster,
}

fn seed(url: &str, user_id: &UserId, category_id: &CategoryId) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    let user_uuid = *user_id.as_uuid();
    let fingerprint = AccessToken::new(TOKEN)
        .map_err(|err| err.to_string())?
        .fingerprint();

    client
        .execute(
            "INSERT INTO users (id, name, username, password_hash) VALUES ($1, $2, $3, $4)",
            &[&user_uuid, &"Ada Lovelace", &"ada", &"$2b$12$not-a-real-hash"],
        )
        .map_err(|err| format_postgres_error(&err))?;
    client
        .execute(
            "INSERT INTO tokens (token_hash, user_id) VALUES ($1, $2)",
            &[&fingerprint, &user_uuid],
        )
        .map_err(|err| format_postgres_error(&err))?;
    client
        .execute(
            "INSERT INTO categories (id, name) VALUES ($1, $2)",
            &[category_id.as_uuid(), &"Teenager"],
        )
        .map_err(|err| format_postgres_error(&err))?;
    Ok(())
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    let db_name = format!("acronyms_{}", Uuid::new_v4().simple());
    let database = cluster
        .temporary_database(db_name.as_str())
        .map_err(|err| format!("{err:?}"))?;
    let database_url = database.url().to_string();

    runtime
        .block_on(run_pending_migrations(&database_url))
        .map_err(|err| err.to_string())?;

    let user_id = UserId::random();
    let category_id = CategoryId::random();
    seed(&database_url, &user_id, &category_id)?;

    let pool = runtime
        .block_on(DbPool::new(PoolConfig::new(&database_url).with_max_size(2)))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        acronyms: DieselAcronymRepository::new(pool.clone()),
        categories: DieselCategoryRepository::new(pool.clone()),
        users: DieselUserRepository::new(pool.clone()),
        authenticator: DieselTokenAuthenticator::new(pool),
        user_id,
        category_id,
        _database: database,
        _cluster: cluster,
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn new_acronym(short: &str, long: &str, owner: UserId) -> NewAcronym {
    NewAcronym {
        content: AcronymContent {
            short: short.to_owned(),
            long: long.to_owned(),
        },
        user_id: owner,
    }
}

#[rstest]
fn insert_assigns_an_id_that_find_returns(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: insert_assigns_an_id_that_find_returns skipped");
        return;
    };

    let stored = ctx
        .runtime
        .block_on(
            ctx.acronyms
                .insert(&new_acronym("OMG", "Oh My God", ctx.user_id)),
        )
        .expect("insert acronym");
    assert_eq!(stored.short(), "OMG");
    assert_eq!(stored.user_id(), ctx.user_id);

    let found = ctx
        .runtime
        .block_on(ctx.acronyms.find_by_id(&stored.id()))
        .expect("find acronym")
        .expect("acronym exists");
    assert_eq!(found, stored);

    let all = ctx
        .runtime
        .block_on(ctx.acronyms.list_all())
        .expect("list acronyms");
    assert_eq!(all, vec![stored]);
}

#[rstest]
#[case("TIL", true)]
#[case("Today I Learned", true)]
#[case("til", false)]
#[case("Today", false)]
fn search_matches_either_column_exactly(
    repo_context: Option<TestContext>,
    #[case] term: &str,
    #[case] expected: bool,
) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: search_matches_either_column_exactly skipped");
        return;
    };

    let (til, found) = ctx.runtime.block_on(async {
        let til = ctx
            .acronyms
            .insert(&new_acronym("TIL", "Today I Learned", ctx.user_id))
            .await
            .expect("insert TIL");
        ctx.acronyms
            .insert(&new_acronym("BRB", "Be Right Back", ctx.user_id))
            .await
            .expect("insert BRB");
        let found = ctx.acronyms.search(term).await.expect("search");
        (til, found)
    });

    if expected {
        assert_eq!(found, vec![til]);
    } else {
        assert!(found.is_empty(), "{term:?} should not match");
    }
}

#[rstest]
fn attaching_twice_lists_the_category_once(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: attaching_twice_lists_the_category_once skipped");
        return;
    };

    let categories = ctx.runtime.block_on(async {
        let acronym = ctx
            .acronyms
            .insert(&new_acronym("IKR", "I Know, Right?", ctx.user_id))
            .await
            .expect("insert acronym");
        for _ in 0..2 {
            ctx.acronyms
                .attach_category(&acronym.id(), &ctx.category_id)
                .await
                .expect("attach category");
        }
        ctx.acronyms
            .categories_for(&acronym.id())
            .await
            .expect("load categories")
    });

    assert_eq!(categories.len(), 1);
    assert_eq!(categories.first().map(|c| c.id), Some(ctx.category_id));
    assert_eq!(categories.first().map(|c| c.name.as_str()), Some("Teenager"));
}

#[rstest]
fn update_and_delete_report_missing_rows(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: update_and_delete_report_missing_rows skipped");
        return;
    };

    ctx.runtime.block_on(async {
        let unknown = AcronymId::random();
        assert!(!ctx.acronyms.delete(&unknown).await.expect("delete unknown"));

        let mut acronym = ctx
            .acronyms
            .insert(&new_acronym("AFK", "Away From Keyboard", ctx.user_id))
            .await
            .expect("insert acronym");
        ctx.acronyms
            .attach_category(&acronym.id(), &ctx.category_id)
            .await
            .expect("attach category");

        acronym.revise(
            AcronymContent {
                short: "AFK".to_owned(),
                long: "Away From Keys".to_owned(),
            },
            ctx.user_id,
        );
        assert!(ctx.acronyms.update(&acronym).await.expect("update"));
        let reloaded = ctx
            .acronyms
            .find_by_id(&acronym.id())
            .await
            .expect("reload")
            .expect("acronym exists");
        assert_eq!(reloaded.long(), "Away From Keys");

        assert!(ctx.acronyms.delete(&acronym.id()).await.expect("delete"));
        assert!(!ctx.acronyms.update(&acronym).await.expect("update deleted"));
        assert!(
            ctx.acronyms
                .categories_for(&acronym.id())
                .await
                .expect("links after delete")
                .is_empty()
        );
    });
}

#[rstest]
fn category_and_user_lookups(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: category_and_user_lookups skipped");
        return;
    };

    ctx.runtime.block_on(async {
        let category = ctx
            .categories
            .find_by_id(&ctx.category_id)
            .await
            .expect("find category");
        assert_eq!(category.map(|c| c.name), Some("Teenager".to_owned()));
        let missing = ctx
            .categories
            .find_by_id(&CategoryId::random())
            .await
            .expect("find missing category");
        assert!(missing.is_none());

        let user = ctx
            .users
            .find_by_id(&ctx.user_id)
            .await
            .expect("find user")
            .expect("user exists");
        assert_eq!(user.username(), "ada");
    });
}

#[rstest]
#[case(TOKEN, true)]
#[case("someone-elses-token", false)]
fn token_lookup_matches_stored_fingerprint(
    repo_context: Option<TestContext>,
    #[case] raw: &str,
    #[case] known: bool,
) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: token_lookup_matches_stored_fingerprint skipped");
        return;
    };

    let token = AccessToken::new(raw).expect("valid token");
    let result = ctx.runtime.block_on(ctx.authenticator.authenticate(&token));
    match (known, result) {
        (true, Ok(user)) => assert_eq!(user.id(), ctx.user_id),
        (false, Err(err)) => assert_eq!(err.code(), ErrorCode::Unauthorized),
        (true, Err(err)) => panic!("expected user, got {err:?}"),
        (false, Ok(user)) => panic!("expected rejection, got user {}", user.id()),
    }
}
