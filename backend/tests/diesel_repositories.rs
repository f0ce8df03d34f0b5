//! Diesel repositories against embedded PostgreSQL.
//!
//! Gated like the other embedded-cluster suites: run with
//! `RUN_PG_EMBEDDED=1 cargo test -- --ignored`.

use backend::domain::ports::{GrievanceRepository, UserPersistenceError, UserRepository};
use backend::domain::{
    EmailAddress, Grievance, GrievanceId, GrievanceStatus, IssueText, PasswordDigest, User,
    UserAccount, UserId, UserName, UserRole,
};
use backend::outbound::persistence::{
    DbPool, DieselGrievanceRepository, DieselUserRepository, PoolConfig, run_migrations,
};
use chrono::Utc;
use futures::future::join_all;
use pg_embedded_setup_unpriv::TestCluster;
use tokio::runtime::Runtime;

const DIGEST: &str = "$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2g";

fn skip_unless_enabled() -> bool {
    if std::env::var("RUN_PG_EMBEDDED").as_deref() != Ok("1") {
        eprintln!("SKIP-TEST-CLUSTER: set RUN_PG_EMBEDDED=1 to run");
        return true;
    }
    false
}

fn account(email: &str) -> UserAccount {
    UserAccount {
        user: User::new(
            UserId::random(),
            UserName::new("Ada").expect("name"),
            EmailAddress::new(email).expect("email"),
            UserRole::new("applicant").expect("role"),
        ),
        password_digest: PasswordDigest::new(DIGEST).expect("digest"),
    }
}

async fn migrated_pool(database_url: &str) -> DbPool {
    run_migrations(database_url)
        .await
        .expect("migrations apply");
    DbPool::new(PoolConfig::new(database_url).with_max_size(4))
        .await
        .expect("pool builds")
}

#[test]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn grievance_counter_issues_distinct_sequential_ids() {
    if skip_unless_enabled() {
        return;
    }
    let cluster = TestCluster::new().expect("embedded Postgres should start");
    let url = cluster.connection().database_url("postgres");
    let runtime = Runtime::new().expect("tokio runtime");

    runtime.block_on(async {
        let repo = DieselGrievanceRepository::new(migrated_pool(&url).await);

        let issued = join_all((0..8).map(|_| repo.next_grievance_id())).await;
        let mut ids: Vec<i64> = issued
            .into_iter()
            .map(|id| id.expect("counter advances"))
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());

        let id = GrievanceId::new(repo.next_grievance_id().await.expect("next id"))
            .expect("positive id");
        assert_eq!(id.value(), 9);
        let grievance = Grievance::open(
            id,
            IssueText::new("Overflowing bins on Mill Lane"),
            Utc::now(),
        );
        repo.insert(&grievance).await.expect("insert grievance");

        let found = repo
            .find_by_grievance_id(id)
            .await
            .expect("lookup")
            .expect("stored grievance");
        assert_eq!(found.title, "Overflowing bins on Mill Lane");
        assert_eq!(found.description, found.title);
        assert_eq!(found.status, GrievanceStatus::Open);

        let missing = repo
            .find_by_grievance_id(GrievanceId::new(1).expect("id"))
            .await
            .expect("lookup");
        assert!(missing.is_none(), "issued but never inserted");
    });
}

#[test]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn user_repository_enforces_unique_email() {
    if skip_unless_enabled() {
        return;
    }
    let cluster = TestCluster::new().expect("embedded Postgres should start");
    let url = cluster.connection().database_url("postgres");
    let runtime = Runtime::new().expect("tokio runtime");

    runtime.block_on(async {
        let repo = DieselUserRepository::new(migrated_pool(&url).await);
        let first = account("ada@example.com");
        repo.insert(&first).await.expect("first insert");

        let duplicate = repo
            .insert(&account("ADA@example.com"))
            .await
            .expect_err("duplicate email");
        assert!(matches!(
            duplicate,
            UserPersistenceError::DuplicateEmail { .. }
        ));

        let email = EmailAddress::new("ada@example.com").expect("email");
        let stored = repo
            .find_by_email(&email)
            .await
            .expect("lookup")
            .expect("stored account");
        assert_eq!(stored.user.id(), first.user.id());
        assert_eq!(stored.password_digest.as_str(), DIGEST);

        let other = EmailAddress::new("grace@example.com").expect("email");
        assert!(repo.find_by_email(&other).await.expect("lookup").is_none());
    });
}
