use mindtrack::load_config;
use mindtrack::models::users::{RegisterUser, User};
use mindtrack::services::users::register_user;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use std::sync::Once;
use std::sync::atomic::{AtomicU32, Ordering};

static INIT: Once = Once::new();
static USER_SEQ: AtomicU32 = AtomicU32::new(0);

/// Initialize test database
pub async fn init_test_db() -> PgPool {
    INIT.call_once(|| {
        dotenvy::dotenv().ok();
    });

    let config = load_config().expect("Failed to load config");
    let pool = PgPool::connect(config.database.connection_string().expose_secret())
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Test database wrapper for better test isolation
///
/// Each test gets its own username/email namespace derived from the test
/// function name, so parallel tests never collide and leftover data from a
/// failed run is cleaned up on the next one.
pub struct TestDb {
    pub pool: PgPool,
    test_prefix: String,
}

impl TestDb {
    /// Creates a new test database instance with an isolated data namespace.
    ///
    /// # Arguments
    /// * `test_name` - The name of the test function (must match for traceable data)
    pub async fn new(test_name: &str) -> Self {
        let pool = init_test_db().await;
        let test_prefix = format!("test_{}", test_name);

        // Clean up any existing data with this prefix (handles test retries)
        Self::cleanup_prefix(&pool, &test_prefix).await;

        Self { pool, test_prefix }
    }

    pub async fn get_connection(&self) -> sqlx::pool::PoolConnection<sqlx::Postgres> {
        self.pool
            .acquire()
            .await
            .expect("Failed to get database connection")
    }

    /// Registers a user inside this test's namespace and returns it.
    pub async fn register_test_user(&self) -> User {
        let mut conn = self.get_connection().await;
        let request = self.generate_test_user();
        let username = request.username.clone();

        register_user(&mut conn, request)
            .await
            .expect("Failed to register test user");

        sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash, created_at FROM users WHERE username = $1",
        )
        .bind(&username)
        .fetch_one(&self.pool)
        .await
        .expect("Registered test user should exist")
    }

    /// Builds a unique signup request within this test's namespace.
    pub fn generate_test_user(&self) -> RegisterUser {
        let seq = USER_SEQ.fetch_add(1, Ordering::Relaxed);
        RegisterUser {
            username: format!("{}_{}", self.test_prefix, seq),
            email: format!("{}_{}@example.com", self.test_prefix, seq),
            password: "correct-horse".to_string(),
        }
    }

    /// Deletes this test's users and their entries, children first to keep
    /// the foreign keys satisfied.
    async fn cleanup_prefix(pool: &PgPool, prefix: &str) {
        let pattern = format!("{}%", prefix);
        for table in ["journal_entries", "mood_entries", "quiz_results"] {
            let query = format!(
                "DELETE FROM {} WHERE user_id IN (SELECT id FROM users WHERE username LIKE $1)",
                table
            );
            sqlx::query(&query)
                .bind(&pattern)
                .execute(pool)
                .await
                .expect("Failed to cleanup test entries");
        }

        sqlx::query("DELETE FROM users WHERE username LIKE $1")
            .bind(&pattern)
            .execute(pool)
            .await
            .expect("Failed to cleanup test users");
    }
}
