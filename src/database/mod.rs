mod mongo_store;
pub mod store;

#[cfg(test)]
pub mod memory;

pub use store::*;

use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use std::error::Error;

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // Test connection
        client.database("admin").run_command(doc! { "ping": 1 }).await?;
        log::info!("🏓 Pinged deployment, connected to database '{}'", db_name);

        let mongodb = Self { client, db };
        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates the indexes the queries rely on
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        log::info!("🔧 Creating database indexes...");

        // users(email) unique - closes the check-then-insert race on signup
        let users = self.collection::<Document>(USERS);
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match users.create_index(email_index).await {
            Ok(_) => log::info!("   ✅ Index created: users(email) unique"),
            Err(e) => log::warn!("   ⚠️  Could not create unique users(email) index: {}", e),
        }

        let lessons = self.collection::<Document>(LESSONS);
        for key in ["authorEmail", "category", "emotionalTone"] {
            let mut keys = Document::new();
            keys.insert(key, 1);
            let index = IndexModel::builder().keys(keys).build();
            match lessons.create_index(index).await {
                Ok(_) => log::info!("   ✅ Index created: lessons({})", key),
                Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
            }
        }

        let comments = self.collection::<Document>(COMMENTS);
        let comments_index = IndexModel::builder()
            .keys(doc! { "lessonId": 1, "createdAt": -1 })
            .build();

        match comments.create_index(comments_index).await {
            Ok(_) => log::info!("   ✅ Index created: comments(lessonId, createdAt)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Closes the connection pool once the server has stopped
    pub async fn shutdown(self) {
        log::info!("🔌 Closing MongoDB connections...");
        self.client.shutdown().await;
    }
}
