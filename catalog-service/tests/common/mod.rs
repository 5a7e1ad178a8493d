use catalog_service::config::{CatalogConfig, MongoConfig, ServerConfig};
use catalog_service::models::{Product, SalePrice};
use catalog_service::services::MongoDb;
use catalog_service::startup::Application;
use mongodb::bson::Document;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_name = format!("catalog_test_{}", Uuid::new_v4());

        let config = CatalogConfig {
            server: ServerConfig {
                port: 0, // Random port for testing
            },
            mongodb: MongoConfig {
                uri: std::env::var("TEST_MONGODB_URI")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
                database: db_name.clone(),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    pub async fn seed_products(&self, products: Vec<Product>) {
        self.db
            .products()
            .insert_many(products, None)
            .await
            .expect("Failed to seed products");
    }

    /// Drop the per-test database.
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}

pub fn product(title: &str, category: &str, price: f64) -> Product {
    Product {
        title: Some(title.to_string()),
        category_name: Some(category.to_string()),
        sale_price: Some(SalePrice {
            usd_amount: Some(price),
            extra: Document::new(),
        }),
        extra: Document::new(),
    }
}
