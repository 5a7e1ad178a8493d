mod common;

use common::{product, TestApp};
use reqwest::{Client, StatusCode};

#[tokio::test]
async fn range_containing_a_product_returns_it() {
    let app = TestApp::spawn().await;
    app.seed_products(vec![product("Red Dress", "dresses", 49.99)])
        .await;

    let client = Client::new();
    let response = client
        .get(format!("{}/api/products/price?min=10&max=100", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let products = body.as_array().expect("Expected array");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["title"], "Red Dress");

    app.cleanup().await;
}

#[tokio::test]
async fn range_excluding_every_product_returns_404() {
    let app = TestApp::spawn().await;
    app.seed_products(vec![product("Red Dress", "dresses", 49.99)])
        .await;

    let client = Client::new();
    let response = client
        .get(format!("{}/api/products/price?min=50&max=100", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["message"],
        "No products found within the specified price range"
    );

    app.cleanup().await;
}

#[tokio::test]
async fn bounds_are_inclusive() {
    let app = TestApp::spawn().await;
    app.seed_products(vec![product("Red Dress", "dresses", 49.99)])
        .await;

    let client = Client::new();
    let response = client
        .get(format!(
            "{}/api/products/price?min=49.99&max=49.99",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    app.cleanup().await;
}

#[tokio::test]
async fn unbounded_range_matches_the_full_listing() {
    let app = TestApp::spawn().await;
    app.seed_products(vec![
        product("Red Dress", "dresses", 49.99),
        product("Silk Scarf", "accessories", 19.99),
        product("Denim Jacket", "jackets", 89.99),
    ])
    .await;

    let client = Client::new();

    let all: serde_json::Value = client
        .get(format!("{}/api/products", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    let ranged: serde_json::Value = client
        .get(format!(
            "{}/api/products/price?min=0&max={}",
            app.address,
            f64::MAX
        ))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(all, ranged);

    app.cleanup().await;
}

#[tokio::test]
async fn non_numeric_min_behaves_like_an_absent_one() {
    let app = TestApp::spawn().await;
    app.seed_products(vec![product("Silk Scarf", "accessories", 19.99)])
        .await;

    let client = Client::new();
    let response = client
        .get(format!("{}/api/products/price?min=abc", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body.as_array().expect("Expected array").len(), 1);

    app.cleanup().await;
}
