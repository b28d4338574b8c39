//! End-to-end order flow over the storefront router.
//!
//! Each test builds a fresh in-process storefront (its own in-memory session
//! store) and walks it the way a browser driven by HTMX would: form posts
//! for cart mutations, fragment GETs for the badge and items, and a final
//! redirect for the WhatsApp handoff.

use axum::http::StatusCode;
use sabrosa_integration_tests::{TestApp, body_text, first_line_id};

#[tokio::test]
async fn health_endpoint_responds() {
    let mut app = TestApp::new();
    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn storefront_page_renders_the_menu() {
    let mut app = TestApp::new();
    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("מחמצת כוסמין קלאסית"));
    assert!(html.contains("מחמצת מתערובת קמחים ללא גלוטן"));
    assert!(html.contains("₪38"));
    assert!(html.contains("הסיפור שלנו"));
    assert!(html.contains("שעות פעילות"));
}

#[tokio::test]
async fn adding_twice_merges_and_counts_two() {
    let mut app = TestApp::new();

    let first = app.post_form("/cart/add", "product_id=1").await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_text(first).await.trim(), "1");

    let second = app.post_form("/cart/add", "product_id=1").await;
    assert_eq!(body_text(second).await.trim(), "2");

    // One merged line at quantity 2, not two lines.
    let cart = body_text(app.get("/cart").await).await;
    assert_eq!(cart.matches("data-line-id").count(), 1);
    assert!(cart.contains("₪60"));
}

#[tokio::test]
async fn adding_an_unknown_product_is_a_404() {
    let mut app = TestApp::new();
    let response = app.post_form("/cart/add", "product_id=99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn notice_is_visible_right_after_an_add() {
    let mut app = TestApp::new();

    // Before any add, the notice fragment renders empty.
    let empty = body_text(app.get("/cart/notice").await).await;
    assert!(!empty.contains("notice"));

    app.post_form("/cart/add", "product_id=2").await;
    let shown = body_text(app.get("/cart/notice").await).await;
    assert!(shown.contains("התווסף לסל בהצלחה!"));
}

#[tokio::test]
async fn quantity_buttons_never_drop_below_one() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", "product_id=1").await;

    let items = body_text(app.get("/cart/items").await).await;
    let line_id = first_line_id(&items).expect("cart has a line");

    let response = app
        .post_form("/cart/update", &format!("line_id={line_id}&delta=-3"))
        .await;
    let html = body_text(response).await;
    assert!(html.contains("₪30"));
    assert!(html.contains(r#"<span class="quantity-value">1</span>"#));
}

#[tokio::test]
async fn removing_a_line_empties_the_cart() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", "product_id=1").await;

    let items = body_text(app.get("/cart/items").await).await;
    let line_id = first_line_id(&items).expect("cart has a line");

    let response = app
        .post_form("/cart/remove", &format!("line_id={line_id}"))
        .await;
    let html = body_text(response).await;
    assert!(html.contains("הסל שלך ריק"));
    assert_eq!(body_text(app.get("/cart/count").await).await.trim(), "0");
}

#[tokio::test]
async fn customization_dialog_prices_the_flat_fee() {
    let mut app = TestApp::new();

    let dialog = body_text(app.get("/customize/3").await).await;
    assert!(dialog.contains("אגוזי מלך"));
    assert!(dialog.contains("₪38"));

    // One add-on: base 38 + flat fee 5.
    let toggled = body_text(app.post_form("/customize/toggle", "add_on_id=walnuts").await).await;
    assert!(toggled.contains("₪43"));

    // A second add-on splits the displayed share but not the price.
    let toggled = body_text(app.post_form("/customize/toggle", "add_on_id=olives").await).await;
    assert!(toggled.contains("₪43"));
    assert!(toggled.contains("₪2.5"));

    let confirm = app.post_form("/customize/confirm", "").await;
    assert_eq!(confirm.status(), StatusCode::OK);
    assert_eq!(body_text(app.get("/cart/count").await).await.trim(), "1");

    let cart = body_text(app.get("/cart").await).await;
    assert!(cart.contains("₪43"));
    assert!(cart.contains("אגוזי מלך"));
}

#[tokio::test]
async fn editing_a_line_preserves_its_quantity() {
    let mut app = TestApp::new();

    // Two plain spelt loaves.
    app.post_form("/cart/add", "product_id=1").await;
    app.post_form("/cart/add", "product_id=1").await;

    let items = body_text(app.get("/cart/items").await).await;
    let line_id = first_line_id(&items).expect("cart has a line");

    // Open the edit dialog and fold walnuts in.
    let dialog = body_text(app.get(&format!("/cart/{line_id}/edit")).await).await;
    assert!(dialog.contains("עדכן הזמנה"));
    app.post_form("/customize/toggle", "add_on_id=walnuts").await;
    app.post_form("/customize/confirm", "").await;

    // Quantity stays 2; total is 2 × (30 + 5).
    assert_eq!(body_text(app.get("/cart/count").await).await.trim(), "2");
    let cart = body_text(app.get("/cart/items").await).await;
    assert!(cart.contains("₪70"));
    assert!(cart.contains("אגוזי מלך"));
}

#[tokio::test]
async fn whatsapp_handoff_encodes_the_order_message() {
    let mut app = TestApp::new();

    // The worked example: two plain spelt loaves and one gluten-free loaf
    // with walnuts.
    app.post_form("/cart/add", "product_id=1").await;
    app.post_form("/cart/add", "product_id=1").await;
    app.get("/customize/3").await;
    app.post_form("/customize/toggle", "add_on_id=walnuts").await;
    app.post_form("/customize/confirm", "").await;

    let response = app.get("/order/whatsapp").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response
        .headers()
        .get("location")
        .expect("redirect has a location")
        .to_str()
        .expect("location is ascii")
        .to_owned();
    assert!(location.starts_with("https://wa.me/972555567714?text="));

    let encoded = location
        .split("text=")
        .nth(1)
        .expect("location carries the message");
    let message = urlencoding::decode(encoded).expect("message decodes");
    assert!(message.starts_with("היי, אשמח להזמין:"));
    assert!(message.contains("- מחמצת כוסמין קלאסית x2: ₪60"));
    assert!(message.contains("- מחמצת מתערובת קמחים ללא גלוטן (אגוזי מלך): ₪43"));
    assert!(message.contains("סה\"כ לתשלום: ₪103"));
    assert!(message.ends_with("תודה!"));
}

#[tokio::test]
async fn empty_cart_handoff_still_builds_the_skeleton() {
    let mut app = TestApp::new();
    let response = app.get("/order/whatsapp").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response
        .headers()
        .get("location")
        .expect("redirect has a location")
        .to_str()
        .expect("location is ascii")
        .to_owned();
    let encoded = location.split("text=").nth(1).expect("message present");
    let message = urlencoding::decode(encoded).expect("message decodes");
    assert!(message.contains("סה\"כ לתשלום: ₪0"));
}
