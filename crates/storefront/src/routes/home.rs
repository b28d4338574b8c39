//! Storefront page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use sabrosa_core::cart::ADD_ON_FEE;
use sabrosa_core::catalog::Product;

use crate::content::SiteInfo;
use crate::error::Result;
use crate::filters;
use crate::models::session as shopper;
use crate::state::AppState;

/// Hero banner content (static, like the rest of the page furniture).
#[derive(Clone)]
pub struct Hero {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            eyebrow: "המומלץ שלנו".to_string(),
            title: "מחמצת כוסמין".to_string(),
            subtitle: "התפחה איטית של 24 שעות לקבלת מרקם מושלם וטעם עמוק.".to_string(),
            image: "https://lh3.googleusercontent.com/aida-public/AB6AXuCGozF64yDtA_fja7KBZ1-FLEehg6jIRZj3F7_IDma9Mfr9OV9Rn2nUGtJ_y3UVBOejoIlPX74JCqluyIE-8KFLiawCHwNalhwtWnUV2OtRCEqDy_LqR4DduwHAbpVLXxgDz-Exnlq24YSlXVje7ymPX-5ahrVlF0pynY1kZiYLU6q8nYViMNBLbVbVApwPjO0h2Gn4lpKpvFR3tTPUpNnVq8VYufjH_QyjhNlg8RqvIoAI4zGn7Kpz0eRpzPYQs8dpkWYYpez1dMHq".to_string(),
        }
    }
}

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image: String,
    pub note: Option<String>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            image: product.image.clone(),
            note: product.note.clone(),
        }
    }
}

/// Storefront page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Hero banner.
    pub hero: Hero,
    /// Fixed site information (story, contact, hours).
    pub site: SiteInfo,
    /// The menu, in catalog order.
    pub products: Vec<ProductView>,
    /// Display form of the flat add-on fee.
    pub add_on_fee: String,
    /// Item count for the initial cart badge render.
    pub cart_count: u32,
}

/// Display the storefront page.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> Result<HomeTemplate> {
    let cart = shopper::cart(&session).await?;

    Ok(HomeTemplate {
        hero: Hero::default(),
        site: state.site().clone(),
        products: state.catalog().products().iter().map(ProductView::from).collect(),
        add_on_fee: ADD_ON_FEE.to_string(),
        cart_count: cart.item_count(),
    })
}
