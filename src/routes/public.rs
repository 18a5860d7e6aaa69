use rocket::http::uri::Origin;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::State;

use crate::config::SiteConfig;
use crate::contact;
use crate::gallery::{self, Lightbox};
use crate::layout;
use crate::news::controller::DetailView;
use crate::news::{view, NewsController, NewsSource};
use crate::render::html_escape;

// ── Top ────────────────────────────────────────────────

fn top_page(config: &SiteConfig, path: &str) -> RawHtml<String> {
    let body = format!(
        r#"<section class="top-hero"><h1 class="top-title">{}</h1></section>"#,
        html_escape(&config.site_name)
    );
    RawHtml(layout::render_page(config, path, "", &body))
}

#[get("/")]
pub fn homepage(config: &State<SiteConfig>) -> RawHtml<String> {
    top_page(config, "/")
}

#[get("/index.html")]
pub fn homepage_html(config: &State<SiteConfig>) -> RawHtml<String> {
    top_page(config, "/index.html")
}

// ── News ───────────────────────────────────────────────

#[get("/news?<page>")]
pub async fn news_list(
    config: &State<SiteConfig>,
    source: &State<NewsSource>,
    page: Option<usize>,
) -> RawHtml<String> {
    let news = NewsController::mount(source).list(page).await;

    let body = format!(
        r#"<section class="news-section"><h1 class="news-heading">NEWS</h1>{}</section>"#,
        view::render_list_page(&news)
    );
    RawHtml(layout::render_page(config, "/news", "NEWS", &body))
}

#[get("/news/<_>")]
pub async fn news_detail(
    config: &State<SiteConfig>,
    source: &State<NewsSource>,
    uri: &Origin<'_>,
) -> (Status, RawHtml<String>) {
    let path = uri.path().as_str();
    let detail = NewsController::mount(source).detail(path).await;

    let (status, title) = match &detail {
        DetailView::Found(news) => (Status::Ok, news.summary.clone()),
        DetailView::NotFound => (Status::NotFound, "NEWS".to_string()),
        DetailView::Failed => (Status::Ok, "NEWS".to_string()),
    };

    let body = format!(
        r#"<section class="news-section">{}</section>"#,
        view::render_detail(&detail)
    );
    (status, RawHtml(layout::render_page(config, path, &title, &body)))
}

// ── Gallery ────────────────────────────────────────────

#[get("/masterpiece?<view>&<src>")]
pub fn masterpiece(
    config: &State<SiteConfig>,
    view: Option<usize>,
    src: Option<String>,
) -> RawHtml<String> {
    let artworks = &config.artworks;
    let lightbox = match (view, src) {
        (Some(index), _) => Lightbox::open(artworks, index),
        (None, Some(src)) => Lightbox::open_by_src(artworks, &src),
        (None, None) => None,
    };

    let body = format!(
        r#"<section class="masterpiece"><h1 class="masterpiece-heading">MASTERPIECE</h1>{}</section>"#,
        gallery::render_gallery(artworks, lightbox)
    );
    RawHtml(layout::render_page(config, "/masterpiece", "MASTERPIECE", &body))
}

// ── Confirmation ───────────────────────────────────────

fn sent_page(config: &SiteConfig, path: &str) -> RawHtml<String> {
    RawHtml(layout::render_page(config, path, "送信完了", &contact::render_sent()))
}

#[get("/send-completely")]
pub fn send_completely(config: &State<SiteConfig>) -> RawHtml<String> {
    sent_page(config, "/send-completely")
}

#[get("/send-completely.html")]
pub fn send_completely_html(config: &State<SiteConfig>) -> RawHtml<String> {
    sent_page(config, "/send-completely.html")
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        homepage,
        homepage_html,
        news_list,
        news_detail,
        masterpiece,
        send_completely,
        send_completely_html,
    ]
}
