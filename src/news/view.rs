use super::controller::{DetailView, NewsListState, NewsView};
use super::pagination::{PageItem, Pagination};
use crate::models::news::NewsRecord;
use crate::render::{format_dotted_date, format_long_date, html_escape};

const NEWS_LIST_PATH: &str = "/news";

/// The whole news list region: card container plus pagination control.
pub fn render_list_page(view: &NewsView) -> String {
    let (cards, pagination) = match view {
        NewsView::List(state) => (render_cards(state), render_pagination(state.pagination())),
        NewsView::Failed => (render_list_error(), String::new()),
    };

    format!(
        r#"<div id="newsContainer" class="news-container" aria-busy="false">{cards}</div>
<nav class="pagination-nav" aria-label="ニュース記事のページネーション"><ul id="pagination" class="pagination">{pagination}</ul></nav>"#,
        cards = cards,
        pagination = pagination,
    )
}

pub fn render_cards(state: &NewsListState) -> String {
    let records = state.current_records();
    if records.is_empty() {
        return render_no_news();
    }
    records.iter().map(render_card).collect()
}

pub fn render_card(news: &NewsRecord) -> String {
    let summary = html_escape(&news.summary);

    let mut attrs = String::new();
    if let Some(target) = news.target.as_deref().filter(|t| !t.is_empty()) {
        attrs.push_str(&format!(r#" target="{}""#, html_escape(target)));
        if news.opens_new_window() {
            attrs.push_str(&format!(
                r#" rel="noopener noreferrer" aria-label="{}（新しいウィンドウで開きます）""#,
                summary
            ));
        }
    }

    format!(
        r#"<article class="news"><a href="{href}" class="news-link"{attrs}><div class="news-header-row"><time class="news-date" datetime="{datetime}">{date}</time><h2 class="news-title">{summary}</h2></div><p class="news-summary">{detail}</p></a></article>"#,
        href = html_escape(news.href()),
        attrs = attrs,
        datetime = html_escape(&news.date),
        date = html_escape(&format_dotted_date(&news.date)),
        summary = summary,
        detail = html_escape(&news.detail),
    )
}

/// List items for the pagination control. Empty when everything fits on one page.
pub fn render_pagination(pagination: &Pagination) -> String {
    if pagination.total_pages() <= 1 {
        return String::new();
    }

    let current = pagination.current_page();
    let mut html = String::new();

    if let Some(prev) = pagination.previous() {
        html.push_str(&page_link("前へ", prev, false));
    }

    for item in pagination.window() {
        match item {
            PageItem::Ellipsis => {
                html.push_str(r#"<li class="ellipsis" aria-hidden="true">...</li>"#);
            }
            PageItem::Page(n) => html.push_str(&page_link(&n.to_string(), n, n == current)),
        }
    }

    if let Some(next) = pagination.next() {
        html.push_str(&page_link("次へ", next, false));
    }

    html
}

fn page_link(text: &str, page: usize, active: bool) -> String {
    let href = format!("{}?page={}#main-content", NEWS_LIST_PATH, page);
    if active {
        format!(
            r#"<li class="is-current"><a href="{href}" aria-current="page" aria-label="現在のページ、ページ{text}">{text}</a></li>"#,
            href = href,
            text = text,
        )
    } else {
        format!(
            r#"<li><a href="{href}" aria-label="ページ{text}へ移動">{text}</a></li>"#,
            href = href,
            text = text,
        )
    }
}

fn render_no_news() -> String {
    r#"<div class="news"><h5 class="news-title">ニュースはありません</h5><p class="news-summary">現在、お知らせする情報はありません。</p></div>"#
        .to_string()
}

fn render_list_error() -> String {
    r#"<div class="news"><h5 class="news-title">エラーが発生しました</h5><p class="news-summary">ニュースの読み込みに失敗しました。しばらくしてから再度お試しください。</p></div>"#
        .to_string()
}

// ── Detail ─────────────────────────────────────────────

pub fn render_detail(view: &DetailView) -> String {
    let inner = match view {
        DetailView::Found(news) => format!(
            r#"<div class="news-detail"><div class="news-header"><div class="news-header-row"><time class="news-date" datetime="{datetime}">{date}</time><h1 class="news-title">{summary}</h1></div></div><div class="news-content"><p>{detail}</p></div>{back}</div>"#,
            datetime = html_escape(&news.date),
            date = html_escape(&format_long_date(&news.date)),
            summary = html_escape(&news.summary),
            detail = html_escape(&news.detail),
            back = back_to_list(),
        ),
        DetailView::NotFound => format!(
            r#"<div class="news-detail"><h1 class="news-title">ページが見つかりません</h1><p>お探しのニュースは見つかりませんでした。</p>{}</div>"#,
            back_to_list()
        ),
        DetailView::Failed => format!(
            r#"<div class="news-detail"><h1 class="news-title">エラーが発生しました</h1><p>ニュースの読み込みに失敗しました。</p>{}</div>"#,
            back_to_list()
        ),
    };

    format!(r#"<div id="newsContainer" class="news-container">{}</div>"#, inner)
}

fn back_to_list() -> String {
    format!(
        r#"<div class="back-to-list"><a href="{}">ニュース一覧へ戻る</a></div>"#,
        NEWS_LIST_PATH
    )
}
