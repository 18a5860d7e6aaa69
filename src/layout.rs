use crate::config::{NavLink, SiteConfig};
use crate::render::html_escape;

/// Hamburger breakpoint: at this width and above the menu is always closed.
pub const DESKTOP_MIN_WIDTH: u32 = 768;

pub fn is_top_page(path: &str) -> bool {
    path == "/" || path == "/index.html"
}

/// Whether a nav link points at the page being rendered.
/// `index.html` and `/` stand for the top page.
pub fn is_active(href: &str, path: &str) -> bool {
    if href == "index.html" || href == "/" {
        return is_top_page(path);
    }
    href == path
}

/// Open/closed state of the mobile menu, mirrored by `NAV_JS` in the browser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(self) -> Self {
        NavMenu { open: !self.open }
    }

    pub fn close(self) -> Self {
        NavMenu { open: false }
    }

    pub fn resized(self, width: u32) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            self.close()
        } else {
            self
        }
    }

    pub fn guide_text(&self) -> &'static str {
        if self.open {
            "BACK"
        } else {
            "MENU"
        }
    }
}

/// Per-page header and footer styling.
#[derive(Debug, Clone, PartialEq)]
pub struct Chrome {
    pub header_style: String,
    pub footer_style: String,
    pub show_sns: bool,
}

impl Chrome {
    pub fn for_path(path: &str, hero_image: &str) -> Self {
        if is_top_page(path) {
            Chrome {
                header_style: format!(
                    "background-image: url({}); background-size: cover; background-position: center; background-attachment: fixed;",
                    html_escape(hero_image)
                ),
                footer_style: "background-color: transparent;".to_string(),
                show_sns: true,
            }
        } else {
            Chrome {
                header_style: "background-color: #000000;".to_string(),
                footer_style: "background-color: #000000;".to_string(),
                show_sns: false,
            }
        }
    }
}

/// Wrap a page body in the shared document, header and footer.
pub fn render_page(config: &SiteConfig, path: &str, title: &str, body: &str) -> String {
    let chrome = Chrome::for_path(path, &config.hero_image);
    let site_name = html_escape(&config.site_name);
    let page_title = if title.is_empty() {
        site_name.clone()
    } else {
        format!("{} | {}", html_escape(title), site_name)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{page_title}</title>
<link rel="stylesheet" href="/assets/css/style.css">
</head>
<body>
{header}
<main id="main-content" tabindex="-1">
{body}
</main>
{footer}
<script>{nav_js}</script>
</body>
</html>"#,
        page_title = page_title,
        header = build_header(config, path, &chrome),
        body = body,
        footer = build_footer(config, path, &chrome),
        nav_js = NAV_JS,
    )
}

fn build_header(config: &SiteConfig, path: &str, chrome: &Chrome) -> String {
    let menu = NavMenu::default();
    format!(
        r#"<header class="header" style="{style}">
<div class="header-inner">
<a class="header-logo" href="/">{site_name}</a>
<button type="button" class="hamburger-menu-btn" aria-controls="header-menu" aria-expanded="false" data-guide-closed="{guide}" data-guide-open="{guide_open}" data-desktop-width="{desktop}"><span class="hamburger-menu-line"></span><span class="hamburger-menu-guide-text">{guide}</span></button>
<nav id="header-menu" class="header-menu" aria-label="メインメニュー"><ul class="header-menu-list">{links}</ul></nav>
</div>
<div class="nav-overlay"></div>
</header>"#,
        style = chrome.header_style,
        site_name = html_escape(&config.site_name),
        guide = menu.guide_text(),
        guide_open = menu.toggle().guide_text(),
        desktop = DESKTOP_MIN_WIDTH,
        links = build_nav_links(&config.nav, path, "header-menu-list"),
    )
}

fn build_footer(config: &SiteConfig, path: &str, chrome: &Chrome) -> String {
    let sns_display = if chrome.show_sns { "block" } else { "none" };
    let sns_links: String = config
        .sns
        .iter()
        .map(|s| {
            format!(
                r#"<li class="sns-item"><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></li>"#,
                html_escape(&s.url),
                html_escape(&s.label)
            )
        })
        .collect();

    format!(
        r#"<footer class="footer" style="{style}">
<div class="sns" style="display: {sns_display};"><ul class="sns-list">{sns_links}</ul></div>
<nav class="footer-menu" aria-label="フッターメニュー"><ul class="footer-menu-list">{links}</ul></nav>
<p class="copyright"><small>&copy; {year} {site_name}</small></p>
</footer>"#,
        style = chrome.footer_style,
        sns_display = sns_display,
        sns_links = sns_links,
        links = build_nav_links(&config.nav, path, "footer-menu-list"),
        year = chrono::Local::now().format("%Y"),
        site_name = html_escape(&config.site_name),
    )
}

fn build_nav_links(links: &[NavLink], path: &str, class_prefix: &str) -> String {
    links
        .iter()
        .map(|link| {
            let href = if link.href == "index.html" { "/" } else { link.href.as_str() };
            let active = if is_active(&link.href, path) {
                r#" style="color: red;" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<li class="{p}-item"><a class="{p}-link" href="{href}"{active}>{label}</a></li>"#,
                p = class_prefix,
                href = html_escape(href),
                active = active,
                label = html_escape(&link.label),
            )
        })
        .collect()
}

/// Hamburger toggle. Same transitions as `NavMenu`; guide texts and the
/// desktop breakpoint come from the button's data attributes.
const NAV_JS: &str = r#"
(function() {
    const body = document.body;
    const btn = document.querySelector('.hamburger-menu-btn');
    const guide = document.querySelector('.hamburger-menu-guide-text');
    const overlay = document.querySelector('.nav-overlay');
    if (!btn || !guide) return;
    const d = btn.dataset;

    function sync() {
        const open = body.classList.contains('nav-open');
        guide.innerText = open ? d.guideOpen : d.guideClosed;
        btn.setAttribute('aria-expanded', open ? 'true' : 'false');
    }
    function close() {
        body.classList.remove('nav-open');
        sync();
    }

    btn.addEventListener('click', function() {
        body.classList.toggle('nav-open');
        sync();
    });
    if (overlay) overlay.addEventListener('click', close);
    window.addEventListener('resize', function() {
        if (window.innerWidth >= Number(d.desktopWidth)) close();
    });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_page_paths() {
        assert!(is_top_page("/"));
        assert!(is_top_page("/index.html"));
        assert!(!is_top_page("/news"));
    }

    #[test]
    fn active_link_matching() {
        assert!(is_active("index.html", "/"));
        assert!(is_active("index.html", "/index.html"));
        assert!(!is_active("index.html", "/news"));
        assert!(is_active("/news", "/news"));
        assert!(!is_active("/news", "/news/3"));
        assert!(!is_active("/contact", "/news"));
    }

    #[test]
    fn menu_transitions() {
        let menu = NavMenu::default();
        assert_eq!(menu.guide_text(), "MENU");

        let open = menu.toggle();
        assert!(open.is_open());
        assert_eq!(open.guide_text(), "BACK");

        assert!(open.resized(500).is_open());
        assert!(!open.resized(768).is_open());
        assert!(!open.close().is_open());
        assert!(!open.toggle().is_open());
    }

    #[test]
    fn chrome_depends_on_page() {
        let top = Chrome::for_path("/", "/hero.jpg");
        assert!(top.header_style.contains("url(/hero.jpg)"));
        assert!(top.footer_style.contains("transparent"));
        assert!(top.show_sns);

        let inner = Chrome::for_path("/contact", "/hero.jpg");
        assert_eq!(inner.header_style, "background-color: #000000;");
        assert_eq!(inner.footer_style, "background-color: #000000;");
        assert!(!inner.show_sns);
    }

    #[test]
    fn page_marks_current_link() {
        let config = SiteConfig::default();
        let html = render_page(&config, "/news", "News", "<p>body</p>");
        assert!(html.contains(r#"<a class="header-menu-list-link" href="/news" style="color: red;" aria-current="page">NEWS</a>"#));
        assert!(html.contains(r#"<a class="footer-menu-list-link" href="/news" style="color: red;" aria-current="page">NEWS</a>"#));
        assert!(html.contains(r#"<a class="header-menu-list-link" href="/">TOP</a>"#));
        assert!(html.contains(r#"<div class="sns" style="display: none;">"#));
        assert!(html.contains("<title>News | Portfolio</title>"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn top_page_highlights_index_link() {
        let config = SiteConfig::default();
        let html = render_page(&config, "/index.html", "", "");
        assert!(html.contains(r#"href="/" style="color: red;""#));
        assert!(html.contains(r#"<div class="sns" style="display: block;">"#));
        assert!(html.contains("<title>Portfolio</title>"));
    }

    #[test]
    fn hamburger_carries_menu_states() {
        let html = render_page(&SiteConfig::default(), "/", "", "");
        assert!(html.contains(r#"data-guide-closed="MENU" data-guide-open="BACK" data-desktop-width="768""#));
    }
}
