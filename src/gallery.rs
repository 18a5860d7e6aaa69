use crate::models::artwork::Artwork;
use crate::render::html_escape;

const GALLERY_PATH: &str = "/masterpiece";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl LightboxKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => LightboxKey::Escape,
            "ArrowLeft" => LightboxKey::ArrowLeft,
            "ArrowRight" => LightboxKey::ArrowRight,
            _ => LightboxKey::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxAction {
    Close,
    Show(usize),
    Ignore,
}

/// The open image modal. `index` never leaves `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    index: usize,
    len: usize,
}

impl Lightbox {
    /// Open on `index` (clamped). An empty gallery has nothing to open.
    pub fn open(artworks: &[Artwork], index: usize) -> Option<Self> {
        if artworks.is_empty() {
            return None;
        }
        Some(Lightbox {
            index: index.min(artworks.len() - 1),
            len: artworks.len(),
        })
    }

    pub fn open_by_src(artworks: &[Artwork], image_src: &str) -> Option<Self> {
        let index = artworks.iter().position(|a| a.image_src == image_src)?;
        Self::open(artworks, index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Step by `direction` images, stopping at either end.
    pub fn change(self, direction: isize) -> Self {
        let last = (self.len - 1) as isize;
        let index = (self.index as isize).saturating_add(direction).clamp(0, last);
        Lightbox {
            index: index as usize,
            ..self
        }
    }

    pub fn previous(&self) -> Option<usize> {
        (self.index > 0).then(|| self.index - 1)
    }

    pub fn next(&self) -> Option<usize> {
        (self.index + 1 < self.len).then(|| self.index + 1)
    }

    pub fn handle_key(self, key: LightboxKey) -> LightboxAction {
        match key {
            LightboxKey::Escape => LightboxAction::Close,
            LightboxKey::ArrowLeft => LightboxAction::Show(self.change(-1).index),
            LightboxKey::ArrowRight => LightboxAction::Show(self.change(1).index),
            LightboxKey::Other => LightboxAction::Ignore,
        }
    }
}

/// Gallery list plus, when `lightbox` is set, the open modal.
pub fn render_gallery(artworks: &[Artwork], lightbox: Option<Lightbox>) -> String {
    let items: String = artworks
        .iter()
        .enumerate()
        .map(|(i, a)| render_artwork(a, i))
        .collect();

    format!(
        r#"<ul class="masterpiece-container">{items}</ul>
{modal}
<script>{js}</script>"#,
        items = items,
        modal = render_modal(artworks, lightbox),
        js = GALLERY_JS,
    )
}

fn render_artwork(artwork: &Artwork, index: usize) -> String {
    let name = html_escape(&artwork.name);
    format!(
        r#"<li class="masterpiece-detail"><a id="openModal-{index}" class="img-wrap" href="{path}?view={index}" aria-label="{name}を拡大表示"><img src="{src}" alt="{name}" class="c-img"></a><dl class="c-description-list"><dt class="c-text--bold">作品名</dt><dd class="c-text">{name}</dd><dt class="c-text--bold">絵画技法</dt><dd class="c-text">{technique}</dd><dt class="c-text--bold">制作年</dt><dd class="c-text">{year}</dd></dl></li>"#,
        index = index,
        path = GALLERY_PATH,
        name = name,
        src = html_escape(&artwork.image_src),
        technique = html_escape(&artwork.technique),
        year = html_escape(&artwork.year),
    )
}

fn render_modal(artworks: &[Artwork], lightbox: Option<Lightbox>) -> String {
    let Some(lb) = lightbox else {
        return r#"<div id="modalOverlay" class="outside-modal" role="dialog" aria-modal="true" aria-hidden="true" style="display: none;"></div>"#.to_string();
    };
    let artwork = &artworks[lb.index()];

    let key_target = |key: LightboxKey| -> String {
        match lb.handle_key(key) {
            LightboxAction::Close => GALLERY_PATH.to_string(),
            LightboxAction::Show(i) if i != lb.index() => format!("{}?view={}", GALLERY_PATH, i),
            _ => String::new(),
        }
    };

    format!(
        r#"<div id="modalOverlay" class="outside-modal" role="dialog" aria-modal="true" aria-hidden="false" aria-label="{name}" data-key-escape="{on_escape}" data-key-left="{on_left}" data-key-right="{on_right}" style="display: flex;">
<div class="inside-modal">
<a id="closeModal" class="modal-close" href="{path}" aria-label="閉じる">&times;</a>
{prev}
<img id="modalImage" src="{src}" alt="{name}">
{next}
</div>
</div>"#,
        name = html_escape(&artwork.name),
        on_escape = key_target(LightboxKey::Escape),
        on_left = key_target(LightboxKey::ArrowLeft),
        on_right = key_target(LightboxKey::ArrowRight),
        path = GALLERY_PATH,
        prev = step_link("prevButton", "前の作品", "&lsaquo;", lb.previous()),
        src = html_escape(&artwork.image_src),
        next = step_link("nextButton", "次の作品", "&rsaquo;", lb.next()),
    )
}

fn step_link(id: &str, label: &str, glyph: &str, target: Option<usize>) -> String {
    match target {
        Some(i) => format!(
            r#"<a id="{id}" class="modal-step" href="{path}?view={i}" aria-label="{label}">{glyph}</a>"#,
            id = id,
            path = GALLERY_PATH,
            i = i,
            label = label,
            glyph = glyph,
        ),
        None => format!(
            r#"<a id="{id}" class="modal-step" aria-label="{label}" aria-disabled="true" style="visibility: hidden;">{glyph}</a>"#,
            id = id,
            label = label,
            glyph = glyph,
        ),
    }
}

/// Keyboard shortcuts for the open modal. Targets come from the
/// `data-key-*` attributes that `Lightbox::handle_key` filled in; an empty
/// target means the key does nothing here.
const GALLERY_JS: &str = r#"
(function() {
    const overlay = document.getElementById('modalOverlay');
    if (!overlay || overlay.getAttribute('aria-hidden') !== 'false') return;

    const close = document.getElementById('closeModal');
    if (close) close.focus();

    const d = overlay.dataset;
    function go(href) {
        if (href) window.location.href = href;
    }

    document.addEventListener('keydown', function(e) {
        if (e.key === 'Escape' || e.key === 'Esc') go(d.keyEscape);
        else if (e.key === 'ArrowLeft') go(d.keyLeft);
        else if (e.key === 'ArrowRight') go(d.keyRight);
    });
    overlay.addEventListener('click', function(e) {
        if (e.target === overlay) go(d.keyEscape);
    });
})();
"#;
