//! Page chrome around the game banner: theme toggle, blog cards and smooth
//! in-page scrolling.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Storage,
    window,
};

// --- Theme -------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub const STORAGE_KEY: &'static str = "theme";

    /// Anything but an explicit `"light"` loads as dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "☀️ Light",
            Theme::Dark => "🌙 Dark",
        }
    }
}

fn document() -> Result<Document, JsValue> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

fn root(doc: &Document) -> Result<Element, JsValue> {
    doc.document_element()
        .ok_or_else(|| JsValue::from_str("no document element"))
}

fn apply_theme(doc: &Document, theme: Theme) -> Result<(), JsValue> {
    root(doc)?
        .class_list()
        .toggle_with_force("dark", theme == Theme::Dark)?;
    if let Some(icon) = doc.get_element_by_id("theme-icon") {
        icon.set_text_content(Some(theme.label()));
    }
    Ok(())
}

/// Apply the saved preference; dark when nothing is saved.
pub fn load_theme(doc: &Document) -> Result<Theme, JsValue> {
    let saved = storage().and_then(|s| s.get_item(Theme::STORAGE_KEY).ok().flatten());
    let theme = Theme::from_stored(saved.as_deref());
    apply_theme(doc, theme)?;
    Ok(theme)
}

#[wasm_bindgen]
pub fn toggle_theme() -> Result<(), JsValue> {
    let doc = document()?;
    let current = if root(&doc)?.class_list().contains("dark") {
        Theme::Dark
    } else {
        Theme::Light
    };
    let next = current.toggled();
    apply_theme(&doc, next)?;
    match storage() {
        Some(s) => s.set_item(Theme::STORAGE_KEY, next.as_str())?,
        None => log::warn!("localStorage unavailable; theme not persisted"),
    }
    Ok(())
}

// --- Blog cards --------------------------------------------------------------

#[cfg(feature = "serde_json")]
pub use blog::{BlogPost, POSTS_URL, load_blog_posts, parse_posts, render_cards};

#[cfg(feature = "serde_json")]
mod blog {
    use serde::{Deserialize, Serialize};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Response, window};

    pub const POSTS_URL: &str = "blog/posts.json";
    const CONTAINER_ID: &str = "blog-posts";

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct BlogPost {
        pub url: String,
        pub title: String,
        pub description: String,
        pub date: String,
        #[serde(default)]
        pub thumbnail: Option<String>,
    }

    pub fn parse_posts(json: &str) -> serde_json::Result<Vec<BlogPost>> {
        serde_json::from_str(json)
    }

    fn escape_html(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(c),
            }
        }
        out
    }

    fn render_card(post: &BlogPost) -> String {
        let title = escape_html(&post.title);
        let thumbnail = match &post.thumbnail {
            Some(src) => format!(r#"<img src="{}" alt="{}">"#, escape_html(src), title),
            None => "Image".to_string(),
        };
        format!(
            r#"<a href="{url}" class="blog-card">
    <div class="blog-thumbnail">{thumbnail}</div>
    <div class="blog-content">
        <h3 class="blog-title">{title}</h3>
        <p class="blog-description">{description}</p>
        <div class="blog-date">{date}</div>
    </div>
</a>"#,
            url = escape_html(&post.url),
            description = escape_html(&post.description),
            date = escape_html(&post.date),
        )
    }

    pub fn render_cards(posts: &[BlogPost]) -> String {
        posts.iter().map(render_card).collect::<Vec<_>>().join("\n")
    }

    async fn fetch_posts() -> Result<Vec<BlogPost>, JsValue> {
        let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
        let resp: Response = JsFuture::from(win.fetch_with_str(POSTS_URL))
            .await?
            .dyn_into()?;
        if !resp.ok() {
            return Err(JsValue::from_str(&format!("{} returned HTTP {}", POSTS_URL, resp.status())));
        }
        let text = JsFuture::from(resp.text()?)
            .await?
            .as_string()
            .ok_or_else(|| JsValue::from_str("response body is not text"))?;
        parse_posts(&text).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Fill `#blog-posts` with cards. Failures are logged, never raised.
    pub async fn load_blog_posts() {
        let posts = match fetch_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                log::error!("Error loading blog posts: {:?}", e);
                return;
            }
        };
        let Some(container) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONTAINER_ID))
        else {
            return;
        };
        container.set_inner_html(&render_cards(&posts));
        log::info!("rendered {} blog posts", posts.len());
    }

}

// --- Smooth scroll -----------------------------------------------------------

fn scroll_to(selector: &str) {
    let Ok(doc) = document() else { return };
    // A bare "#" is not a valid selector; treat it like a missing target.
    if let Ok(Some(target)) = doc.query_selector(selector) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

fn wire_smooth_scroll(doc: &Document) -> Result<(), JsValue> {
    let anchors = doc.query_selector_all("a[href^=\"#\"]")?;
    for i in 0..anchors.length() {
        let Some(node) = anchors.item(i) else { continue };
        let anchor: Element = node.dyn_into()?;
        let target_of = anchor.clone();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
            evt.prevent_default();
            if let Some(href) = target_of.get_attribute("href") {
                scroll_to(&href);
            }
        }) as Box<dyn FnMut(_)>);
        anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Page bootstrap: theme, blog cards and anchor scrolling. Call once the
/// DOM is ready.
#[wasm_bindgen]
pub fn init_site() -> Result<(), JsValue> {
    let doc = document()?;
    let theme = load_theme(&doc)?;
    log::debug!("theme {}", theme.as_str());
    #[cfg(feature = "serde_json")]
    wasm_bindgen_futures::spawn_local(load_blog_posts());
    wire_smooth_scroll(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_or_missing_preference_is_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    }

    #[test]
    fn toggle_round_trips_through_storage_value() {
        let t = Theme::Dark.toggled();
        assert_eq!(t, Theme::Light);
        assert_eq!(Theme::from_stored(Some(t.as_str())), Theme::Light);
        assert_eq!(t.label(), "☀️ Light");
    }
}
