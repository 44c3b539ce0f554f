use log::{info, warn};
use web_sys::Document;
use yew::prelude::*;

/// One `<link rel="icon">`-style declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLink {
    pub rel: &'static str,
    pub href: &'static str,
    pub media: Option<&'static str>,
    pub mime: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub lang: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub generator: &'static str,
    pub icons: &'static [IconLink],
}

pub const PAGE_META: PageMeta = PageMeta {
    lang: "ko",
    title: "AI 미니 애니메이션 요약 서비스 - 30분 영상, 30초 툰으로",
    description: "긴 유튜브 영상을 30초 밈 스타일 애니메이션으로 압축! AI가 핵심만 뽑아 재미있는 숏폼으로 만들어드립니다.",
    generator: "yew",
    icons: &[IconLink {
        rel: "icon",
        href: "/icon.svg",
        media: None,
        mime: Some("image/svg+xml"),
    }],
};

const ANALYTICS_SCRIPT_ID: &str = "page-analytics";
const ANALYTICS_SRC: &str = "/_vercel/insights/script.js";

/// A tag to place in `<head>`, as element name plus attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    pub element: &'static str,
    pub attrs: Vec<(&'static str, &'static str)>,
}

pub fn head_tags(meta: &PageMeta) -> Vec<HeadTag> {
    let mut tags = vec![
        HeadTag {
            element: "meta",
            attrs: vec![("name", "description"), ("content", meta.description)],
        },
        HeadTag {
            element: "meta",
            attrs: vec![("name", "generator"), ("content", meta.generator)],
        },
    ];
    for icon in meta.icons {
        let mut attrs = vec![("rel", icon.rel), ("href", icon.href)];
        if let Some(media) = icon.media {
            attrs.push(("media", media));
        }
        if let Some(mime) = icon.mime {
            attrs.push(("type", mime));
        }
        tags.push(HeadTag { element: "link", attrs });
    }
    tags
}

fn selector_for(tag: &HeadTag) -> String {
    let key = tag
        .attrs
        .iter()
        .find(|(name, _)| *name == "name" || *name == "href");
    match key {
        Some((name, value)) => format!("{}[{}=\"{}\"]", tag.element, name, value),
        None => tag.element.to_string(),
    }
}

fn upsert_head_tag(document: &Document, tag: &HeadTag) {
    let Some(head) = document.head() else {
        return;
    };
    let existing = document.query_selector(&selector_for(tag)).ok().flatten();
    let element = match existing {
        Some(element) => element,
        None => match document.create_element(tag.element) {
            Ok(element) => {
                let _ = head.append_child(&element);
                element
            }
            Err(_) => return,
        },
    };
    for (name, value) in &tag.attrs {
        let _ = element.set_attribute(name, value);
    }
}

/// Writes title, language, description and icon links into the live document.
pub fn apply_metadata(meta: &PageMeta) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("No document available, skipping page metadata");
        return;
    };
    document.set_title(meta.title);
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", meta.lang);
    }
    for tag in head_tags(meta) {
        upsert_head_tag(&document, &tag);
    }
}

/// Loads the hosted analytics script once. Nothing here is configurable.
#[function_component(Analytics)]
pub fn analytics() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if document.get_element_by_id(ANALYTICS_SCRIPT_ID).is_none() {
                    if let (Ok(script), Some(body)) = (document.create_element("script"), document.body()) {
                        let _ = script.set_attribute("id", ANALYTICS_SCRIPT_ID);
                        let _ = script.set_attribute("src", ANALYTICS_SRC);
                        let _ = script.set_attribute("defer", "");
                        let _ = body.append_child(&script);
                        info!("Analytics script attached");
                    }
                }
            }
            || ()
        },
        (),
    );

    html! {}
}

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    pub children: Children,
}

#[function_component(PageShell)]
pub fn page_shell(props: &PageShellProps) -> Html {
    use_effect_with_deps(
        move |_| {
            apply_metadata(&PAGE_META);
            || ()
        },
        (),
    );

    html! {
        <div class="page-shell">
            { for props.children.iter() }
            <Analytics />
        </div>
    }
}
