use itertools::Itertools;

use crate::config::MEDIA;
use crate::engine::Action;
use crate::media::loader::{MediaFile, MediaKind};
use crate::ui::bindings::{BindingTable, ElementId, Scope, Trigger};
use crate::ui::ui_text::UI_TEXT;
use crate::utils::{attr_escape, html_escape};

pub struct RenderedMedia {
    pub html: String,
    pub bindings: BindingTable,
}

fn media_item_id(index: usize) -> ElementId {
    ElementId::new(format!("vp-media-{index}"))
}

/// Header plus one tile per media file. Replaces the container's content.
pub fn render_media_gallery(files: &[MediaFile]) -> RenderedMedia {
    let mut bindings = BindingTable::new();
    let items = files
        .iter()
        .enumerate()
        .map(|(index, media)| media_item(media, &media_item_id(index), &mut bindings))
        .join("\n");

    let html = format!(
        r#"<div class="media-gallery-header">
    <h3>{title}</h3>
    <p>{blurb}</p>
</div>
<div class="media-gallery-grid">
{items}
</div>"#,
        title = html_escape(MEDIA.header_title),
        blurb = html_escape(MEDIA.header_blurb),
    );
    RenderedMedia { html, bindings }
}

fn media_item(media: &MediaFile, item: &ElementId, bindings: &mut BindingTable) -> String {
    let media_el = item.child("media");
    let overlay = item.child("overlay");
    let icon = item.child("icon");
    let title = html_escape(&media.title());
    let path = attr_escape(&media.path);

    bindings.set_parent(&media_el, item);
    bindings.set_parent(&overlay, item);
    bindings.set_parent(&icon, &overlay);
    bindings.bind(
        &media_el,
        Trigger::Click,
        Action::OpenLightbox {
            path: media.path.clone(),
            kind: media.kind,
        },
        Scope::Absorbing,
    );

    match media.kind {
        MediaKind::Video => {
            bindings.bind(
                item,
                Trigger::PointerEnter,
                Action::StartPreview {
                    video: media_el.clone(),
                    icon: Some(icon.clone()),
                },
                Scope::Bubbling,
            );
            bindings.bind(
                item,
                Trigger::PointerLeave,
                Action::StopPreview {
                    video: media_el.clone(),
                    icon: Some(icon.clone()),
                },
                Scope::Bubbling,
            );
            format!(
                r#"<div class="media-item video-item" id="{item}" data-media-path="{path}">
    <video class="media-video" id="{media_el}" muted loop playsinline preload="metadata">
        <source src="{path}" type="video/mp4">
        {unsupported}
    </video>
    <div class="media-overlay" id="{overlay}">
        <div class="play-icon" id="{icon}">{play}</div>
        <div class="media-title">{title}</div>
    </div>
</div>"#,
                unsupported = html_escape(UI_TEXT.video_unsupported),
                play = UI_TEXT.play_icon,
            )
        }
        MediaKind::Image => format!(
            r#"<div class="media-item image-item" id="{item}" data-media-path="{path}">
    <img src="{path}" alt="{alt}" class="media-image" id="{media_el}" loading="lazy">
    <div class="media-overlay" id="{overlay}">
        <div class="expand-icon" id="{icon}">{expand}</div>
        <div class="media-title">{title}</div>
    </div>
</div>"#,
            alt = attr_escape(&media.title()),
            expand = UI_TEXT.expand_icon,
        ),
    }
}

/// Full-screen viewer for one media file. Closes from its button or a click on
/// the backdrop itself (not on the media).
pub fn lightbox(lightbox_id: &ElementId, path: &str, kind: MediaKind) -> (String, BindingTable) {
    let content = lightbox_id.child("content");
    let close = lightbox_id.child("close");
    let src = attr_escape(path);

    let media = match kind {
        MediaKind::Video => {
            format!(r#"<video controls autoplay muted><source src="{src}" type="video/mp4"></video>"#)
        }
        MediaKind::Image => format!(r#"<img src="{src}" alt="{}">"#, UI_TEXT.lightbox_alt),
    };
    let html = format!(
        r#"<div class="media-lightbox active" id="{lightbox_id}">
    <div class="lightbox-content" id="{content}">
        <button class="lightbox-close" id="{close}">{close_text}</button>
        {media}
    </div>
</div>"#,
        close_text = UI_TEXT.close,
    );

    let mut bindings = BindingTable::new();
    bindings.set_parent(&content, lightbox_id);
    bindings.set_parent(&close, &content);
    bindings.bind(
        &close,
        Trigger::Click,
        Action::CloseOverlay(lightbox_id.clone()),
        Scope::Absorbing,
    );
    bindings.bind(
        lightbox_id,
        Trigger::Click,
        Action::CloseOverlay(lightbox_id.clone()),
        Scope::SelfOnly,
    );
    (html, bindings)
}
