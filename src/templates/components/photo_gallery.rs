use crate::domain::Photo;
use maud::{html, Markup};

/// Scroll-snap carousel; no script state.
pub fn photo_gallery(title: &str, photos: &[Photo]) -> Markup {
    html! {
        @if !photos.is_empty() {
            div class="gallery" {
                div class="gallery-track" {
                    @for (i, photo) in photos.iter().enumerate() {
                        figure class="gallery-slide" id=(format!("photo-{}", i + 1)) {
                            img src=(photo.url) alt=(format!("{title} – photo {}", i + 1)) loading="lazy";
                        }
                    }
                }
                @if photos.len() > 1 {
                    nav class="gallery-dots" {
                        @for i in 1..=photos.len() {
                            a href=(format!("#photo-{i}")) { (i) }
                        }
                    }
                }
            }
        }
    }
}
