use yew::prelude::*;

use crate::gallery::Gallery;
use crate::pages::use_scroll_to_top;
use crate::site::Reveal;

const GALLERY_CSS: &str = r#"
    .gallery-filter {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        justify-content: center;
        margin-bottom: 2rem;
    }
    .gallery-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
        gap: 1rem;
    }
    .gallery-item {
        position: relative;
        cursor: pointer;
        overflow: hidden;
        border-radius: 4px;
    }
    .gallery-item img {
        display: block;
        width: 100%;
        aspect-ratio: 4 / 3;
        object-fit: cover;
    }
    .gallery-item__overlay {
        position: absolute;
        inset: auto 0 0 0;
        padding: 0.75rem;
        background: linear-gradient(transparent, rgba(0, 0, 0, 0.7));
        color: white;
    }
"#;

#[function_component(GalleryPage)]
pub fn gallery_page() -> Html {
    use_scroll_to_top();

    html! {
        <div class="gallery-page">
            <style>{GALLERY_CSS}</style>
            <section class="page-header">
                <Reveal>
                    <h1>{"Galerie"}</h1>
                    <p>{"Eine Auswahl unserer abgeschlossenen Projekte."}</p>
                </Reveal>
            </section>
            <section class="section">
                <Gallery />
            </section>
        </div>
    }
}
