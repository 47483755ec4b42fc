use yew::prelude::*;

use crate::content::GalleryImage;
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct LightboxGalleryProps {
    pub images: &'static [GalleryImage],
}

/// Thumbnails that open their full-size image in an overlay.
#[function_component(LightboxGallery)]
pub fn lightbox_gallery(props: &LightboxGalleryProps) -> Html {
    let current = use_state(|| None::<AttrValue>);
    let overlay = use_node_ref();

    if props.images.is_empty() {
        return html! {};
    }

    let close = {
        let current = current.clone();
        Callback::from(move |_: ()| {
            current.set(None);
            dom::set_scroll_locked(false);
        })
    };
    let on_backdrop = {
        let close = close.clone();
        let overlay = overlay.clone();
        Callback::from(move |e: MouseEvent| {
            if dom::targets_node(e.target(), &overlay) {
                close.emit(());
            }
        })
    };

    html! {
        <>
            <div class="work-gallery">
                { for props.images.iter().map(|image| {
                    let current = current.clone();
                    let src = image.full;
                    let open = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        current.set(Some(AttrValue::from(src)));
                        dom::set_scroll_locked(true);
                    });
                    html! {
                        <a href={image.full} class="lightbox-trigger" onclick={open}>
                            <img src={image.thumb} alt={image.alt} loading="lazy" />
                        </a>
                    }
                }) }
            </div>
            <div id="lightboxOverlay" ref={overlay} class={classes!("lightbox-overlay", current.is_some().then_some("active"))} onclick={on_backdrop}>
                <button class="lightbox-close" onclick={close.reform(|_: MouseEvent| ())}>{ "✕" }</button>
                if let Some(src) = (*current).clone() {
                    <img id="lightboxImage" src={src} alt="" />
                }
            </div>
        </>
    }
}
