use yew::prelude::*;

use crate::config::SiteConfig;
use crate::pages::content::{showcase_caption, FEATURE_ROWS, SECTION_FEATURES};
use crate::scroll::{use_scroll_image, ImageSlot};

#[derive(Properties, PartialEq)]
pub struct FeatureShowcaseProps {
    pub config: SiteConfig,
}

/// "Key Features" section: feature rows next to two images that swap as the
/// section scrolls through the viewport.
#[function_component(FeatureShowcase)]
pub fn feature_showcase(props: &FeatureShowcaseProps) -> Html {
    let section_ref = use_node_ref();
    let container_ref = use_node_ref();
    let active = use_scroll_image(section_ref.clone(), container_ref.clone(), props.config.scroll);

    let media = &props.config.media;
    let image_src = |slot: ImageSlot| match slot {
        ImageSlot::First => media.mode_shape.clone(),
        ImageSlot::Second => media.oscillation.clone(),
    };
    let caption = showcase_caption(active);

    html! {
        <section id={SECTION_FEATURES} class="section" ref={section_ref}>
            <div class="container">
                <div class="section-heading">
                    <div class="badge"><i class="fas fa-bolt"></i>{"Key Features"}</div>
                    <h2>{"Comprehensive Grid Protection"}</h2>
                    <p>{"A complete solution for preventing power grid failures and optimizing system performance."}</p>
                </div>
                <div class="showcase-grid">
                    <div class="feature-rows">
                        { for FEATURE_ROWS.iter().map(|row| html! {
                            <div class="feature-row">
                                <div class="icon-tile"><i class={row.icon}></i></div>
                                <div>
                                    <h3>{row.title}</h3>
                                    <p>{row.body}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="showcase" data-image-container="true" ref={container_ref}>
                        <div class="showcase-frame">
                            { for ImageSlot::ALL.iter().map(|&slot| html! {
                                <img
                                    key={slot.index()}
                                    src={image_src(slot)}
                                    alt={showcase_caption(slot).alt}
                                    class={classes!("showcase-image", (slot == active).then_some("active"))}
                                />
                            }) }
                            <div class="showcase-shade"></div>
                        </div>
                        <div class="showcase-caption">
                            <div class="showcase-dots">
                                { for ImageSlot::ALL.iter().map(|&slot| html! {
                                    <span key={slot.index()} class={classes!("dot", (slot == active).then_some("active"))}></span>
                                }) }
                            </div>
                            <div class="caption-title">{caption.title}</div>
                            <div class="caption-subtitle">{caption.subtitle}</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
