use leptos::prelude::*;

use crate::catalog::{CATALOG, ServiceEntry};
use crate::icons::{Icon, IconGlyph};
use crate::observe::{self, Subscription};
use crate::state::{Hover, RevealSet};

/// Reveal transitions are staggered per card, feature-row expansion
/// per row within a card.
const CARD_STAGGER_MS: u32 = 100;
const ROW_STAGGER_MS: u32 = 50;

#[component]
pub fn Services() -> impl IntoView {
    let revealed = RwSignal::new(RevealSet::default());
    let hovered = RwSignal::new(Hover::default());

    // One observer over every card, registered after the first render
    // so the card elements exist in the document. The handle lives in
    // local storage: the subscription itself is not Send.
    let subscription = StoredValue::new_local(None::<Subscription>);
    Effect::new(move || {
        if subscription.with_value(|slot| slot.is_none()) {
            subscription.set_value(observe::watch_cards(move |id| {
                revealed.update(|set| {
                    set.reveal(id);
                });
            }));
        }
    });
    on_cleanup(move || {
        subscription.update_value(|slot| {
            if let Some(mut sub) = slot.take() {
                sub.disconnect();
            }
        });
    });

    view! {
        <section class="services">
            <div class="services-glow" aria-hidden="true">
                <div class="glow-blob top-right"></div>
                <div class="glow-blob bottom-left"></div>
                <div class="glow-blob center"></div>
            </div>
            <div class="container">
                <div class="section-header">
                    <div class="section-badge">
                        <IconGlyph icon=Icon::Sparkles size=32 />
                    </div>
                    <h2 class="section-title">"Our Creative Services"</h2>
                    <p class="section-description">
                        "Transform your vision into stunning visual experiences with our "
                        "comprehensive design services. From brand identity to digital "
                        "innovation, we craft designs that captivate and convert."
                    </p>
                </div>
                <div class="services-grid">
                    {CATALOG
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! {
                                <ServiceCard entry=entry index=index revealed=revealed hovered=hovered />
                            }
                        })
                        .collect_view()}
                </div>
                <CtaPanel />
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(
    entry: &'static ServiceEntry,
    index: usize,
    revealed: RwSignal<RevealSet>,
    hovered: RwSignal<Hover>,
) -> impl IntoView {
    let id = entry.id;
    let card_style = format!(
        "--accent-from: {}; --accent-to: {}; transition-delay: {}ms",
        entry.accent_from,
        entry.accent_to,
        index as u32 * CARD_STAGGER_MS,
    );

    view! {
        <article
            class=move || {
                if revealed.with(|set| set.contains(id)) {
                    "service-card is-revealed"
                } else {
                    "service-card"
                }
            }
            data-card-id=id.to_string()
            style=card_style
            on:mouseenter=move |_| hovered.update(|h| h.enter(id))
            on:mouseleave=move |_| hovered.update(|h| h.leave())
        >
            <div class="card-icon">
                <IconGlyph icon=entry.icon size=32 />
            </div>
            <h3 class="card-title">{entry.title}</h3>
            <p class="card-description">{entry.description}</p>
            <div class="card-features">
                {entry
                    .features
                    .iter()
                    .enumerate()
                    .map(|(row, label)| {
                        let row_style = format!(
                            "transition-delay: {}ms",
                            row as u32 * ROW_STAGGER_MS,
                        );
                        view! {
                            <div
                                class=move || {
                                    if hovered.with(|h| h.is(id)) {
                                        "feature-row is-active"
                                    } else {
                                        "feature-row"
                                    }
                                }
                                style=row_style
                            >
                                <span class="feature-dot"></span>
                                <span class="feature-label">{*label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class=move || {
                if hovered.with(|h| h.is(id)) { "card-cta is-active" } else { "card-cta" }
            }>
                <button class="btn btn-accent">"Learn More"</button>
            </div>
        </article>
    }
}

#[component]
fn CtaPanel() -> impl IntoView {
    view! {
        <div class="cta-panel">
            <h3 class="cta-title">"Ready to Start Your Creative Journey?"</h3>
            <p class="cta-description">
                "Let's collaborate to bring your vision to life with innovative "
                "design solutions that make an impact."
            </p>
            <button class="btn btn-inverse">"Get Started Today"</button>
        </div>
    }
}
