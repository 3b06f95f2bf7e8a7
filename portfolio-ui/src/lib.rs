//! Thành phần giao diện portfolio cho môi trường WebAssembly.

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod config;

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::config::JsPresentationConfig;
    use crate::styles;
    use gloo::events::EventListener;
    use gloo::timers::callback::Timeout;
    use portfolio_core::{
        Card, MilestoneList, MilestoneRecord, Presentation, PresentationConfig, Unflip, CARD_HINT,
        SUMMARY_HEADER,
    };
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{console, Document, Element, KeyboardEvent, Window};
    use yew::prelude::*;

    const SITE_TITLE: &str = "My Career Journey";
    const HERO_TAGLINE: &str = "Every role taught me something. Reveal them one at a time.";
    const QUOTE: &str = "The expert in anything was once a beginner.";
    const QUOTE_AUTHOR: &str = "Helen Hayes";

    #[derive(Properties, PartialEq)]
    pub struct PortfolioViewProps {
        pub milestones: MilestoneList,
        pub config: PresentationConfig,
    }

    #[function_component(PortfolioView)]
    fn portfolio_view(props: &PortfolioViewProps) -> Html {
        let presentation = {
            let milestones = props.milestones.clone();
            let config = props.config.clone();
            use_mut_ref(move || {
                let mut presentation = Presentation::new(milestones, config);
                presentation.render_cards();
                presentation
            })
        };
        let redraw = use_force_update();

        {
            let presentation = presentation.clone();
            use_effect_with((), move |_| {
                if let Some(document) = document() {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                }
                let presentation = presentation.borrow();
                if presentation.config().log_summary {
                    log_lesson_summary(presentation.milestones());
                }
                || ()
            });
        }

        {
            let presentation = presentation.clone();
            let redraw = redraw.clone();
            use_effect_with((), move |_| {
                let listener = document().map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if presentation.borrow_mut().handle_key(&event.key()) {
                            redraw.force_update();
                        }
                    })
                });
                move || drop(listener)
            });
        }

        let theme = presentation.borrow().theme();
        use_effect_with(theme, |theme| {
            if let Some(root) = document().and_then(|document| document.document_element()) {
                let (class, enabled) = theme.root_class_toggle();
                if let Err(err) = root.class_list().toggle_with_force(class, enabled) {
                    console::error_1(&err);
                }
            }
            || ()
        });

        let on_card_click = {
            let presentation = presentation.clone();
            let redraw = redraw.clone();
            Callback::from(move |event: MouseEvent| {
                let Some(index) = card_index(&event) else {
                    return;
                };
                if presentation.borrow_mut().toggle_card(index).is_some() {
                    redraw.force_update();
                }
            })
        };

        let on_reveal = {
            let presentation = presentation.clone();
            let redraw = redraw.clone();
            Callback::from(move |_: MouseEvent| {
                let reveal = presentation.borrow_mut().reveal_next();
                if let Some(unflip) = reveal.unflip {
                    schedule_unflip(presentation.clone(), redraw.clone(), unflip);
                }
                redraw.force_update();
            })
        };

        let on_open_modal = {
            let presentation = presentation.clone();
            let redraw = redraw.clone();
            Callback::from(move |_: MouseEvent| {
                presentation.borrow_mut().open_modal();
                redraw.force_update();
            })
        };

        let on_close_modal = {
            let presentation = presentation.clone();
            let redraw = redraw.clone();
            Callback::from(move |_: MouseEvent| {
                presentation.borrow_mut().close_modal();
                redraw.force_update();
            })
        };

        let on_toggle_theme = {
            let presentation = presentation.clone();
            let redraw = redraw.clone();
            Callback::from(move |_: MouseEvent| {
                presentation.borrow_mut().toggle_theme();
                redraw.force_update();
            })
        };

        let (theme, modal, status, cards) = {
            let state = presentation.borrow();
            let cards: Html = state
                .card_views()
                .map(|(card, record)| render_card(card, record, &on_card_click))
                .collect();
            let status = state.status_text().unwrap_or(HERO_TAGLINE).to_string();
            (state.theme(), state.modal(), status, cards)
        };

        html! {
            <div class="portfolio-root">
                <header class="site-header">
                    <span class="brand">{ SITE_TITLE }</span>
                    <button
                        id="themeToggle"
                        type="button"
                        class="theme-toggle"
                        aria-pressed={theme.aria_pressed()}
                        aria-label="Bật/tắt giao diện tối"
                        onclick={on_toggle_theme}
                    >
                        { if theme.is_dark() { "Light mode" } else { "Dark mode" } }
                    </button>
                </header>
                <section class="hero">
                    <h1>{"From coffee bar to founder"}</h1>
                    <p aria-live="polite">{ status }</p>
                    <div class="hero-actions">
                        <button id="revealNextBtn" type="button" class="btn" onclick={on_reveal}>
                            {"Reveal next"}
                        </button>
                        <button id="quoteBtn" type="button" class="btn btn-ghost" onclick={on_open_modal}>
                            {"Favourite quote"}
                        </button>
                    </div>
                </section>
                <section id="cards" class="card-grid" role="list" aria-label="Các cột mốc nghề nghiệp">
                    { cards }
                </section>
                <div
                    id="modal"
                    class={classes!("modal", modal.css_class())}
                    aria-hidden={modal.aria_hidden()}
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="modalTitle"
                >
                    <div class="modal-content">
                        <h2 id="modalTitle">{"A quote I live by"}</h2>
                        <blockquote>
                            <p>{ QUOTE }</p>
                            <cite>{ QUOTE_AUTHOR }</cite>
                        </blockquote>
                        <button id="closeModal" type="button" class="btn" onclick={on_close_modal}>
                            {"Close"}
                        </button>
                    </div>
                </div>
            </div>
        }
    }

    fn render_card(card: &Card, record: &MilestoneRecord, onclick: &Callback<MouseEvent>) -> Html {
        html! {
            <div class="card" role="listitem" key={card.index}>
                <div
                    class={classes!("card-inner", card.flipped.then_some("is-flipped"))}
                    data-index={card.index.to_string()}
                    onclick={onclick.clone()}
                >
                    <div class="card-front">
                        <img src={record.image_url.clone()} alt={record.image_alt()} loading="lazy" />
                        <h3>{ record.role.clone() }</h3>
                        <p>{ record.summary.clone() }</p>
                        <span class="pill">{ CARD_HINT }</span>
                    </div>
                    <div class="card-back">
                        <p>{ record.lesson.clone() }</p>
                    </div>
                </div>
            </div>
        }
    }

    /// Đọc `data-index` của thẻ chứa phần tử được click, tại thời điểm click.
    fn card_index(event: &MouseEvent) -> Option<usize> {
        let target: Element = event.target()?.dyn_into().ok()?;
        target
            .closest("[data-index]")
            .ok()??
            .get_attribute("data-index")?
            .parse()
            .ok()
    }

    fn schedule_unflip(
        presentation: Rc<RefCell<Presentation>>,
        redraw: UseForceUpdateHandle,
        unflip: Unflip,
    ) {
        let millis = u32::try_from(unflip.after.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            if presentation.borrow_mut().settle_card(unflip.index) {
                redraw.force_update();
            }
        })
        .forget();
    }

    fn log_lesson_summary(milestones: &MilestoneList) {
        console::log_1(&JsValue::from_str(SUMMARY_HEADER));
        for line in milestones.lesson_summary() {
            console::log_1(&JsValue::from_str(&line));
        }
    }

    fn document() -> Option<Document> {
        web_sys::window().and_then(|window| window.document())
    }

    #[wasm_bindgen]
    pub fn mount_portfolio(
        selector: &str,
        config: Option<JsValue>,
        milestones: Option<JsValue>,
    ) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))?;

        let config = match config.filter(is_present) {
            Some(js_cfg) => {
                let cfg: JsPresentationConfig = from_value(js_cfg)
                    .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
                PresentationConfig::from(cfg)
            }
            None => PresentationConfig::default(),
        };

        let milestones = match milestones.filter(is_present) {
            Some(js_list) => from_value::<MilestoneList>(js_list)
                .map_err(|err| JsValue::from_str(&format!("Danh sách cột mốc lỗi: {err}")))?,
            None => MilestoneList::journey(),
        };

        yew::Renderer::<PortfolioView>::with_root_and_props(
            target,
            PortfolioViewProps { milestones, config },
        )
        .render();
        Ok(())
    }

    fn is_present(value: &JsValue) -> bool {
        !value.is_undefined() && !value.is_null()
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_portfolio;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_portfolio(
    _: &str,
    _: Option<wasm_bindgen::JsValue>,
    _: Option<wasm_bindgen::JsValue>,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "portfolio-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}
