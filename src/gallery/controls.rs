//! Controls - color, finish and backdrop editors for the active model

use dioxus::prelude::*;

use crate::config::BACKGROUND_SWATCHES;
use crate::state::{ParamUpdate, Selection};

/// Slider input; an unparsable value becomes NaN and is clamped downstream.
fn slider_value(raw: &str) -> f32 {
    raw.parse().unwrap_or(f32::NAN)
}

#[component]
pub fn Controls(mut selection: Signal<Selection>) -> Element {
    let params = *selection.read().params();
    let metalness = params.metalness.value();
    let roughness = params.roughness.value();
    let metal_pct = (metalness * 100.0).round() as u32;
    let rough_pct = (roughness * 100.0).round() as u32;

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 28px; padding: 18px 28px; border-radius: 2rem; background: #e0e5ec; box-shadow: 8px 8px 16px #b8b9be, -8px -8px 16px #ffffff; flex-wrap: wrap;",

            label {
                style: "display: flex; align-items: center; gap: 10px; font-size: 12px; font-weight: 700; color: #64748b;",
                "颜色"
                input {
                    r#type: "color",
                    value: "{params.color}",
                    style: "width: 36px; height: 36px; border: none; border-radius: 50%; padding: 0; background: none; cursor: pointer;",
                    oninput: move |evt| selection.write().update_param(ParamUpdate::Color(evt.value())),
                }
            }

            label {
                style: "display: flex; align-items: center; gap: 10px; font-size: 12px; font-weight: 700; color: #64748b;",
                "金属度"
                input {
                    r#type: "range",
                    min: "0",
                    max: "1",
                    step: "0.01",
                    value: "{metalness}",
                    oninput: move |evt| {
                        selection.write().update_param(ParamUpdate::Metalness(slider_value(&evt.value())))
                    },
                }
                span { style: "font-family: monospace; width: 36px;", "{metal_pct}%" }
            }

            label {
                style: "display: flex; align-items: center; gap: 10px; font-size: 12px; font-weight: 700; color: #64748b;",
                "粗糙度"
                input {
                    r#type: "range",
                    min: "0",
                    max: "1",
                    step: "0.01",
                    value: "{roughness}",
                    oninput: move |evt| {
                        selection.write().update_param(ParamUpdate::Roughness(slider_value(&evt.value())))
                    },
                }
                span { style: "font-family: monospace; width: 36px;", "{rough_pct}%" }
            }

            div {
                style: "display: flex; align-items: center; gap: 8px;",
                span { style: "font-size: 12px; font-weight: 700; color: #64748b;", "背景" }
                for swatch in BACKGROUND_SWATCHES {
                    button {
                        key: "{swatch}",
                        title: "{swatch}",
                        style: if swatch == params.background {
                            "width: 24px; height: 24px; border-radius: 50%; border: 2px solid #6366f1; background: {swatch}; cursor: pointer;"
                        } else {
                            "width: 24px; height: 24px; border-radius: 50%; border: 2px solid transparent; background: {swatch}; cursor: pointer; box-shadow: 2px 2px 4px #b8b9be;"
                        },
                        onclick: move |_| selection.write().update_param(ParamUpdate::Background(swatch.to_string())),
                    }
                }
            }

            button {
                style: "margin-left: auto; padding: 10px 20px; border: none; border-radius: 999px; background: #e0e5ec; color: #475569; font-size: 12px; font-weight: 700; cursor: pointer; box-shadow: 4px 4px 8px #b8b9be, -4px -4px 8px #ffffff;",
                onclick: move |_| selection.write().reset_view(),
                "重置视角"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_value_parses_or_yields_nan() {
        assert_eq!(slider_value("0.35"), 0.35);
        assert!(slider_value("").is_nan());
        assert!(slider_value("abc").is_nan());
    }
}
