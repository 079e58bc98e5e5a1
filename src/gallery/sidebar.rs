//! Sidebar - searchable, filterable model list

use dioxus::prelude::*;
use tracing::warn;

use crate::Route;
use crate::catalog::Catalog;
use crate::scene::is_detailed;
use crate::state::{CategoryFilter, Selection, SidebarFilter, display_index};

const RAISED: &str = "box-shadow: 6px 6px 12px #b8b9be, -6px -6px 12px #ffffff;";
const SUNKEN: &str = "box-shadow: inset 4px 4px 8px #b8b9be, inset -4px -4px 8px #ffffff;";

#[component]
pub fn Sidebar(mut selection: Signal<Selection>) -> Element {
    let catalog = Catalog::builtin();
    let mut filter = use_signal(SidebarFilter::default);
    let navigator = use_navigator();

    let active_id = selection.read().active_id().to_string();
    let current = filter.read().clone();
    let hits = current.apply(catalog);
    let no_hits = hits.is_empty();
    let total = catalog.len();

    rsx! {
        aside {
            style: "width: 320px; display: flex; flex-direction: column; padding: 28px 20px; gap: 18px; border-right: 1px solid rgba(255,255,255,0.4);",

            div {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                h1 {
                    style: "margin: 0; font-size: 22px; font-weight: 900; color: #334155; letter-spacing: -0.03em;",
                    "3D 资产库"
                }
                span {
                    style: "font-size: 11px; font-weight: 700; color: #94a3b8; letter-spacing: 0.15em;",
                    "ASSETS: {total}"
                }
            }

            input {
                r#type: "text",
                placeholder: "搜索模型...",
                value: "{current.query}",
                style: "padding: 12px 18px; border: none; outline: none; border-radius: 999px; background: #e0e5ec; color: #475569; {SUNKEN}",
                oninput: move |evt| filter.write().query = evt.value(),
            }

            div {
                style: "display: flex; gap: 8px; flex-wrap: wrap;",
                for option in CategoryFilter::OPTIONS {
                    button {
                        key: "{option.label()}",
                        style: if current.category == option {
                            "padding: 6px 14px; border: none; border-radius: 999px; background: #6366f1; color: white; font-size: 12px; font-weight: 700; cursor: pointer;"
                        } else {
                            "padding: 6px 14px; border: none; border-radius: 999px; background: #e0e5ec; color: #64748b; font-size: 12px; font-weight: 700; cursor: pointer; {RAISED}"
                        },
                        onclick: move |_| filter.write().category = option,
                        "{option.label()}"
                    }
                }
            }

            div {
                style: "flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 10px; padding: 4px;",
                if no_hits {
                    div {
                        style: "color: #94a3b8; font-size: 13px; text-align: center; padding: 24px;",
                        "没有匹配的模型"
                    }
                }
                for (position, descriptor) in hits {
                    {
                        let id = descriptor.id.clone();
                        let is_active = descriptor.id == active_id;
                        let index = display_index(total, position);
                        let detailed = descriptor.kind().is_some_and(is_detailed);
                        rsx! {
                            button {
                                key: "{descriptor.id}",
                                style: if is_active {
                                    "display: flex; align-items: center; gap: 12px; padding: 12px 16px; border: none; border-radius: 20px; background: #e0e5ec; color: #4f46e5; text-align: left; cursor: pointer; {SUNKEN}"
                                } else {
                                    "display: flex; align-items: center; gap: 12px; padding: 12px 16px; border: none; border-radius: 20px; background: #e0e5ec; color: #475569; text-align: left; cursor: pointer; {RAISED}"
                                },
                                onclick: move |_| {
                                    match selection.write().select(catalog, &id) {
                                        Ok(()) => {
                                            navigator.replace(Route::Model { id: id.clone() });
                                        }
                                        Err(e) => warn!(error = %e, "select failed"),
                                    }
                                },
                                span {
                                    style: "font-family: monospace; font-size: 11px; color: #94a3b8;",
                                    "{index}"
                                }
                                span { style: "font-size: 20px;", "{descriptor.emoji}" }
                                div {
                                    style: "display: flex; flex-direction: column;",
                                    span { style: "font-size: 14px; font-weight: 700;", "{descriptor.name}" }
                                    span {
                                        style: "font-size: 10px; color: #94a3b8; letter-spacing: 0.1em;",
                                        "{descriptor.category.label()}"
                                        if detailed {
                                            span { style: "margin-left: 6px; color: #6366f1;", "· 精细" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
