//! Gallery page - layout shared by every route
//!
//! Owns the selection for the whole session; route changes only re-point
//! it, so parameters and the viewer survive navigation.

use dioxus::prelude::*;
use tracing::{error, warn};

use super::clipboard::copy_with_feedback;
use super::{CodeModal, Controls, Sidebar, Viewer};
use crate::Route;
use crate::catalog::Catalog;
use crate::export::generate_code;
use crate::state::{CopyFeedback, Selection};

#[component]
pub fn GalleryPage() -> Element {
    let route = use_route::<Route>();
    let opened = use_hook(|| {
        let initial = match &route {
            Route::Model { id } => Some(id.as_str()),
            Route::Home {} => None,
        };
        Selection::open(Catalog::builtin(), initial)
    });

    match opened {
        Ok(initial) => rsx! { GalleryShell { initial } },
        Err(e) => {
            error!(error = %e, "gallery cannot open");
            rsx! {
                div {
                    style: "padding: 48px; color: #b91c1c; font-family: sans-serif;",
                    "{e}"
                }
            }
        }
    }
}

#[component]
fn GalleryShell(initial: Selection) -> Element {
    let selection = use_signal(|| initial.clone());
    use_context_provider(|| selection);
    let mut feedback = use_signal(CopyFeedback::default);
    let mut show_code = use_signal(|| false);

    let catalog = Catalog::builtin();
    let code = {
        let current = selection.read();
        match current.active(catalog) {
            Ok(descriptor) => Some((descriptor.clone(), generate_code(descriptor, current.params()))),
            Err(e) => {
                warn!(error = %e, "active model missing from catalog");
                None
            }
        }
    };
    let copied = feedback.read().is_copied();
    let notice = feedback.read().notice().map(str::to_string);

    rsx! {
        div {
            style: "display: flex; height: 100vh; background: #e0e5ec; font-family: system-ui, -apple-system, sans-serif; overflow: hidden;",

            Sidebar { selection }

            main {
                style: "flex: 1; display: flex; flex-direction: column; gap: 20px; padding: 28px; min-width: 0;",

                header {
                    style: "display: flex; justify-content: space-between; align-items: center;",
                    if let Some((descriptor, _)) = &code {
                        div {
                            style: "display: flex; align-items: center; gap: 14px;",
                            span { style: "font-size: 32px;", "{descriptor.emoji}" }
                            div {
                                style: "display: flex; flex-direction: column;",
                                span {
                                    style: "font-size: 24px; font-weight: 900; color: #334155;",
                                    "{descriptor.name}"
                                }
                                span {
                                    style: "font-size: 11px; font-weight: 700; color: #94a3b8; letter-spacing: 0.2em;",
                                    "{descriptor.category.label()}"
                                }
                            }
                        }
                    }
                    div {
                        style: "display: flex; gap: 12px;",
                        button {
                            style: "padding: 12px 22px; border: none; border-radius: 999px; background: #e0e5ec; color: #475569; font-weight: 700; cursor: pointer; box-shadow: 4px 4px 8px #b8b9be, -4px -4px 8px #ffffff;",
                            onclick: move |_| show_code.set(true),
                            "查看代码"
                        }
                        button {
                            style: if copied {
                                "padding: 12px 22px; border: none; border-radius: 999px; background: #10b981; color: white; font-weight: 700; cursor: pointer;"
                            } else {
                                "padding: 12px 22px; border: none; border-radius: 999px; background: #6366f1; color: white; font-weight: 700; cursor: pointer;"
                            },
                            onclick: {
                                let text = code.as_ref().map(|(_, text)| text.clone());
                                move |_| {
                                    if let Some(text) = text.clone() {
                                        copy_with_feedback(text, feedback);
                                    }
                                }
                            },
                            if copied { "代码已复制" } else { "复制 HTML/JSX" }
                        }
                    }
                }

                if let Some(reason) = notice {
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center; padding: 10px 18px; border-radius: 14px; background: #fee2e2; color: #b91c1c; font-size: 13px;",
                        span { "{reason}" }
                        button {
                            style: "border: none; background: none; color: #b91c1c; cursor: pointer; font-weight: 700;",
                            onclick: move |_| feedback.write().dismiss(),
                            "×"
                        }
                    }
                }

                div {
                    style: "flex: 1; min-height: 0;",
                    Viewer { selection }
                }

                Controls { selection }

                if let Some((descriptor, _)) = &code {
                    details {
                        style: "padding: 14px 24px; border-radius: 1.5rem; background: #e0e5ec; box-shadow: inset 4px 4px 8px #b8b9be, inset -4px -4px 8px #ffffff; color: #475569; font-size: 13px;",
                        summary { style: "cursor: pointer; font-weight: 700;", "设计说明" }
                        div {
                            style: "margin-top: 10px; white-space: pre-wrap; line-height: 1.7; max-height: 160px; overflow-y: auto;",
                            "{descriptor.description}"
                        }
                    }
                }
            }

            if show_code() {
                if let Some((_, text)) = &code {
                    CodeModal {
                        code: text.clone(),
                        on_close: move |_| show_code.set(false),
                    }
                }
            }

            Outlet::<Route> {}
        }
    }
}

/// Point the shared selection at a route's model, `None` meaning the first.
fn follow_route(mut selection: Signal<Selection>, id: Option<&str>) {
    let mut next = selection.peek().clone();
    match next.follow(Catalog::builtin(), id) {
        Ok(true) => selection.set(next),
        Ok(false) => {}
        Err(e) => warn!(error = %e, "route ignored"),
    }
}

/// `/` - the first catalog entry
#[component]
pub fn Home() -> Element {
    let selection = use_context::<Signal<Selection>>();
    use_effect(move || follow_route(selection, None));

    rsx! {}
}

/// `/model/:id` - points the shared selection at `id`
#[component]
pub fn Model(id: String) -> Element {
    let selection = use_context::<Signal<Selection>>();
    // Sidebar clicks select before navigating, so the ids already agree then
    use_effect(use_reactive!(|id| follow_route(selection, Some(&id))));

    rsx! {}
}
