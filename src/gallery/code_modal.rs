//! Code modal - shows the generated component source with its own copy button

use dioxus::prelude::*;

use super::clipboard::copy_with_feedback;
use crate::state::CopyFeedback;

#[component]
pub fn CodeModal(code: String, on_close: EventHandler<()>) -> Element {
    let mut feedback = use_signal(CopyFeedback::default);
    let copied = feedback.read().is_copied();
    let notice = feedback.read().notice().map(str::to_string);
    let copy_code = code.clone();

    rsx! {
        div {
            style: "position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; background: rgba(30,41,59,0.35); backdrop-filter: blur(6px);",
            onclick: move |_| on_close.call(()),

            div {
                style: "width: min(760px, 90vw); max-height: 80vh; display: flex; flex-direction: column; gap: 18px; padding: 28px; border-radius: 2rem; background: #e0e5ec; box-shadow: 12px 12px 24px #b8b9be, -12px -12px 24px #ffffff;",
                onclick: move |evt| evt.stop_propagation(),

                h2 {
                    style: "margin: 0; font-size: 18px; font-weight: 900; color: #334155;",
                    "React Three Fiber 代码"
                }

                pre {
                    style: "flex: 1; margin: 0; overflow: auto; padding: 20px; border-radius: 1.25rem; background: #1e293b; color: #e2e8f0; font-size: 12px; line-height: 1.6;",
                    code { "{code}" }
                }

                if let Some(reason) = notice {
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center; padding: 10px 16px; border-radius: 12px; background: #fee2e2; color: #b91c1c; font-size: 12px;",
                        span { "{reason}" }
                        button {
                            style: "border: none; background: none; color: #b91c1c; cursor: pointer; font-weight: 700;",
                            onclick: move |_| feedback.write().dismiss(),
                            "×"
                        }
                    }
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 12px;",
                    button {
                        style: "padding: 12px 24px; border: none; border-radius: 999px; background: #e0e5ec; color: #64748b; font-weight: 700; cursor: pointer; box-shadow: 4px 4px 8px #b8b9be, -4px -4px 8px #ffffff;",
                        onclick: move |_| on_close.call(()),
                        "取消返回"
                    }
                    button {
                        style: if copied {
                            "padding: 12px 24px; border: none; border-radius: 999px; background: #10b981; color: white; font-weight: 700; cursor: pointer;"
                        } else {
                            "padding: 12px 24px; border: none; border-radius: 999px; background: #6366f1; color: white; font-weight: 700; cursor: pointer;"
                        },
                        onclick: move |_| copy_with_feedback(copy_code.clone(), feedback),
                        if copied { "复制成功" } else { "立即复制代码" }
                    }
                }
            }
        }
    }
}
