use leptos::html;
use leptos::prelude::*;

/// 删除确认对话框
///
/// 无状态模态框：确认 / 取消各产生一次布尔结果，经 `on_close`
/// 回调交还调用方，自身不保留任何状态。按 ESC 或点击遮罩
/// 视为取消。
#[component]
pub fn ConfirmDialog(
    /// 提示文案中展示的记录名称
    #[prop(into)]
    name: String,
    /// 结果回调：确认 true / 取消 false
    on_close: Callback<bool>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<html::Dialog>::new();

    // 挂载后立即以模态方式打开
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if !dialog.open() {
                let _ = dialog.show_modal();
            }
        }
    });

    view! {
        <dialog
            class="modal"
            node_ref=dialog_ref
            // ESC / 遮罩关闭走浏览器的 close 事件，视为取消
            on:close=move |_| on_close.run(false)
        >
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Delete employee"</h3>
                <p class="py-4">
                    "Are you sure you want to delete " <span class="font-bold">{name}</span>
                    "? This action cannot be undone."
                </p>
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| on_close.run(false)>
                        "Cancel"
                    </button>
                    <button type="button" class="btn btn-error" on:click=move |_| on_close.run(true)>
                        "Delete"
                    </button>
                </div>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
