use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use staffdeck_shared::query::{ListQuery, SortField};
use staffdeck_shared::{Employee, EmployeePage, PAGE_SIZE_CHOICES};

use crate::api::ApiClient;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::icons::*;
use crate::session::use_auth;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// 提示条停留时长
const NOTICE_TTL: Duration = Duration::from_secs(3);

// =========================================================
// 列表状态机
// =========================================================

/// 列表装载状态：Idle → Loading → Loaded | Failed。
/// 查询元组任一变化都会重新进入 Loading。
#[derive(Clone)]
enum ListState {
    Idle,
    Loading,
    Loaded(EmployeePage),
    Failed(String),
}

// =========================================================
// 视图
// =========================================================

#[component]
pub fn EmployeeListPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let query = RwSignal::new(ListQuery::default());
    let state = RwSignal::new(ListState::Idle);
    // 搜索框的未提交文本（提交时才进入查询元组）
    let (search_input, set_search_input) = signal(String::new());
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);
    let pending_delete = RwSignal::new(Option::<Employee>::None);

    // 查询元组任一变化 → 进入 Loading 并整页重新拉取。
    // 响应到达时若查询已再次变化则丢弃（last state wins，不做取消）。
    Effect::new(move |_| {
        let issued = query.get();
        state.set(ListState::Loading);

        let api = ApiClient::new(auth.session);
        spawn_local(async move {
            let result = api.list(&issued).await;
            if query.get_untracked() != issued {
                // 过期响应
                return;
            }
            match result {
                Ok(page) => state.set(ListState::Loaded(page)),
                Err(e) => state.set(ListState::Failed(e.notice())),
            }
        });
    });

    // 提示条自动消失
    Effect::new(move |_| {
        if notice.get().is_some() {
            set_timeout(move || set_notice.set(None), NOTICE_TTL);
        }
    });

    // ---- 查询控件（各自独立，组合进同一个元组） ----

    let on_sort = move |field: SortField| {
        query.set(query.get_untracked().toggle_sort(field));
    };

    let on_search = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        query.set(query.get_untracked().with_search(search_input.get_untracked()));
    };

    let on_page_size = move |ev: leptos::web_sys::Event| {
        if let Ok(per_page) = event_target_value(&ev).parse::<u32>() {
            query.set(query.get_untracked().with_per_page(per_page));
        }
    };

    let page_count = move || match state.get() {
        ListState::Loaded(page) => query.get().page_count(page.total),
        _ => 1,
    };

    let on_prev_page = move |_| {
        let q = query.get_untracked();
        if q.page > 1 {
            query.set(q.with_page(q.page - 1));
        }
    };

    let on_next_page = move |_| {
        let q = query.get_untracked();
        if q.page < page_count() {
            query.set(q.with_page(q.page + 1));
        }
    };

    let reload = move || query.set(query.get_untracked());

    // ---- 删除流程：确认对话框 → delete → 本地移除该行 ----

    let on_dialog_close = Callback::new(move |confirmed: bool| {
        let Some(employee) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        if !confirmed {
            // 取消：不发请求，行保留
            return;
        }

        let id = employee.id;
        let api = ApiClient::new(auth.session);
        spawn_local(async move {
            match api.delete(id).await {
                Ok(_) => {
                    state.update(|s| {
                        if let ListState::Loaded(page) = s {
                            page.remove(id);
                        }
                    });
                    set_notice.set(Some(("Employee deleted successfully!".to_string(), false)));
                }
                Err(e) => {
                    // 行保留，仅提示
                    set_notice.set(Some((e.notice(), true)));
                }
            }
        });
    });

    let on_logout = move |_| {
        let api = ApiClient::new(auth.session);
        spawn_local(async move {
            // 服务端注销失败不阻塞本地清除
            let _ = api.logout().await;
            // 先清令牌再触发导航（路由服务监听认证信号自动回登录页）
            auth.logout();
        });
    };

    // ---- 表头 ----

    let sort_header = move |field: SortField, label: &'static str| {
        let indicator = move || {
            let q = query.get();
            if q.sort_field == field {
                match q.sort_direction {
                    staffdeck_shared::query::SortDirection::Ascending => " ▲",
                    staffdeck_shared::query::SortDirection::Descending => " ▼",
                }
            } else {
                ""
            }
        };
        view! {
            <th class="cursor-pointer select-none" on:click=move |_| on_sort(field)>
                {label}
                {indicator}
            </th>
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-6">
                // 提示条
                <Show when=move || notice.get().is_some()>
                    <div class="toast toast-top toast-end z-50">
                        <div class=move || {
                            if notice.get().map(|(_, is_err)| is_err).unwrap_or(false) {
                                "alert alert-error shadow-lg"
                            } else {
                                "alert alert-success shadow-lg"
                            }
                        }>
                            <span>{move || notice.get().map(|(text, _)| text).unwrap_or_default()}</span>
                        </div>
                    </div>
                </Show>

                // 确认对话框（仅在等待确认时挂载）
                {move || pending_delete.get().map(|employee| {
                    view! { <ConfirmDialog name=employee.name.clone() on_close=on_dialog_close /> }
                })}

                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <Users attr:class="text-primary h-6 w-6" />
                        <a class="btn btn-ghost text-xl">"StaffDeck"</a>
                    </div>
                    <div class="flex-none gap-2">
                        <button
                            class="btn btn-primary gap-2"
                            on:click=move |_| router.navigate(&AppRoute::EmployeeAdd.to_path())
                        >
                            <Plus attr:class="h-4 w-4" /> "Add employee"
                        </button>
                        <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                            <LogOut attr:class="h-4 w-4" /> "Sign out"
                        </button>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="flex flex-wrap items-center justify-between gap-4 p-6 pb-2">
                            <div>
                                <h3 class="card-title">"Employees"</h3>
                                <p class="text-base-content/70 text-sm">
                                    "Search, sort and manage the directory."
                                </p>
                            </div>
                            <div class="flex items-center gap-2">
                                <form class="join" on:submit=on_search>
                                    <input
                                        type="text"
                                        placeholder="Search employees..."
                                        class="input input-bordered join-item"
                                        on:input=move |ev| set_search_input.set(event_target_value(&ev))
                                        prop:value=search_input
                                    />
                                    <button type="submit" class="btn join-item">
                                        <Search attr:class="h-4 w-4" />
                                    </button>
                                </form>
                                <button on:click=move |_| reload() class="btn btn-ghost btn-circle">
                                    <RefreshCw attr:class="h-5 w-5" />
                                </button>
                            </div>
                        </div>

                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        {sort_header(SortField::Id, "ID")}
                                        {sort_header(SortField::Name, "Name")}
                                        {sort_header(SortField::Email, "Email")}
                                        {sort_header(SortField::Department, "Department")}
                                        {sort_header(SortField::Phone, "Phone")}
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || match state.get() {
                                        ListState::Idle | ListState::Loading => view! {
                                            <tr>
                                                <td colspan="6" class="text-center py-8 text-base-content/50">
                                                    <span class="loading loading-spinner loading-md"></span>
                                                    " Loading..."
                                                </td>
                                            </tr>
                                        }.into_any(),
                                        ListState::Failed(message) => view! {
                                            <tr>
                                                <td colspan="6" class="text-center py-8 text-error">
                                                    {message}
                                                </td>
                                            </tr>
                                        }.into_any(),
                                        ListState::Loaded(page) if page.employees.is_empty() => view! {
                                            <tr>
                                                <td colspan="6" class="text-center py-8 text-base-content/50">
                                                    "No employees found."
                                                </td>
                                            </tr>
                                        }.into_any(),
                                        ListState::Loaded(page) => view! {
                                            <For
                                                each=move || page.employees.clone()
                                                key=|employee| employee.id
                                                children=move |employee| {
                                                    let id = employee.id;
                                                    let for_dialog = employee.clone();
                                                    view! {
                                                        <tr>
                                                            <td class="font-mono text-sm opacity-70">{employee.id}</td>
                                                            <td class="font-bold">{employee.name.clone()}</td>
                                                            <td>{employee.email.clone()}</td>
                                                            <td>
                                                                <div class="badge badge-outline">{employee.department.clone()}</div>
                                                            </td>
                                                            <td class="font-mono text-sm">{employee.phone.clone()}</td>
                                                            <td>
                                                                <div class="flex gap-1 justify-end">
                                                                    <button
                                                                        class="btn btn-ghost btn-sm btn-square"
                                                                        title="Edit"
                                                                        on:click=move |_| router.navigate(
                                                                            &AppRoute::EmployeeEdit(id).to_path(),
                                                                        )
                                                                    >
                                                                        <Pencil attr:class="h-4 w-4" />
                                                                    </button>
                                                                    <button
                                                                        class="btn btn-ghost btn-sm btn-square text-error"
                                                                        title="Delete"
                                                                        on:click=move |_| pending_delete.set(Some(for_dialog.clone()))
                                                                    >
                                                                        <Trash2 attr:class="h-4 w-4" />
                                                                    </button>
                                                                </div>
                                                            </td>
                                                        </tr>
                                                    }
                                                }
                                            />
                                        }.into_any(),
                                    }}
                                </tbody>
                            </table>
                        </div>

                        // 分页控件
                        <div class="flex flex-wrap items-center justify-between gap-4 p-6 pt-2">
                            <div class="flex items-center gap-2 text-sm">
                                <span>"Rows per page:"</span>
                                <select class="select select-bordered select-sm" on:change=on_page_size>
                                    {PAGE_SIZE_CHOICES
                                        .iter()
                                        .map(|&size| {
                                            view! {
                                                <option
                                                    value=size.to_string()
                                                    selected=move || query.get().per_page == size
                                                >
                                                    {size}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                                <span class="opacity-70">
                                    {move || match state.get() {
                                        ListState::Loaded(page) => {
                                            format!("{} employees total", page.total)
                                        }
                                        _ => String::new(),
                                    }}
                                </span>
                            </div>
                            <div class="join">
                                <button
                                    class="join-item btn btn-sm"
                                    disabled=move || query.get().page <= 1
                                    on:click=on_prev_page
                                >
                                    "«"
                                </button>
                                <button class="join-item btn btn-sm btn-disabled">
                                    {move || format!("Page {} of {}", query.get().page, page_count())}
                                </button>
                                <button
                                    class="join-item btn btn-sm"
                                    disabled={move || query.get().page >= page_count()}
                                    on:click=on_next_page
                                >
                                    "»"
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
