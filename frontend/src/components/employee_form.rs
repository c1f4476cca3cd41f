use leptos::prelude::*;
use leptos::task::spawn_local;
use staffdeck_shared::validation::validate_employee;
use staffdeck_shared::{Employee, EmployeeDraft};

use crate::api::ApiClient;
use crate::session::use_auth;
use crate::web::router::use_router;

// =========================================================
// 表单状态
// =========================================================

/// 员工表单状态
///
/// 将零散的 signal 整合为一个 `Copy` 结构体，负责数据持有、
/// 回填、重置与到请求体的转换。
#[derive(Clone, Copy)]
struct FormState {
    name: RwSignal<String>,
    email: RwSignal<String>,
    department: RwSignal<String>,
    phone: RwSignal<String>,
}

impl FormState {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            department: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
        }
    }

    /// 编辑模式：用服务端记录回填表单。
    fn load(&self, employee: &Employee) {
        self.name.set(employee.name.clone());
        self.email.set(employee.email.clone());
        self.department.set(employee.department.clone());
        self.phone.set(employee.phone.clone());
    }

    /// 清空表单（创建成功后）。
    fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.department.set(String::new());
        self.phone.set(String::new());
    }

    fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            department: self.department.get_untracked(),
            phone: self.phone.get_untracked(),
        }
    }
}

// =========================================================
// 视图
// =========================================================

/// 员工表单页：`employee_id` 缺省为创建模式，给定时为编辑模式
/// （进入时拉取现有记录回填）。
#[component]
pub fn EmployeeFormPage(
    /// 路由携带的员工 id（编辑模式）
    #[prop(optional, into)]
    employee_id: Option<i64>,
) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let form = FormState::new();
    let (is_submitting, set_is_submitting) = signal(false);
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);

    let is_edit = employee_id.is_some();

    // 编辑模式：进入时拉取现有记录；失败仅提示，表单保持可编辑
    if let Some(id) = employee_id {
        let api = ApiClient::new(auth.session);
        spawn_local(async move {
            match api.get_by_id(id).await {
                Ok(employee) => form.load(&employee),
                Err(_) => {
                    set_notice.set(Some(("Failed to load employee data".to_string(), true)));
                }
            }
        });
    }

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let draft = form.to_draft();
        // 校验不通过就不发请求
        if let Err(e) = validate_employee(&draft) {
            set_notice.set(Some((e.to_string(), true)));
            return;
        }

        set_is_submitting.set(true);
        set_notice.set(None);

        let api = ApiClient::new(auth.session);
        spawn_local(async move {
            let result = match employee_id {
                Some(id) => api.update(id, &draft).await.map(|_| ()),
                None => api.create(&draft).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    let message = if is_edit {
                        "Employee updated successfully!"
                    } else {
                        form.reset();
                        "Employee added successfully!"
                    };
                    set_notice.set(Some((message.to_string(), false)));
                    set_is_submitting.set(false);
                    router.navigate("/employees");
                }
                Err(_) => {
                    let message = if is_edit {
                        "Unable to update employee. Please check your details and try again."
                    } else {
                        "Unable to add employee. Please check your details and try again."
                    };
                    set_notice.set(Some((message.to_string(), true)));
                    set_is_submitting.set(false);
                }
            }
        });
    };

    let text_field = move |id: &'static str,
                           label: &'static str,
                           input_type: &'static str,
                           placeholder: &'static str,
                           value: RwSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label" for=id>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id=id
                    type=input_type
                    placeholder=placeholder
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=value
                    class="input input-bordered w-full"
                    required
                />
            </div>
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-xl mx-auto">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            {if is_edit { "Edit employee" } else { "Add employee" }}
                        </h2>

                        <Show when=move || notice.get().is_some()>
                            <div
                                role="alert"
                                class=move || {
                                    if notice.get().map(|(_, is_err)| is_err).unwrap_or(false) {
                                        "alert alert-error text-sm py-2"
                                    } else {
                                        "alert alert-success text-sm py-2"
                                    }
                                }
                            >
                                <span>{move || notice.get().map(|(text, _)| text).unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <form class="space-y-4" on:submit=on_submit>
                            {text_field("name", "Name", "text", "Alice Smith", form.name)}
                            {text_field("email", "Email", "email", "alice@example.com", form.email)}
                            {text_field("department", "Department", "text", "HR", form.department)}
                            {text_field("phone", "Phone", "tel", "1234567890", form.phone)}

                            <div class="card-actions justify-end mt-6">
                                <button
                                    type="button"
                                    class="btn btn-ghost"
                                    on:click=move |_| router.navigate("/employees")
                                >
                                    "Cancel"
                                </button>
                                <button
                                    type="submit"
                                    class="btn btn-primary"
                                    disabled=move || is_submitting.get()
                                >
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                                    } else if is_edit {
                                        "Update employee".into_any()
                                    } else {
                                        "Add employee".into_any()
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
