//! Links the notification points to

/// Route of the license administration screen
pub const LICENSE_ADMIN_ROUTE: &str = "/admin/extension/license/app";

/// Route of a component's background task list
pub const BACKGROUND_TASKS_ROUTE: &str = "/project/background_tasks";

/// URL of the background task page for the component `key`
pub fn component_background_task_url(base_url: &str, key: &str) -> String {
    format!(
        "{}{}?id={}",
        base_url,
        BACKGROUND_TASKS_ROUTE,
        urlencoding::encode(key)
    )
}

pub fn license_admin_url(base_url: &str) -> String {
    format!("{}{}", base_url, LICENSE_ADMIN_ROUTE)
}
