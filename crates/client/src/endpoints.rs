//! # エンドポイント一覧
//!
//! SDK が呼び出すすべての REST 操作の記述子。
//! 名前は Authentik の operationId（`core_users_list` など）に揃える。
//!
//! パスはベース URL からの相対パスで、末尾は必ず `/`（Authentik は末尾スラッシュなしを 404 にする）。

use crate::endpoint::{Endpoint, ResponseShape};

// --- 管理 ---

pub const ADMIN_SYSTEM: Endpoint =
    Endpoint::get("admin_system_retrieve", "api/v3/admin/system/", ResponseShape::Object);
pub const ADMIN_VERSION: Endpoint =
    Endpoint::get("admin_version_retrieve", "api/v3/admin/version/", ResponseShape::Object);
pub const ADMIN_APPS: Endpoint =
    Endpoint::get("admin_apps_list", "api/v3/admin/apps/", ResponseShape::List);

// --- 認証器 ---

pub const AUTHENTICATORS_ALL: Endpoint =
    Endpoint::get("authenticators_all_list", "api/v3/authenticators/all/", ResponseShape::List);
pub const AUTHENTICATORS_ADMIN_ALL: Endpoint = Endpoint::get(
    "authenticators_admin_all_list",
    "api/v3/authenticators/admin/all/",
    ResponseShape::List,
);

pub const AUTHENTICATORS_ADMIN_LIST: Endpoint = Endpoint::get(
    "authenticators_admin_list",
    "api/v3/authenticators/admin/{kind}/",
    ResponseShape::Paginated,
);
pub const AUTHENTICATORS_ADMIN_RETRIEVE: Endpoint = Endpoint::get(
    "authenticators_admin_retrieve",
    "api/v3/authenticators/admin/{kind}/{id}/",
    ResponseShape::Object,
);
pub const AUTHENTICATORS_ADMIN_CREATE: Endpoint = Endpoint::post(
    "authenticators_admin_create",
    "api/v3/authenticators/admin/{kind}/",
    ResponseShape::Object,
);
pub const AUTHENTICATORS_ADMIN_UPDATE: Endpoint =
    Endpoint::put("authenticators_admin_update", "api/v3/authenticators/admin/{kind}/{id}/");
pub const AUTHENTICATORS_ADMIN_PARTIAL_UPDATE: Endpoint = Endpoint::patch(
    "authenticators_admin_partial_update",
    "api/v3/authenticators/admin/{kind}/{id}/",
);
pub const AUTHENTICATORS_ADMIN_DESTROY: Endpoint =
    Endpoint::delete("authenticators_admin_destroy", "api/v3/authenticators/admin/{kind}/{id}/");

pub const AUTHENTICATORS_LIST: Endpoint = Endpoint::get(
    "authenticators_list",
    "api/v3/authenticators/{kind}/",
    ResponseShape::Paginated,
);
pub const AUTHENTICATORS_RETRIEVE: Endpoint = Endpoint::get(
    "authenticators_retrieve",
    "api/v3/authenticators/{kind}/{id}/",
    ResponseShape::Object,
);
pub const AUTHENTICATORS_UPDATE: Endpoint =
    Endpoint::put("authenticators_update", "api/v3/authenticators/{kind}/{id}/");
pub const AUTHENTICATORS_PARTIAL_UPDATE: Endpoint =
    Endpoint::patch("authenticators_partial_update", "api/v3/authenticators/{kind}/{id}/");
pub const AUTHENTICATORS_DESTROY: Endpoint =
    Endpoint::delete("authenticators_destroy", "api/v3/authenticators/{kind}/{id}/");

// --- ユーザー ---

pub const CORE_USERS_LIST: Endpoint =
    Endpoint::get("core_users_list", "api/v3/core/users/", ResponseShape::Paginated);
pub const CORE_USERS_RETRIEVE: Endpoint =
    Endpoint::get("core_users_retrieve", "api/v3/core/users/{id}/", ResponseShape::Object);
pub const CORE_USERS_CREATE: Endpoint =
    Endpoint::post("core_users_create", "api/v3/core/users/", ResponseShape::Object);
pub const CORE_USERS_UPDATE: Endpoint = Endpoint::put("core_users_update", "api/v3/core/users/{id}/");
pub const CORE_USERS_PARTIAL_UPDATE: Endpoint =
    Endpoint::patch("core_users_partial_update", "api/v3/core/users/{id}/");
pub const CORE_USERS_DESTROY: Endpoint =
    Endpoint::delete("core_users_destroy", "api/v3/core/users/{id}/");
pub const CORE_USERS_ME: Endpoint =
    Endpoint::get("core_users_me_retrieve", "api/v3/core/users/me/", ResponseShape::Object);
pub const CORE_USERS_SET_PASSWORD: Endpoint = Endpoint::post(
    "core_users_set_password_create",
    "api/v3/core/users/{id}/set_password/",
    ResponseShape::Empty,
);
pub const CORE_USERS_USED_BY: Endpoint = Endpoint::get(
    "core_users_used_by_list",
    "api/v3/core/users/{id}/used_by/",
    ResponseShape::List,
);
pub const CORE_USERS_PATHS: Endpoint =
    Endpoint::get("core_users_paths_retrieve", "api/v3/core/users/paths/", ResponseShape::Object);

// --- グループ ---

pub const CORE_GROUPS_LIST: Endpoint =
    Endpoint::get("core_groups_list", "api/v3/core/groups/", ResponseShape::Paginated);
pub const CORE_GROUPS_RETRIEVE: Endpoint =
    Endpoint::get("core_groups_retrieve", "api/v3/core/groups/{group_uuid}/", ResponseShape::Object);
pub const CORE_GROUPS_CREATE: Endpoint =
    Endpoint::post("core_groups_create", "api/v3/core/groups/", ResponseShape::Object);
pub const CORE_GROUPS_UPDATE: Endpoint =
    Endpoint::put("core_groups_update", "api/v3/core/groups/{group_uuid}/");
pub const CORE_GROUPS_PARTIAL_UPDATE: Endpoint =
    Endpoint::patch("core_groups_partial_update", "api/v3/core/groups/{group_uuid}/");
pub const CORE_GROUPS_DESTROY: Endpoint =
    Endpoint::delete("core_groups_destroy", "api/v3/core/groups/{group_uuid}/");
pub const CORE_GROUPS_ADD_USER: Endpoint = Endpoint::post(
    "core_groups_add_user_create",
    "api/v3/core/groups/{group_uuid}/add_user/",
    ResponseShape::Empty,
);
pub const CORE_GROUPS_REMOVE_USER: Endpoint = Endpoint::post(
    "core_groups_remove_user_create",
    "api/v3/core/groups/{group_uuid}/remove_user/",
    ResponseShape::Empty,
);
pub const CORE_GROUPS_USED_BY: Endpoint = Endpoint::get(
    "core_groups_used_by_list",
    "api/v3/core/groups/{group_uuid}/used_by/",
    ResponseShape::List,
);

// --- アプリケーション ---

pub const CORE_APPLICATIONS_LIST: Endpoint =
    Endpoint::get("core_applications_list", "api/v3/core/applications/", ResponseShape::Paginated);
pub const CORE_APPLICATIONS_RETRIEVE: Endpoint = Endpoint::get(
    "core_applications_retrieve",
    "api/v3/core/applications/{slug}/",
    ResponseShape::Object,
);
pub const CORE_APPLICATIONS_CREATE: Endpoint =
    Endpoint::post("core_applications_create", "api/v3/core/applications/", ResponseShape::Object);
pub const CORE_APPLICATIONS_UPDATE: Endpoint =
    Endpoint::put("core_applications_update", "api/v3/core/applications/{slug}/");
pub const CORE_APPLICATIONS_PARTIAL_UPDATE: Endpoint =
    Endpoint::patch("core_applications_partial_update", "api/v3/core/applications/{slug}/");
pub const CORE_APPLICATIONS_DESTROY: Endpoint =
    Endpoint::delete("core_applications_destroy", "api/v3/core/applications/{slug}/");
pub const CORE_APPLICATIONS_CHECK_ACCESS: Endpoint = Endpoint::get(
    "core_applications_check_access_retrieve",
    "api/v3/core/applications/{slug}/check_access/",
    ResponseShape::Object,
);
pub const CORE_APPLICATIONS_USED_BY: Endpoint = Endpoint::get(
    "core_applications_used_by_list",
    "api/v3/core/applications/{slug}/used_by/",
    ResponseShape::List,
);

// --- トークン ---

pub const CORE_TOKENS_LIST: Endpoint =
    Endpoint::get("core_tokens_list", "api/v3/core/tokens/", ResponseShape::Paginated);
pub const CORE_TOKENS_RETRIEVE: Endpoint = Endpoint::get(
    "core_tokens_retrieve",
    "api/v3/core/tokens/{identifier}/",
    ResponseShape::Object,
);
pub const CORE_TOKENS_CREATE: Endpoint =
    Endpoint::post("core_tokens_create", "api/v3/core/tokens/", ResponseShape::Object);
pub const CORE_TOKENS_UPDATE: Endpoint =
    Endpoint::put("core_tokens_update", "api/v3/core/tokens/{identifier}/");
pub const CORE_TOKENS_PARTIAL_UPDATE: Endpoint =
    Endpoint::patch("core_tokens_partial_update", "api/v3/core/tokens/{identifier}/");
pub const CORE_TOKENS_DESTROY: Endpoint =
    Endpoint::delete("core_tokens_destroy", "api/v3/core/tokens/{identifier}/");
pub const CORE_TOKENS_VIEW_KEY: Endpoint = Endpoint::get(
    "core_tokens_view_key_retrieve",
    "api/v3/core/tokens/{identifier}/view_key/",
    ResponseShape::Object,
);
pub const CORE_TOKENS_SET_KEY: Endpoint = Endpoint::post(
    "core_tokens_set_key_create",
    "api/v3/core/tokens/{identifier}/set_key/",
    ResponseShape::Empty,
);
pub const CORE_TOKENS_USED_BY: Endpoint = Endpoint::get(
    "core_tokens_used_by_list",
    "api/v3/core/tokens/{identifier}/used_by/",
    ResponseShape::List,
);

// --- イベント ---

pub const EVENTS_EVENTS_LIST: Endpoint =
    Endpoint::get("events_events_list", "api/v3/events/events/", ResponseShape::Paginated);
pub const EVENTS_EVENTS_RETRIEVE: Endpoint = Endpoint::get(
    "events_events_retrieve",
    "api/v3/events/events/{event_uuid}/",
    ResponseShape::Object,
);
pub const EVENTS_EVENTS_TOP_PER_USER: Endpoint = Endpoint::get(
    "events_events_top_per_user_list",
    "api/v3/events/events/top_per_user/",
    ResponseShape::List,
);
pub const EVENTS_EVENTS_ACTIONS: Endpoint = Endpoint::get(
    "events_events_actions_list",
    "api/v3/events/events/actions/",
    ResponseShape::List,
);

// --- フロー ---

pub const FLOWS_INSTANCES_LIST: Endpoint =
    Endpoint::get("flows_instances_list", "api/v3/flows/instances/", ResponseShape::Paginated);
pub const FLOWS_INSTANCES_RETRIEVE: Endpoint = Endpoint::get(
    "flows_instances_retrieve",
    "api/v3/flows/instances/{slug}/",
    ResponseShape::Object,
);
pub const FLOWS_INSTANCES_DESTROY: Endpoint =
    Endpoint::delete("flows_instances_destroy", "api/v3/flows/instances/{slug}/");
pub const FLOWS_INSTANCES_USED_BY: Endpoint = Endpoint::get(
    "flows_instances_used_by_list",
    "api/v3/flows/instances/{slug}/used_by/",
    ResponseShape::List,
);

/// すべての記述子（テスト・診断用）
pub const ALL: &[Endpoint] = &[
    ADMIN_SYSTEM,
    ADMIN_VERSION,
    ADMIN_APPS,
    AUTHENTICATORS_ALL,
    AUTHENTICATORS_ADMIN_ALL,
    AUTHENTICATORS_ADMIN_LIST,
    AUTHENTICATORS_ADMIN_RETRIEVE,
    AUTHENTICATORS_ADMIN_CREATE,
    AUTHENTICATORS_ADMIN_UPDATE,
    AUTHENTICATORS_ADMIN_PARTIAL_UPDATE,
    AUTHENTICATORS_ADMIN_DESTROY,
    AUTHENTICATORS_LIST,
    AUTHENTICATORS_RETRIEVE,
    AUTHENTICATORS_UPDATE,
    AUTHENTICATORS_PARTIAL_UPDATE,
    AUTHENTICATORS_DESTROY,
    CORE_USERS_LIST,
    CORE_USERS_RETRIEVE,
    CORE_USERS_CREATE,
    CORE_USERS_UPDATE,
    CORE_USERS_PARTIAL_UPDATE,
    CORE_USERS_DESTROY,
    CORE_USERS_ME,
    CORE_USERS_SET_PASSWORD,
    CORE_USERS_USED_BY,
    CORE_USERS_PATHS,
    CORE_GROUPS_LIST,
    CORE_GROUPS_RETRIEVE,
    CORE_GROUPS_CREATE,
    CORE_GROUPS_UPDATE,
    CORE_GROUPS_PARTIAL_UPDATE,
    CORE_GROUPS_DESTROY,
    CORE_GROUPS_ADD_USER,
    CORE_GROUPS_REMOVE_USER,
    CORE_GROUPS_USED_BY,
    CORE_APPLICATIONS_LIST,
    CORE_APPLICATIONS_RETRIEVE,
    CORE_APPLICATIONS_CREATE,
    CORE_APPLICATIONS_UPDATE,
    CORE_APPLICATIONS_PARTIAL_UPDATE,
    CORE_APPLICATIONS_DESTROY,
    CORE_APPLICATIONS_CHECK_ACCESS,
    CORE_APPLICATIONS_USED_BY,
    CORE_TOKENS_LIST,
    CORE_TOKENS_RETRIEVE,
    CORE_TOKENS_CREATE,
    CORE_TOKENS_UPDATE,
    CORE_TOKENS_PARTIAL_UPDATE,
    CORE_TOKENS_DESTROY,
    CORE_TOKENS_VIEW_KEY,
    CORE_TOKENS_SET_KEY,
    CORE_TOKENS_USED_BY,
    EVENTS_EVENTS_LIST,
    EVENTS_EVENTS_RETRIEVE,
    EVENTS_EVENTS_TOP_PER_USER,
    EVENTS_EVENTS_ACTIONS,
    FLOWS_INSTANCES_LIST,
    FLOWS_INSTANCES_RETRIEVE,
    FLOWS_INSTANCES_DESTROY,
    FLOWS_INSTANCES_USED_BY,
];
