//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{assets, assignments, auth, categories, health, stats, vendors};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AssetFlow API",
        version = "0.1.0",
        description = "Asset tracking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::admin_signup,
        auth::admin_login,
        auth::vendor_signup,
        auth::vendor_login,
        // Dashboard
        stats::dashboard,
        // Assets
        assets::list_assets,
        assets::create_asset,
        assets::delete_asset,
        assets::change_status,
        assets::asset_history,
        // Assignments
        assignments::list_assignments,
        assignments::assign_asset,
        // Categories
        categories::list_categories,
        categories::add_category,
        // Vendors
        vendors::list_vendors,
        vendors::add_vendor,
        vendors::delete_vendor,
        vendors::vendor_assets,
        vendors::vendor_dashboard,
        vendors::vendor_add_asset,
    ),
    components(
        schemas(
            // Auth
            auth::LoginResponse,
            crate::models::admin::Admin,
            crate::models::admin::AdminSignup,
            crate::models::admin::AdminLogin,
            crate::models::vendor::Vendor,
            crate::models::vendor::VendorSignup,
            crate::models::vendor::VendorLogin,
            crate::models::auth::AccountRole,
            // Assets
            crate::models::asset::Asset,
            crate::models::asset::AssetOverview,
            crate::models::asset::AssetStatus,
            crate::models::asset::CreateAsset,
            crate::models::history::StatusHistory,
            assets::StatusChangeForm,
            assets::AssetHistoryResponse,
            // Assignments
            crate::models::assignment::Assignment,
            crate::models::assignment::AssignmentOverview,
            assignments::AssignForm,
            assignments::AssignResponse,
            // Categories
            crate::models::category::Category,
            crate::models::category::CreateCategory,
            // Vendors
            vendors::VendorAssetsResponse,
            // Dashboard
            stats::DashboardResponse,
            stats::StatusCounts,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "dashboard", description = "Admin dashboard"),
        (name = "assets", description = "Asset catalog and lifecycle"),
        (name = "assignments", description = "Asset assignments"),
        (name = "categories", description = "Asset categories"),
        (name = "vendors", description = "Vendor management"),
        (name = "vendor-portal", description = "Vendor self-service")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
