//! Dashboard and reporting endpoints. All of these sit under `/analytics`,
//! which is on the default silent list: 5xx here never produce a
//! notification.

use std::fmt::Display;

use serde::Serialize;

use crate::error::ApiError;
use crate::http::RequestDescriptor;

pub fn get_dashboard() -> RequestDescriptor {
    RequestDescriptor::get("/analytics/dashboard")
}

pub fn get_kpi() -> RequestDescriptor {
    RequestDescriptor::get("/analytics/kpi")
}

pub fn get_sales_analytics(period: &str) -> RequestDescriptor {
    RequestDescriptor::get("/analytics/sales").with_query("period", period)
}

pub fn get_product_analytics() -> RequestDescriptor {
    RequestDescriptor::get("/analytics/products")
}

pub fn get_category_analytics() -> RequestDescriptor {
    RequestDescriptor::get("/analytics/categories")
}

pub fn get_revenue_analytics(period: &str) -> RequestDescriptor {
    RequestDescriptor::get("/analytics/revenue").with_query("period", period)
}

pub fn get_trends() -> RequestDescriptor {
    RequestDescriptor::get("/analytics/trends")
}

pub fn get_alerts() -> RequestDescriptor {
    RequestDescriptor::get("/analytics/alerts")
}

pub fn get_statistics() -> RequestDescriptor {
    RequestDescriptor::get("/analytics/statistics")
}

pub fn get_monthly_sales() -> RequestDescriptor {
    RequestDescriptor::get("/analytics/sales/monthly")
}

pub fn get_daily_sales(start: &str, end: &str) -> RequestDescriptor {
    RequestDescriptor::get("/analytics/sales/daily")
        .with_query("start", start)
        .with_query("end", end)
}

pub fn get_best_sellers(limit: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("/analytics/products/best-sellers").with_query("limit", limit.unwrap_or(10))
}

/// Defaults: `max_sold` 5, `limit` 10.
pub fn get_slow_movers(max_sold: Option<u32>, limit: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("/analytics/products/slow-movers")
        .with_query("maxSold", max_sold.unwrap_or(5))
        .with_query("limit", limit.unwrap_or(10))
}

pub fn get_low_stock_products(threshold: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("/analytics/products/low-stock").with_query("threshold", threshold.unwrap_or(5))
}

pub fn get_current_month_evolution() -> RequestDescriptor {
    RequestDescriptor::get("/analytics/evolution/current-month")
}

pub fn get_basket_stats() -> RequestDescriptor {
    RequestDescriptor::get("/analytics/basket/stats")
}

pub fn filter_products<T: Serialize>(filter: &T) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::post("/analytics/products/filter").with_json(filter)
}

/// The response body is CSV text, not JSON.
pub fn export_csv<T: Serialize>(filter: &T) -> Result<RequestDescriptor, ApiError> {
    Ok(RequestDescriptor::post("/analytics/export/csv")
        .with_json(filter)?
        .with_header("Accept", "text/csv"))
}

pub fn analyze_category(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::get(format!("/analytics/category/{id}"))
}

pub fn get_vendor_kpi() -> RequestDescriptor {
    RequestDescriptor::get("/analytics/vendeur/kpi")
}

pub fn get_vendor_best_sellers(limit: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("/analytics/vendeur/products/best-sellers").with_query("limit", limit.unwrap_or(5))
}

pub fn get_vendor_daily_sales() -> RequestDescriptor {
    RequestDescriptor::get("/analytics/vendeur/sales/daily")
}
