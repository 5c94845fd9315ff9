//! Aggregated metrics datasets: KPIs, sales series, and analytics rollups.
//!
//! The seven-day series and the analytics tables are fixed seed data; the
//! thirty-day series is generated on demand from the injected jitter
//! source so its values stay reproducible under a fixed seed.

use crate::repositories::models::{KpiSnapshot, ProductSales, RegionSales, SalesPoint};
use crate::services::jitter::JitterSource;
use chrono::{Duration, Utc};
use std::sync::Arc;

/// Repository for the dashboard's aggregate figures.
#[derive(Debug, Clone)]
pub struct MetricsRepository {
    kpis: KpiSnapshot,
    sales_7d: Arc<Vec<SalesPoint>>,
    top_products: Arc<Vec<ProductSales>>,
    sales_by_region: Arc<Vec<RegionSales>>,
}

impl MetricsRepository {
    /// Creates a repository seeded with the demo metrics.
    pub fn seeded() -> Self {
        let kpis = KpiSnapshot {
            total_sales: 125_000,
            active_customers: 1_247,
            daily_revenue: 5_430,
            monthly_growth: 12.5,
            conversion_rate: 2.4,
            avg_order_value: 156,
            customer_retention: 78,
        };

        let sales_7d = vec![
            sales_point("2024-01-01", 12_000, 45, 38),
            sales_point("2024-01-02", 15_000, 52, 41),
            sales_point("2024-01-03", 13_500, 48, 39),
            sales_point("2024-01-04", 18_000, 61, 52),
            sales_point("2024-01-05", 16_500, 55, 47),
            sales_point("2024-01-06", 21_000, 68, 58),
            sales_point("2024-01-07", 19_500, 63, 54),
        ];

        let top_products = vec![
            product("Premium Package", 45, 13_455),
            product("Standard Package", 78, 12_168),
            product("Basic Package", 123, 10_947),
            product("Enterprise Package", 23, 9_936),
        ];

        let sales_by_region = vec![
            region("North America", 45_000, 36.0),
            region("Europe", 38_000, 30.4),
            region("Asia Pacific", 28_000, 22.4),
            region("Other", 14_000, 11.2),
        ];

        Self {
            kpis,
            sales_7d: Arc::new(sales_7d),
            top_products: Arc::new(top_products),
            sales_by_region: Arc::new(sales_by_region),
        }
    }

    /// Baseline KPI figures; per-request enrichment happens in the handler.
    pub fn kpis(&self) -> KpiSnapshot {
        self.kpis
    }

    /// The fixed seven-day sales series, oldest first.
    pub fn sales_7d(&self) -> &[SalesPoint] {
        &self.sales_7d
    }

    /// Generates a thirty-day series ending today, oldest first.
    ///
    /// Values come from the injected jitter source, so a seeded source
    /// yields a reproducible series.
    pub fn sales_30d(&self, jitter: &JitterSource) -> Vec<SalesPoint> {
        let today = Utc::now().date_naive();

        (0..30)
            .rev()
            .map(|days_ago| SalesPoint {
                date: (today - Duration::days(days_ago)).to_string(),
                sales: jitter.in_range(10_000, 35_000),
                orders: jitter.in_range(30, 110),
                customers: jitter.in_range(25, 85),
            })
            .collect()
    }

    /// Total orders across the seven-day series.
    pub fn total_orders_7d(&self) -> u64 {
        self.sales_7d.iter().map(|day| day.orders).sum()
    }

    pub fn top_products(&self) -> &[ProductSales] {
        &self.top_products
    }

    pub fn sales_by_region(&self) -> &[RegionSales] {
        &self.sales_by_region
    }
}

fn sales_point(date: &str, sales: u64, orders: u64, customers: u64) -> SalesPoint {
    SalesPoint {
        date: date.to_string(),
        sales,
        orders,
        customers,
    }
}

fn product(name: &str, sales: u64, revenue: u64) -> ProductSales {
    ProductSales {
        name: name.to_string(),
        sales,
        revenue,
    }
}

fn region(name: &str, sales: u64, percentage: f64) -> RegionSales {
    RegionSales {
        region: name.to_string(),
        sales,
        percentage,
    }
}
