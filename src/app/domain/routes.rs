//! Bidirectional mapping between dashboard sections and route paths.

use std::collections::HashMap;

use crate::app::infrastructure::error::{AppError, Result};

/// Section reported for any location the table cannot place.
pub const DEFAULT_SECTION: &str = "home";

/// Canonical dashboard routes, in sidebar order.
pub const DASHBOARD_ROUTES: &[(&str, &str)] = &[
    // Overview
    ("main-dashboard", "/dashboard"),
    ("analytics", "/dashboard/analytics"),
    ("reports", "/dashboard/reports"),
    // Customers & contracts
    ("customer-management", "/dashboard/customer-management"),
    ("contract-management", "/dashboard/contract-management"),
    ("contract-templates", "/dashboard/contract-templates"),
    ("contract-renewals", "/dashboard/contract-renewals"),
    ("quotations", "/dashboard/quotations"),
    // Human resources
    ("employee-management", "/dashboard/employee-management"),
    ("departments", "/dashboard/departments"),
    ("attendance", "/dashboard/attendance"),
    ("leave-requests", "/dashboard/leave-requests"),
    ("payroll", "/dashboard/payroll"),
    ("recruitment", "/dashboard/recruitment"),
    ("performance-reviews", "/dashboard/performance-reviews"),
    ("training", "/dashboard/training"),
    // Finance & payments
    ("invoices", "/dashboard/invoices"),
    ("payments", "/dashboard/payments"),
    ("payment-methods", "/dashboard/payment-methods"),
    ("receipts", "/dashboard/receipts"),
    ("expenses", "/dashboard/expenses"),
    ("budgets", "/dashboard/budgets"),
    ("financial-reports", "/dashboard/financial-reports"),
    ("tax-settings", "/dashboard/tax-settings"),
    ("bank-accounts", "/dashboard/bank-accounts"),
    // Inventory & supply
    ("inventory", "/dashboard/inventory"),
    ("products", "/dashboard/products"),
    ("product-categories", "/dashboard/product-categories"),
    ("warehouses", "/dashboard/warehouses"),
    ("stock-movements", "/dashboard/stock-movements"),
    ("suppliers", "/dashboard/suppliers"),
    ("purchase-orders", "/dashboard/purchase-orders"),
    ("sales-orders", "/dashboard/sales-orders"),
    ("returns", "/dashboard/returns"),
    ("shipments", "/dashboard/shipments"),
    // Real estate
    ("properties", "/dashboard/properties"),
    ("units", "/dashboard/units"),
    ("tenants", "/dashboard/tenants"),
    ("maintenance-requests", "/dashboard/maintenance-requests"),
    // CRM & workspace
    ("leads", "/dashboard/leads"),
    ("campaigns", "/dashboard/campaigns"),
    ("tasks", "/dashboard/tasks"),
    ("calendar", "/dashboard/calendar"),
    ("documents", "/dashboard/documents"),
    ("messages", "/dashboard/messages"),
    ("notifications", "/dashboard/notifications"),
    // Administration
    ("users", "/dashboard/users"),
    ("roles", "/dashboard/roles"),
    ("audit-log", "/dashboard/audit-log"),
    ("integrations", "/dashboard/integrations"),
    ("settings", "/dashboard/settings"),
    ("help-center", "/dashboard/help-center"),
];

/// Dynamic sub-routes that carry an id segment and belong to a parent section.
pub const DASHBOARD_PREFIXES: &[(&str, &str)] = &[
    ("/dashboard/contract-details/", "contract-management"),
    ("/dashboard/invoice-details/", "invoices"),
    ("/dashboard/employee-details/", "employee-management"),
];

/// Strip query, fragment and a trailing slash (the root `/` is kept).
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    order: Vec<String>,
    by_section: HashMap<String, String>,
    by_route: HashMap<String, String>,
    prefixes: Vec<(String, String)>,
}

impl RouteTable {
    /// The full dashboard table with its dynamic prefixes.
    pub fn dashboard() -> Result<Self> {
        let mut table = Self::from_entries(DASHBOARD_ROUTES.iter().copied())?;
        for (prefix, section) in DASHBOARD_PREFIXES {
            table = table.with_prefix(prefix, section)?;
        }
        Ok(table)
    }

    /// Build a table, failing on the first duplicate section, duplicate route
    /// or relative route.
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self> {
        let mut table = Self {
            order: Vec::new(),
            by_section: HashMap::new(),
            by_route: HashMap::new(),
            prefixes: Vec::new(),
        };

        for (section, route) in entries {
            if !route.starts_with('/') {
                return Err(AppError::InvalidRoute {
                    section: section.to_string(),
                    route: route.to_string(),
                });
            }
            if table.by_section.contains_key(section) {
                return Err(AppError::DuplicateSection(section.to_string()));
            }
            if let Some(first) = table.by_route.get(route) {
                return Err(AppError::DuplicateRoute {
                    route: route.to_string(),
                    first: first.clone(),
                    second: section.to_string(),
                });
            }

            table.order.push(section.to_string());
            table.by_section.insert(section.to_string(), route.to_string());
            table.by_route.insert(route.to_string(), section.to_string());
        }

        Ok(table)
    }

    /// Register a dynamic prefix owned by an already mapped section.
    pub fn with_prefix(mut self, prefix: &str, section: &str) -> Result<Self> {
        if !self.by_section.contains_key(section) {
            return Err(AppError::UnmappedPrefixOwner {
                prefix: prefix.to_string(),
                section: section.to_string(),
            });
        }
        self.prefixes.push((prefix.to_string(), section.to_string()));
        Ok(self)
    }

    pub fn route_for(&self, section: &str) -> Option<&str> {
        self.by_section.get(section).map(String::as_str)
    }

    /// Exact inverse lookup; dynamic sub-routes have no entry here.
    pub fn section_for(&self, route: &str) -> Option<&str> {
        self.by_route.get(route).map(String::as_str)
    }

    pub fn prefix_owner(&self, path: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|(prefix, _)| path.starts_with(prefix.as_str()))
            .map(|(_, section)| section.as_str())
    }

    /// Sections in declaration order
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dashboard_table_builds() {
        let table = RouteTable::dashboard().unwrap();
        assert_eq!(table.len(), DASHBOARD_ROUTES.len());
        assert!(table.len() >= 50);
    }

    #[test]
    fn test_known_mappings() {
        let table = RouteTable::dashboard().unwrap();
        assert_eq!(table.route_for("main-dashboard"), Some("/dashboard"));
        assert_eq!(
            table.route_for("customer-management"),
            Some("/dashboard/customer-management")
        );
        assert_eq!(
            table.route_for("contract-management"),
            Some("/dashboard/contract-management")
        );
        assert_eq!(
            table.route_for("employee-management"),
            Some("/dashboard/employee-management")
        );
        assert_eq!(table.route_for("invoices"), Some("/dashboard/invoices"));
        assert_eq!(table.route_for("nonexistent-section"), None);
    }

    #[test]
    fn test_every_section_round_trips_through_inverse() {
        let table = RouteTable::dashboard().unwrap();
        let mut routes = HashSet::new();
        for section in table.sections() {
            let route = table.route_for(section).unwrap();
            assert!(routes.insert(route), "route {route} mapped twice");
            assert_eq!(table.section_for(route), Some(section));
        }
    }

    #[test]
    fn test_dynamic_paths_have_no_exact_inverse() {
        let table = RouteTable::dashboard().unwrap();
        let path = "/dashboard/contract-details/42";
        assert_eq!(table.section_for(path), None);
        assert_eq!(table.prefix_owner(path), Some("contract-management"));
        assert_eq!(table.prefix_owner("/dashboard/invoices"), None);
    }

    #[test]
    fn test_duplicate_route_fails() {
        let err = RouteTable::from_entries([
            ("financial-reports", "/dashboard/financial-reports"),
            ("dashboard-financial-reports", "/dashboard/financial-reports"),
        ])
        .unwrap_err();
        match err {
            AppError::DuplicateRoute { route, first, second } => {
                assert_eq!(route, "/dashboard/financial-reports");
                assert_eq!(first, "financial-reports");
                assert_eq!(second, "dashboard-financial-reports");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_divergent_duplicate_section_fails() {
        let err = RouteTable::from_entries([
            ("financial-reports", "/dashboard/financial-reports"),
            ("financial-reports", "/dashboard/reports/financial"),
        ])
        .unwrap_err();
        assert!(matches!(err, AppError::DuplicateSection(s) if s == "financial-reports"));
    }

    #[test]
    fn test_relative_route_fails() {
        let err = RouteTable::from_entries([("invoices", "dashboard/invoices")]).unwrap_err();
        assert!(matches!(err, AppError::InvalidRoute { .. }));
    }

    #[test]
    fn test_prefix_owner_must_be_mapped() {
        let table = RouteTable::from_entries([("invoices", "/dashboard/invoices")]).unwrap();
        let err = table
            .with_prefix("/dashboard/contract-details/", "contract-management")
            .unwrap_err();
        assert!(matches!(err, AppError::UnmappedPrefixOwner { .. }));
    }

    #[test]
    fn test_sections_keep_declaration_order() {
        let table = RouteTable::dashboard().unwrap();
        let first: Vec<&str> = table.sections().take(3).collect();
        assert_eq!(first, vec!["main-dashboard", "analytics", "reports"]);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/dashboard/invoices/"), "/dashboard/invoices");
        assert_eq!(normalize_path("/dashboard/invoices?page=2"), "/dashboard/invoices");
        assert_eq!(normalize_path("/dashboard#top"), "/dashboard");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "");
    }
}
